use super::{AgentIdx, Pos};
use ahash::AHashMap as HashMap;

/// Coordinate index of a population: which agent, if any, sits at a cell.
///
/// All implementations must answer identically; they differ only in cost.
pub trait SpatialIndex {
    /// Creates an empty index for a `grid_size x grid_size` grid.
    fn blank(grid_size: u32) -> Self
    where
        Self: Sized;

    /// Agent occupying `pos`, if any. Positions outside the grid are empty.
    fn get(&self, pos: Pos) -> Option<AgentIdx>;

    /// Records `idx` at `pos`. The cell must be empty.
    fn insert(&mut self, pos: Pos, idx: AgentIdx);

    /// Heap memory used by the index.
    fn bytes_total(&self) -> usize;

    /// Short human-readable name, used in statistics and benchmarks.
    fn name(&self) -> &'static str;
}

/// Hash map keyed by coordinate. O(1) expected lookups, memory proportional
/// to the population.
#[derive(Default)]
pub struct HashIndex {
    cells: HashMap<Pos, AgentIdx>,
}

impl SpatialIndex for HashIndex {
    fn blank(_grid_size: u32) -> Self {
        Self::default()
    }

    fn get(&self, pos: Pos) -> Option<AgentIdx> {
        self.cells.get(&pos).copied()
    }

    fn insert(&mut self, pos: Pos, idx: AgentIdx) {
        let prev = self.cells.insert(pos, idx);
        debug_assert!(prev.is_none(), "cell {:?} is already occupied", pos);
    }

    fn bytes_total(&self) -> usize {
        self.cells.capacity() * size_of::<(Pos, AgentIdx)>()
    }

    fn name(&self) -> &'static str {
        "hash"
    }
}

/// Flat `grid_size x grid_size` array. O(1) lookups, memory proportional to
/// the grid area; best for small grids.
pub struct DenseIndex {
    side: i64,
    cells: Vec<Option<AgentIdx>>,
}

impl DenseIndex {
    fn offset(&self, (x, y): Pos) -> Option<usize> {
        if (0..self.side).contains(&x) && (0..self.side).contains(&y) {
            Some((x + y * self.side) as usize)
        } else {
            None
        }
    }
}

impl SpatialIndex for DenseIndex {
    fn blank(grid_size: u32) -> Self {
        let n = grid_size as usize;
        Self {
            side: grid_size as i64,
            cells: vec![None; n * n],
        }
    }

    fn get(&self, pos: Pos) -> Option<AgentIdx> {
        self.offset(pos).and_then(|i| self.cells[i])
    }

    fn insert(&mut self, pos: Pos, idx: AgentIdx) {
        let i = self
            .offset(pos)
            .unwrap_or_else(|| panic!("cell {:?} is outside the grid", pos));
        debug_assert!(self.cells[i].is_none(), "cell {:?} is already occupied", pos);
        self.cells[i] = Some(idx);
    }

    fn bytes_total(&self) -> usize {
        self.cells.capacity() * size_of::<Option<AgentIdx>>()
    }

    fn name(&self) -> &'static str {
        "dense"
    }
}

/// Unindexed list of occupied cells; every lookup scans the whole population,
/// so a step costs O(P²). Kept as the reference the indexed variants are
/// checked and benchmarked against.
#[derive(Default)]
pub struct ScanIndex {
    cells: Vec<(Pos, AgentIdx)>,
}

impl SpatialIndex for ScanIndex {
    fn blank(_grid_size: u32) -> Self {
        Self::default()
    }

    fn get(&self, pos: Pos) -> Option<AgentIdx> {
        self.cells
            .iter()
            .find(|(p, _)| *p == pos)
            .map(|&(_, idx)| idx)
    }

    fn insert(&mut self, pos: Pos, idx: AgentIdx) {
        debug_assert!(self.get(pos).is_none(), "cell {:?} is already occupied", pos);
        self.cells.push((pos, idx));
    }

    fn bytes_total(&self) -> usize {
        self.cells.capacity() * size_of::<(Pos, AgentIdx)>()
    }

    fn name(&self) -> &'static str {
        "scan"
    }
}
