use super::Pos;

/// Region of the grid that agents are allowed to occupy.
///
/// Membership is precomputed once into a flat `grid_size x grid_size` array;
/// everything outside the grid is rejected before the lookup.
#[derive(Clone)]
pub struct ShapeMask {
    grid_size: u32,
    cells: Vec<bool>,
    count: usize,
}

impl ShapeMask {
    /// Diamond of Manhattan radius `grid_size / 3` around the grid centre.
    pub fn diamond(grid_size: u32) -> Self {
        let center = (grid_size / 2) as i64;
        let radius = (grid_size / 3) as i64;
        Self::from_fn(grid_size, |(x, y)| {
            (x - center).abs() + (y - center).abs() <= radius
        })
    }

    /// Builds a mask from an arbitrary predicate evaluated over the grid.
    pub fn from_fn(grid_size: u32, mut inside: impl FnMut(Pos) -> bool) -> Self {
        let n = grid_size as usize;
        let mut cells = vec![false; n * n];
        for y in 0..n {
            for x in 0..n {
                cells[x + y * n] = inside((x as i64, y as i64));
            }
        }
        let count = cells.iter().filter(|&&c| c).count();
        Self {
            grid_size,
            cells,
            count,
        }
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn contains(&self, (x, y): Pos) -> bool {
        let n = self.grid_size as i64;
        if !(0..n).contains(&x) || !(0..n).contains(&y) {
            return false;
        }
        self.cells[(x + y * n) as usize]
    }

    /// Number of cells inside the region.
    pub fn count(&self) -> usize {
        self.count
    }

    /// All cells inside the region, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let n = self.grid_size as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &inside)| inside)
            .map(move |(i, _)| ((i % n) as i64, (i / n) as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::ShapeMask;

    #[test]
    fn test_diamond_small() {
        let mask = ShapeMask::diamond(5);
        let mut inside = mask.cells().collect::<Vec<_>>();
        inside.sort();
        assert_eq!(inside, vec![(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]);
        assert_eq!(mask.count(), 5);
    }

    #[test]
    fn test_out_of_grid() {
        let mask = ShapeMask::diamond(30);
        assert!(mask.contains((15, 15)));
        assert!(mask.contains((25, 15)));
        assert!(!mask.contains((26, 15)));
        for pos in [(-1, 15), (15, -1), (30, 15), (15, 30), (i64::MIN, 0)] {
            assert!(!mask.contains(pos), "{:?}", pos);
        }
    }

    #[test]
    fn test_degenerate_grids() {
        let one = ShapeMask::diamond(1);
        assert_eq!(one.cells().collect::<Vec<_>>(), vec![(0, 0)]);

        let two = ShapeMask::diamond(2);
        assert_eq!(two.cells().collect::<Vec<_>>(), vec![(1, 1)]);
    }

    #[test]
    fn test_matches_manhattan_ball() {
        for n in [3u32, 7, 10, 31] {
            let mask = ShapeMask::diamond(n);
            let (c, r) = ((n / 2) as i64, (n / 3) as i64);
            for y in -2..n as i64 + 2 {
                for x in -2..n as i64 + 2 {
                    let expected = x >= 0
                        && y >= 0
                        && x < n as i64
                        && y < n as i64
                        && (x - c).abs() + (y - c).abs() <= r;
                    assert_eq!(mask.contains((x, y)), expected, "n={} x={} y={}", n, x, y);
                }
            }
        }
    }
}
