mod agent;
mod index;
mod observer;
mod population;
mod shape;
mod simulation;

pub use agent::{Agent, GrowthRules};
pub use index::{DenseIndex, HashIndex, ScanIndex, SpatialIndex};
pub use observer::{Frame, StepObserver, Trajectory};
pub use population::Population;
pub use shape::ShapeMask;
pub use simulation::SimulationEngine;

/// Grid coordinate `(x, y)`.
///
/// Signed, so that candidate cells left of or above the grid can be
/// represented and rejected by the shape test.
pub type Pos = (i64, i64);

/// Handle of an agent inside a [`Population`].
///
/// Agents are never removed, so a handle stays valid for the whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentIdx(pub u32);

impl AgentIdx {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

pub type DefaultIndex = HashIndex;

/// Axis-adjacent cells of `pos`, in the order their activations are summed.
pub(crate) fn neighbours((x, y): Pos) -> [Pos; 4] {
    [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
}
