mod engine;
mod gui;
mod utils;

pub use engine::{
    Agent, AgentIdx, DefaultIndex, DenseIndex, Frame, GrowthRules, HashIndex, Population, Pos,
    ScanIndex, ShapeMask, SimulationEngine, SpatialIndex, StepObserver, Trajectory,
};
pub use gui::App;
pub use utils::{Config, ConfigError, SimulationConfig};
