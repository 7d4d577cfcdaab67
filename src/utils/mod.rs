mod config;

pub use config::{Config, ConfigError, SimulationConfig};
