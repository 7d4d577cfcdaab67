use std::ops::RangeInclusive;
use thiserror::Error;

/// Constants of the growth model.
pub struct Config;

impl Config {
    pub const DEFAULT_GRID_SIZE: u32 = 30;
    pub const DEFAULT_NUM_STEPS: u64 = 500;
    pub const MAX_GRID_SIZE: u32 = 1 << 12;

    pub const INITIAL_ACTIVATION: f64 = 1.0;
    pub const DEFAULT_GROWTH_RATE: f64 = 0.1;
    pub const DEFAULT_DECAY_RATE: f64 = 0.05;
    /// Half-width of the uniform perturbation applied to inherited rates.
    pub const MUTATION_SPREAD: f64 = 0.01;
    /// Activation must strictly exceed this for an agent to divide.
    pub const DIVISION_THRESHOLD: f64 = 0.5;
    pub const MATURITY_AGE: RangeInclusive<u32> = 1..=3;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be positive")]
    ZeroGridSize,
    #[error("grid size {0} exceeds the maximum of {max}", max = Config::MAX_GRID_SIZE)]
    GridTooLarge(u32),
    #[error("shape covers a {shape}x{shape} grid, expected {grid}x{grid}")]
    ShapeSizeMismatch { shape: u32, grid: u32 },
    #[error("shape does not contain the grid centre")]
    CenterOutsideShape,
}

/// Parameters a simulation is constructed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Side of the square grid.
    pub grid_size: u32,
    /// Number of steps [`SimulationEngine::run`](crate::SimulationEngine::run) executes.
    pub num_steps: u64,
    /// Seed of the random generator; `None` seeds it from entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: Config::DEFAULT_GRID_SIZE,
            num_steps: Config::DEFAULT_NUM_STEPS,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn new(grid_size: u32, num_steps: u64, seed: Option<u64>) -> Self {
        Self {
            grid_size,
            num_steps,
            seed,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.grid_size > Config::MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(self.grid_size));
        }
        Ok(())
    }

    /// Grid centre, where the seed agent is placed.
    pub fn center(&self) -> (i64, i64) {
        let c = (self.grid_size / 2) as i64;
        (c, c)
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError, SimulationConfig};

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.grid_size, 30);
        assert_eq!(config.num_steps, 500);
        assert_eq!(config.seed, None);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.center(), (15, 15));
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            SimulationConfig::new(0, 10, None).validate(),
            Err(ConfigError::ZeroGridSize)
        );
        assert_eq!(
            SimulationConfig::new(Config::MAX_GRID_SIZE + 1, 10, None).validate(),
            Err(ConfigError::GridTooLarge(Config::MAX_GRID_SIZE + 1))
        );
        assert_eq!(SimulationConfig::new(1, 0, Some(7)).validate(), Ok(()));
        assert_eq!(
            SimulationConfig::new(Config::MAX_GRID_SIZE, 0, None).validate(),
            Ok(())
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::ZeroGridSize.to_string(),
            "grid size must be positive"
        );
        assert_eq!(
            ConfigError::GridTooLarge(5000).to_string(),
            "grid size 5000 exceeds the maximum of 4096"
        );
    }
}
