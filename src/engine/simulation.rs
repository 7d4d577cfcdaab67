use super::{
    Agent, AgentIdx, DefaultIndex, GrowthRules, Pos, Population, ShapeMask, SpatialIndex,
    StepObserver,
};
use crate::{ConfigError, SimulationConfig};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt::Write;

/// Drives the growth of a population inside a [`ShapeMask`].
///
/// Owns the population, the shape and the random generator; every random
/// draw of a run comes from that single generator, so a run is fully
/// determined by the seed and the grid size.
pub struct SimulationEngine<I = DefaultIndex, R = ChaCha8Rng> {
    config: SimulationConfig,
    shape: ShapeMask,
    population: Population<I>,
    rng: R,
    generation: u64,
    divisions: u64,
    positions_buf: Vec<Pos>,
    activations_buf: Vec<f64>,
}

impl SimulationEngine {
    /// Validates `config` and seeds the grid centre with a single agent.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_index(config)
    }
}

impl<I: SpatialIndex> SimulationEngine<I, ChaCha8Rng> {
    /// Same as [`SimulationEngine::new`] with a chosen index backend.
    pub fn with_index(config: SimulationConfig) -> Result<Self, ConfigError> {
        let rng = if let Some(x) = config.seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::with_rng(config, rng)
    }
}

impl<I: SpatialIndex, R: Rng> SimulationEngine<I, R> {
    /// Builds the engine around an externally supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: SimulationConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let shape = ShapeMask::diamond(config.grid_size);
        Self::with_shape(config, shape, rng)
    }

    /// Builds the engine over an arbitrary region of the grid.
    ///
    /// The region must cover the grid centre, where the seed agent goes.
    pub fn with_shape(
        config: SimulationConfig,
        shape: ShapeMask,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if shape.grid_size() != config.grid_size {
            return Err(ConfigError::ShapeSizeMismatch {
                shape: shape.grid_size(),
                grid: config.grid_size,
            });
        }
        if !shape.contains(config.center()) {
            return Err(ConfigError::CenterOutsideShape);
        }

        let mut population = Population::blank(config.grid_size);
        population.insert(Agent::new(
            config.center(),
            GrowthRules::default(),
            &mut rng,
        ));
        Ok(Self {
            config,
            shape,
            population,
            rng,
            generation: 0,
            divisions: 0,
            positions_buf: vec![],
            activations_buf: vec![],
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn shape(&self) -> &ShapeMask {
        &self.shape
    }

    pub fn population(&self) -> &Population<I> {
        &self.population
    }

    #[cfg(test)]
    pub(crate) fn population_mut(&mut self) -> &mut Population<I> {
        &mut self.population
    }

    /// Number of completed steps.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances the simulation by one step.
    ///
    /// Agents alive at the start of the step are updated in insertion order.
    /// Offspring created during the step are not updated until the next one,
    /// but they already count as neighbours for agents updated after them.
    pub fn step(&mut self) {
        let population_before = self.population.len();
        for idx in self.population.snapshot() {
            self.update_agent(idx);
        }
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            population = self.population.len(),
            born = self.population.len() - population_before,
            "step"
        );
    }

    fn update_agent(&mut self, idx: AgentIdx) {
        let pos = self.population[idx].pos;
        let neighbors = self.population.neighbor_state_sum(pos);

        let agent = self.population.get_mut(idx);
        agent.age += 1;
        agent.absorb(neighbors);
        if agent.ready_to_divide() {
            agent.age = 0;
            self.divide(idx);
        }
    }

    /// Tries to place one offspring of `parent` into an adjacent cell.
    ///
    /// Candidates are tried in a fresh random order; the first one inside the
    /// shape and unoccupied wins. Returns `None` when every candidate fails.
    pub(crate) fn divide(&mut self, parent: AgentIdx) -> Option<AgentIdx> {
        let (x, y) = self.population[parent].pos;
        let mut candidates = [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)];
        candidates.shuffle(&mut self.rng);

        let target = candidates
            .into_iter()
            .find(|&p| self.shape.contains(p) && self.population.is_empty_at(p));
        let Some(target) = target else {
            tracing::trace!(parent = parent.0, ?candidates, "no room to divide");
            return None;
        };

        let child = self.population[parent].offspring(target, &mut self.rng);
        self.divisions += 1;
        tracing::trace!(parent = parent.0, pos = ?target, "divided");
        Some(self.population.insert(child))
    }

    /// Writes the current positions and activations, in insertion order.
    pub fn observe(&self, positions: &mut Vec<Pos>, activations: &mut Vec<f64>) {
        self.population.observe(positions, activations);
    }

    /// Runs `config.num_steps` steps, reporting to `observer` after each one.
    ///
    /// Step indices passed to the observer count from the engine's current
    /// generation, so a fresh engine reports `0..num_steps`.
    pub fn run(&mut self, observer: &mut impl StepObserver) {
        for _ in 0..self.config.num_steps {
            let step = self.generation;
            self.step();
            self.population.observe(&mut self.positions_buf, &mut self.activations_buf);
            observer.on_step(step, &self.positions_buf, &self.activations_buf);
        }
        tracing::debug!(
            generation = self.generation,
            population = self.population.len(),
            divisions = self.divisions,
            "run finished"
        );
    }

    /// Heap memory used by the population and its index.
    pub fn bytes_total(&self) -> usize {
        self.population.bytes_total()
    }

    /// Returns multiline string reporting simulation stats.
    ///
    /// This function is fast enough to be called every frame.
    pub fn statistics(&self) -> String {
        let agents = self.population.agents();
        let n = agents.len().max(1) as f64;
        let mean_activation = agents.iter().map(|a| a.activation).sum::<f64>() / n;
        let range = |f: fn(&Agent) -> f64| {
            agents.iter().map(f).fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
        };
        let (growth_min, growth_max) = range(|a| a.rules.growth_rate);
        let (decay_min, decay_max) = range(|a| a.rules.decay_rate);

        let mut s = String::new();
        writeln!(s, "Generation: {}", self.generation).ok();
        writeln!(
            s,
            "Population: {} / {} cells",
            self.population.len(),
            self.shape.count()
        )
        .ok();
        writeln!(s, "Divisions: {}", self.divisions).ok();
        writeln!(s, "Mean activation: {:.4}", mean_activation).ok();
        writeln!(s, "Growth rate: {:.4} .. {:.4}", growth_min, growth_max).ok();
        writeln!(s, "Decay rate: {:.4} .. {:.4}", decay_min, decay_max).ok();
        write!(
            s,
            "Index: {} ({} KiB)",
            self.population.spatial_index().name(),
            self.bytes_total() >> 10
        )
        .ok();
        s
    }
}
