use super::Pos;
use crate::Config;
use rand::Rng;

/// Heritable parameters of the activation dynamics.
///
/// Offspring inherit them with a small uniform perturbation. The values are
/// never clamped, so over many generations they walk freely and may leave
/// `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthRules {
    pub growth_rate: f64,
    pub decay_rate: f64,
}

impl Default for GrowthRules {
    fn default() -> Self {
        Self {
            growth_rate: Config::DEFAULT_GROWTH_RATE,
            decay_rate: Config::DEFAULT_DECAY_RATE,
        }
    }
}

impl GrowthRules {
    /// Perturbs both rates independently; growth is drawn first.
    pub fn mutated(&self, rng: &mut impl Rng) -> Self {
        let spread = Config::MUTATION_SPREAD;
        Self {
            growth_rate: self.growth_rate + rng.gen_range(-spread..=spread),
            decay_rate: self.decay_rate + rng.gen_range(-spread..=spread),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Agent {
    pub pos: Pos,
    /// Steps since creation or since the last division attempt.
    pub age: u32,
    /// Always within `[0, 1]`.
    pub activation: f64,
    pub maturity_age: u32,
    pub rules: GrowthRules,
}

impl Agent {
    /// Fresh agent at `pos` with full activation and a random maturity age.
    pub fn new(pos: Pos, rules: GrowthRules, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            age: 0,
            activation: Config::INITIAL_ACTIVATION,
            maturity_age: rng.gen_range(Config::MATURITY_AGE),
            rules,
        }
    }

    /// Offspring placed at `pos`: mutated rules, then a new maturity age.
    pub fn offspring(&self, pos: Pos, rng: &mut impl Rng) -> Self {
        let rules = self.rules.mutated(rng);
        Self::new(pos, rules, rng)
    }

    /// Applies growth from neighbours, then decay, then clamps to `[0, 1]`.
    pub fn absorb(&mut self, neighbors: f64) {
        let GrowthRules {
            growth_rate,
            decay_rate,
        } = self.rules;
        let mut a = self.activation;
        a += growth_rate * neighbors * (1. - a);
        a -= decay_rate * a;
        self.activation = a.clamp(0., 1.);
    }

    pub fn ready_to_divide(&self) -> bool {
        self.age >= self.maturity_age && self.activation > Config::DIVISION_THRESHOLD
    }
}
