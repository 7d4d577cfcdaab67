use super::{neighbours, Agent, AgentIdx, Pos, SpatialIndex};
use std::ops::Index;

/// Live agents plus the coordinate index over them.
///
/// Agents live in an append-only arena in insertion order; [`AgentIdx`]
/// handles point into it and are never invalidated.
pub struct Population<I> {
    agents: Vec<Agent>,
    index: I,
}

impl<I: SpatialIndex> Population<I> {
    pub fn blank(grid_size: u32) -> Self {
        Self {
            agents: vec![],
            index: I::blank(grid_size),
        }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// True iff no agent occupies `pos`.
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.index.get(pos).is_none()
    }

    pub fn agent_at(&self, pos: Pos) -> Option<&Agent> {
        self.index.get(pos).map(|idx| &self.agents[idx.index()])
    }

    /// Sum of activations over the four axis-adjacent cells of `pos`.
    pub fn neighbor_state_sum(&self, pos: Pos) -> f64 {
        neighbours(pos)
            .into_iter()
            .filter_map(|p| self.index.get(p))
            .map(|idx| self.agents[idx.index()].activation)
            .sum()
    }

    /// Adds `agent`. Its cell must be empty.
    pub fn insert(&mut self, agent: Agent) -> AgentIdx {
        debug_assert!(
            self.is_empty_at(agent.pos),
            "cell {:?} is already occupied",
            agent.pos
        );
        let idx = AgentIdx(self.agents.len() as u32);
        self.index.insert(agent.pos, idx);
        self.agents.push(agent);
        idx
    }

    /// Handles of every agent alive right now, in insertion order.
    ///
    /// Agents inserted after the call are not part of the snapshot.
    pub fn snapshot(&self) -> Vec<AgentIdx> {
        (0..self.agents.len() as u32).map(AgentIdx).collect()
    }

    /// Mutable access for in-place updates. The position must not change.
    pub(crate) fn get_mut(&mut self, idx: AgentIdx) -> &mut Agent {
        &mut self.agents[idx.index()]
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Writes positions and activations of all agents, in insertion order.
    pub fn observe(&self, positions: &mut Vec<Pos>, activations: &mut Vec<f64>) {
        positions.clear();
        activations.clear();
        positions.extend(self.agents.iter().map(|a| a.pos));
        activations.extend(self.agents.iter().map(|a| a.activation));
    }

    pub fn spatial_index(&self) -> &I {
        &self.index
    }

    pub fn bytes_total(&self) -> usize {
        self.agents.capacity() * size_of::<Agent>() + self.index.bytes_total()
    }
}

impl<I> Index<AgentIdx> for Population<I> {
    type Output = Agent;

    fn index(&self, idx: AgentIdx) -> &Agent {
        &self.agents[idx.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::Population;
    use crate::engine::{Agent, AgentIdx, GrowthRules, HashIndex, ScanIndex, SpatialIndex};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const SEED: u64 = 42;

    fn agent(pos: (i64, i64), activation: f64) -> Agent {
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let mut a = Agent::new(pos, GrowthRules::default(), &mut rng);
        a.activation = activation;
        a
    }

    fn check_neighbor_sum<I: SpatialIndex>() {
        let mut population = Population::<I>::blank(10);
        population.insert(agent((5, 5), 1.0));
        assert_eq!(population.neighbor_state_sum((5, 5)), 0.0);

        population.insert(agent((4, 5), 0.25));
        population.insert(agent((6, 5), 0.5));
        population.insert(agent((5, 4), 0.125));
        // diagonal and distance-two cells do not count
        population.insert(agent((6, 6), 1.0));
        population.insert(agent((5, 7), 1.0));
        assert_eq!(population.neighbor_state_sum((5, 5)), 0.875);

        population.insert(agent((5, 6), 0.0625));
        assert_eq!(population.neighbor_state_sum((5, 5)), 0.9375);
        // neighbours of a corner cell, some outside the grid
        assert_eq!(population.neighbor_state_sum((0, 0)), 0.0);
    }

    #[test]
    fn test_neighbor_sum_hash() {
        check_neighbor_sum::<HashIndex>();
    }

    #[test]
    fn test_neighbor_sum_scan() {
        check_neighbor_sum::<ScanIndex>();
    }

    #[test]
    fn test_insert_and_occupancy() {
        let mut population = Population::<HashIndex>::blank(10);
        assert!(population.is_empty());
        assert!(population.is_empty_at((1, 1)));

        let idx = population.insert(agent((1, 1), 0.3));
        assert_eq!(idx, AgentIdx(0));
        assert!(!population.is_empty_at((1, 1)));
        assert_eq!(population.agent_at((1, 1)).map(|a| a.activation), Some(0.3));
        assert_eq!(population[idx].pos, (1, 1));
        assert_eq!(population.len(), 1);
    }

    #[test]
    fn test_snapshot_is_frozen() {
        let mut population = Population::<HashIndex>::blank(10);
        population.insert(agent((1, 1), 1.0));
        population.insert(agent((2, 1), 1.0));
        let snapshot = population.snapshot();
        population.insert(agent((3, 1), 1.0));

        assert_eq!(snapshot, vec![AgentIdx(0), AgentIdx(1)]);
        assert_eq!(population.snapshot().len(), 3);
    }

    #[test]
    fn test_observe_order() {
        let mut population = Population::<HashIndex>::blank(10);
        population.insert(agent((4, 4), 0.5));
        population.insert(agent((1, 2), 0.25));

        let (mut positions, mut activations) = (vec![(9, 9)], vec![]);
        population.observe(&mut positions, &mut activations);
        assert_eq!(positions, vec![(4, 4), (1, 2)]);
        assert_eq!(activations, vec![0.5, 0.25]);
    }
}
