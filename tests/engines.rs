#[cfg(test)]
mod tests {
    use replicant::{
        DenseIndex, HashIndex, ScanIndex, SimulationConfig, SimulationEngine, SpatialIndex,
        Trajectory,
    };

    const SEED: u64 = 42;

    fn trajectory<I: SpatialIndex>(grid_size: u32, steps: u64, seed: u64) -> Trajectory {
        let config = SimulationConfig::new(grid_size, steps, Some(seed));
        let mut engine = SimulationEngine::<I>::with_index(config).unwrap();
        let mut trajectory = Trajectory::new();
        engine.run(&mut trajectory);
        trajectory
    }

    fn assert_trajectories_equal(trajectories: &[Trajectory]) {
        let example = &trajectories[0];
        for other in trajectories.iter().skip(1) {
            assert_eq!(other.len(), example.len());
            for (a, b) in example.frames.iter().zip(&other.frames) {
                assert_eq!(a.positions, b.positions, "positions diverge at step {}", a.step);
                assert_eq!(a.activations, b.activations, "activations diverge at step {}", a.step);
            }
            assert_eq!(other.fingerprint(), example.fingerprint());
        }
    }

    #[test]
    fn test_backends_agree() {
        for grid_size in [5, 12, 30] {
            for seed in [SEED, 7, 2024] {
                let steps = 60;
                let trajectories = [
                    trajectory::<HashIndex>(grid_size, steps, seed),
                    trajectory::<DenseIndex>(grid_size, steps, seed),
                    trajectory::<ScanIndex>(grid_size, steps, seed),
                ];
                assert_trajectories_equal(&trajectories);
            }
        }
    }

    #[test]
    fn test_same_seed_same_run() {
        let first = trajectory::<HashIndex>(30, 200, SEED);
        let second = trajectory::<HashIndex>(30, 200, SEED);
        assert_eq!(first.fingerprint(), second.fingerprint());
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let first = trajectory::<HashIndex>(30, 100, 1);
        let second = trajectory::<HashIndex>(30, 100, 2);
        assert_ne!(first.fingerprint(), second.fingerprint());
    }
}
