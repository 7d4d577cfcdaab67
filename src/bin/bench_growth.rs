use replicant::{
    DenseIndex, HashIndex, Pos, ScanIndex, SimulationConfig, SimulationEngine, SpatialIndex,
};
use std::time::Instant;

const SEED: u64 = 42;

fn bench<I: SpatialIndex>(grid_size: u32, steps: u64) -> Option<usize> {
    let config = SimulationConfig::new(grid_size, steps, Some(SEED));
    let mut engine = SimulationEngine::<I>::with_index(config).ok()?;
    let timer = Instant::now();
    engine.run(&mut |_: u64, _: &[Pos], _: &[f64]| {});
    println!(
        "{:>6} grid={:<4} steps={:<4} population={:<6} time={:?}",
        engine.population().spatial_index().name(),
        grid_size,
        steps,
        engine.population().len(),
        timer.elapsed()
    );
    Some(engine.population().len())
}

fn main() {
    for grid_size in [30, 90, 270] {
        let steps = grid_size as u64 * 4;
        let populations = [
            bench::<HashIndex>(grid_size, steps),
            bench::<DenseIndex>(grid_size, steps),
            bench::<ScanIndex>(grid_size, steps),
        ];
        assert!(
            populations.iter().all(|p| *p == populations[0]),
            "backends disagree: {:?}",
            populations
        );
    }
}
