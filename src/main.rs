#![warn(clippy::all)]

use anyhow::{anyhow, Result};
use clap::Parser;
use replicant::{Config, Pos, SimulationConfig, SimulationEngine};

#[derive(Parser)]
#[command(name = "replicant")]
#[command(about = "Growth of a self-replicating cell population on a bounded grid")]
struct Cli {
    /// Side of the square grid
    #[arg(long, default_value_t = Config::DEFAULT_GRID_SIZE)]
    grid_size: u32,
    /// Number of simulation steps
    #[arg(long, default_value_t = Config::DEFAULT_NUM_STEPS)]
    steps: u64,
    /// Random seed; drawn from entropy and logged when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Run to completion without opening the viewer
    #[arg(long)]
    headless: bool,
    /// Log every step
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, grid_size = cli.grid_size, steps = cli.steps, "starting");
    let config = SimulationConfig::new(cli.grid_size, cli.steps, Some(seed));
    config.validate()?;

    if cli.headless {
        run_headless(config)
    } else {
        run_viewer(config)
    }
}

fn run_headless(config: SimulationConfig) -> Result<()> {
    let mut engine = SimulationEngine::new(config)?;
    let timer = std::time::Instant::now();
    engine.run(&mut |step: u64, positions: &[Pos], activations: &[f64]| {
        let mean = activations.iter().sum::<f64>() / positions.len().max(1) as f64;
        tracing::debug!(step, population = positions.len(), mean_activation = mean);
    });
    tracing::info!(elapsed = ?timer.elapsed(), "done");
    println!("{}", engine.statistics());
    Ok(())
}

fn run_viewer(config: SimulationConfig) -> Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    let app = replicant::App::new(config)?;
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1280., 800.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Self-replicating cells",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow!("viewer failed: {err}"))
}
