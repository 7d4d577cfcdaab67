use super::{Config, StepTimer};
use crate::{ConfigError, Pos, SimulationConfig, SimulationEngine};
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin};
use std::time::{Duration, Instant};

pub struct App {
    pub(super) engine: SimulationEngine, // Growth simulation being played back.
    pub(super) config: SimulationConfig, // Parameters the engine is rebuilt from on reset.
    pub(super) is_paused: bool,          // Flag indicating whether playback is paused.
    pub(super) do_one_step: bool,        // Do one step and pause.
    pub(super) repeat: bool,             // Start over after the last step.
    pub(super) finished_at: Option<Instant>, // Moment the last step was computed.
    pub(super) positions: Vec<Pos>,      // Latest observation of the population.
    pub(super) activations: Vec<f64>,
    pub(super) step_timer: StepTimer, // Paces steps to `step_interval_ms`.

    pub(super) step_interval_ms: u64,
    pub(super) repeat_delay_ms: u64,
}

impl App {
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let engine = SimulationEngine::new(config)?;
        let (mut positions, mut activations) = (vec![], vec![]);
        engine.observe(&mut positions, &mut activations);
        Ok(Self {
            engine,
            config,
            is_paused: false,
            do_one_step: false,
            repeat: true,
            finished_at: None,
            positions,
            activations,
            step_timer: StepTimer::default(),
            step_interval_ms: Config::STEP_INTERVAL_MS,
            repeat_delay_ms: Config::REPEAT_DELAY_MS,
        })
    }

    /// Restarts the run from the seed agent. With a fixed seed the same
    /// trajectory is replayed.
    pub fn reset_simulation(&mut self) {
        match SimulationEngine::new(self.config) {
            Ok(engine) => self.engine = engine,
            Err(err) => {
                tracing::error!(%err, "failed to restart simulation");
                return;
            }
        }
        self.engine.observe(&mut self.positions, &mut self.activations);
        self.finished_at = None;
        self.do_one_step = false;
        self.step_timer.restart();
        tracing::info!("simulation restarted");
    }

    pub fn reset_playback(&mut self) {
        self.repeat = true;
        self.step_interval_ms = Config::STEP_INTERVAL_MS;
        self.repeat_delay_ms = Config::REPEAT_DELAY_MS;
    }

    pub(super) fn is_finished(&self) -> bool {
        self.engine.generation() >= self.config.num_steps
    }

    fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    fn update_engine(&mut self) {
        if self.is_finished() {
            self.do_one_step = false;
            let repeat_due = self.finished_at.map_or(true, |t| {
                t.elapsed() >= Duration::from_millis(self.repeat_delay_ms)
            });
            if self.repeat && !self.is_paused && repeat_due {
                self.reset_simulation();
            }
            return;
        }
        if self.is_paused && !self.do_one_step {
            return;
        }
        if !self.do_one_step && !self.step_timer.is_due(self.step_interval()) {
            return;
        }

        self.step_timer.restart();
        let timer = Instant::now();
        self.engine.step();
        self.step_timer.record(timer.elapsed());

        self.engine.observe(&mut self.positions, &mut self.activations);
        self.do_one_step = false;
        if self.is_finished() {
            self.finished_at = Some(Instant::now());
            tracing::info!(
                generation = self.engine.generation(),
                population = self.positions.len(),
                "run finished"
            );
        }
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
            }
            if input.key_pressed(Key::R) && !input.modifiers.ctrl {
                self.reset_simulation();
            }
        });
    }

    fn schedule_repaint(&self, ctx: &Context) {
        if self.is_paused {
            return;
        }
        let wait = match self.finished_at {
            Some(t) if self.is_finished() => {
                Duration::from_millis(self.repeat_delay_ms).saturating_sub(t.elapsed())
            }
            _ => self.step_timer.remaining(self.step_interval()),
        };
        ctx.request_repaint_after(wait);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                self.handle_input(ctx);
                self.update_engine();
                self.draw(ui);
            });

        self.schedule_repaint(ctx);
    }
}
