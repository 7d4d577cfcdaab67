use std::time::{Duration, Instant};

/// Paces playback: decides when the next simulation step is due and keeps a
/// smoothed measure of how long steps take to compute.
pub struct StepTimer {
    last_step: Instant,
    step_time_smoothed: f64,
}

impl Default for StepTimer {
    fn default() -> Self {
        Self {
            last_step: Instant::now(),
            step_time_smoothed: 0.,
        }
    }
}

impl StepTimer {
    /// Time left until `interval` has passed since the last step.
    pub fn remaining(&self, interval: Duration) -> Duration {
        interval.saturating_sub(self.last_step.elapsed())
    }

    pub fn is_due(&self, interval: Duration) -> bool {
        self.remaining(interval).is_zero()
    }

    /// Marks the start of a step, restarting the interval.
    pub fn restart(&mut self) {
        self.last_step = Instant::now();
    }

    /// Feeds the compute time of a finished step into the running average.
    pub fn record(&mut self, step_time: Duration) {
        let t = step_time.as_secs_f64();
        self.step_time_smoothed += (t - self.step_time_smoothed) * 0.1;
    }

    /// Smoothed compute time per step, in milliseconds.
    pub fn step_time_ms(&self) -> f64 {
        self.step_time_smoothed * 1e3
    }
}
