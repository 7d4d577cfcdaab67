mod app;
mod config;
mod draw;
mod step_timer;

pub use app::App;
use config::Config;
use step_timer::StepTimer;
