use eframe::egui::Color32;

pub struct Config;

impl Config {
    /// Delay between two simulation steps during playback.
    pub const STEP_INTERVAL_MS: u64 = 200;
    /// Pause after the last step before the run starts over.
    pub const REPEAT_DELAY_MS: u64 = 1000;
    pub const MAX_STEP_INTERVAL_MS: u64 = 2000;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 400.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const GAP_ABOVE_STATS: f32 = 50.;

    pub const FIELD_BACKGROUND: Color32 = Color32::WHITE;
    pub const SHAPE_COLOR: Color32 = Color32::from_rgb(0xe8, 0xee, 0xf6);
    pub const AGENT_COLOR: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);
    /// Marker radius of a fully active agent, in cell widths. Marker area
    /// is proportional to activation.
    pub const MAX_MARKER_RADIUS: f32 = 0.5;
}
