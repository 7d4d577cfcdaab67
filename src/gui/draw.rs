use super::{App, Config};
use crate::Pos;
use eframe::egui::{
    vec2, Button, Checkbox, Painter, Pos2, Rect, RichText, Sense, Slider, Stroke, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_playback_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
        }

        ui.add_enabled_ui(self.is_paused && !self.is_finished(), |ui| {
            if ui.add(Self::new_button("Next step")).clicked() {
                self.do_one_step = true;
            }
        });

        if ui.add(Self::new_button("Restart")).clicked() {
            self.reset_simulation();
        }

        ui.label(Self::new_text(&format!(
            "Step {} of {}",
            self.engine.generation(),
            self.config.num_steps
        )));

        let seed = match self.config.seed {
            Some(seed) => seed.to_string(),
            None => "entropy".to_string(),
        };
        ui.label(Self::new_text(&format!(
            "Grid: {0}x{0}, seed: {1}",
            self.config.grid_size, seed
        )));
    }

    fn draw_timing_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Step interval: "));
            ui.add(
                Slider::new(
                    &mut self.step_interval_ms,
                    10..=Config::MAX_STEP_INTERVAL_MS,
                )
                .suffix(" ms"),
            );
        });

        ui.add(Checkbox::new(
            &mut self.repeat,
            Self::new_text("Repeat after the last step"),
        ));

        ui.add_enabled_ui(self.repeat, |ui| {
            ui.horizontal(|ui| {
                ui.label(Self::new_text("Repeat delay: "));
                ui.add(
                    Slider::new(&mut self.repeat_delay_ms, 0..=Config::MAX_STEP_INTERVAL_MS * 5)
                        .suffix(" ms"),
                );
            });
        });

        if ui.add(Self::new_button("Reset playback")).clicked() {
            self.reset_playback();
        }
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&self.engine.statistics()));
        ui.label(Self::new_text(&format!(
            "Last step: {:.3} ms",
            self.step_timer.step_time_ms()
        )));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            let aw = ui.available_width();

            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        self.draw_playback_controls(ui);
                    });

                    // to adjust the bounds
                    ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
                });
            });

            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        self.draw_timing_controls(ui);

                        ui.add_space(Config::GAP_ABOVE_STATS);

                        self.draw_stats(ui);
                    });

                    // to adjust the bounds
                    ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
                });
            });
        });
    }

    /// Scatter plot of the population: the field spans `[-1, grid_size]` on
    /// both axes with `y` pointing up, and marker area follows activation.
    fn draw_field(&self, ui: &mut Ui, size_px: f32) {
        let (response, painter) = ui.allocate_painter(Vec2::splat(size_px), Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 0., Config::FIELD_BACKGROUND);

        let cell = size_px / (self.config.grid_size as f32 + 1.);
        let to_screen = |(x, y): Pos| -> Pos2 {
            rect.left_bottom() + vec2((x as f32 + 1.) * cell, -(y as f32 + 1.) * cell)
        };

        self.draw_shape(&painter, cell, to_screen);

        let max_radius = cell * Config::MAX_MARKER_RADIUS;
        for (&pos, &activation) in self.positions.iter().zip(&self.activations) {
            if activation > 0. {
                let radius = max_radius * (activation as f32).sqrt();
                painter.circle_filled(to_screen(pos), radius, Config::AGENT_COLOR);
            }
        }
    }

    fn draw_shape(&self, painter: &Painter, cell: f32, to_screen: impl Fn(Pos) -> Pos2) {
        for pos in self.engine.shape().cells() {
            let square = Rect::from_center_size(to_screen(pos), Vec2::splat(cell));
            painter.rect_filled(square, 0., Config::SHAPE_COLOR);
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let size_px = (area.y - 2. * Config::TEXT_SIZE)
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN)
            .max(Config::TEXT_SIZE);
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(ui.available_width() - size_px);

            ui.vertical_centered(|ui| {
                let title = step_title(self.engine.generation());
                ui.label(Self::new_text(&title));
                self.draw_field(ui, size_px);
            });
        });
    }
}

/// Title of the frame shown after `generation` completed steps; steps are
/// numbered from zero.
fn step_title(generation: u64) -> String {
    match generation.checked_sub(1) {
        Some(step) => format!("Step {}", step),
        None => "Initial state".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::step_title;

    #[test]
    fn test_step_title() {
        assert_eq!(step_title(0), "Initial state");
        assert_eq!(step_title(1), "Step 0");
        assert_eq!(step_title(500), "Step 499");
    }
}
