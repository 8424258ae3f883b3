//! Color Picker Component
//!
//! Palette grid of swatches from `NOTE_COLORS`. The current color gets a
//! marker ring. Returns the picked token, if any.

use crate::egui_app::theme::colors;
use crate::shared::note::NOTE_COLORS;
use eframe::egui;

/// Swatch diameter in pixels
const SWATCH_SIZE: f32 = 22.0;

/// Render the palette; returns the selected color token if a swatch was
/// clicked this frame.
pub fn render(ui: &mut egui::Ui, current_color: &str) -> Option<String> {
    let mut picked = None;

    ui.horizontal_wrapped(|ui| {
        for color in NOTE_COLORS {
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(SWATCH_SIZE, SWATCH_SIZE),
                egui::Sense::click(),
            );

            let fill = colors::note_background(color.value);
            let center = rect.center();
            let radius = SWATCH_SIZE / 2.0 - 2.0;

            ui.painter().circle_filled(center, radius, fill);

            let is_current = color.value == current_color;
            let ring = if is_current {
                egui::Stroke::new(2.0, colors::SWATCH_RING)
            } else if response.hovered() {
                egui::Stroke::new(1.5, colors::TEXT_SECONDARY)
            } else {
                egui::Stroke::new(1.0, colors::CARD_BORDER)
            };
            ui.painter().circle_stroke(center, radius, ring);

            let response = response.on_hover_text(color.name);
            if response.clicked() {
                picked = Some(color.value.to_string());
            }
        }
    });

    picked
}
