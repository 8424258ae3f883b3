//! Theme Styling Functions
//!
//! Helper functions for applying the light Keep-style scheme consistently
//! across components.

use super::colors;
use eframe::egui::{self, Color32, CornerRadius, Stroke};

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::FORM_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);

    style.visuals.panel_fill = colors::CANVAS_BG;

    style.visuals.widgets.noninteractive.bg_fill = colors::CANVAS_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = colors::FORM_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.hovered.bg_fill = colors::CANVAS_BG;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.selection.bg_fill = colors::ACCENT.gamma_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    ctx.set_style(style);
}

/// Frame for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .inner_margin(egui::Margin::symmetric(16, 10))
}

/// Frame for the note form
pub fn form_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::FORM_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(16, 12))
        .shadow(egui::epaint::Shadow {
            offset: [0, 2],
            blur: 6,
            spread: 0,
            color: Color32::from_black_alpha(25),
        })
}

/// Frame for a note card with its own background color
pub fn note_card_frame(color_token: &str, is_pending: bool) -> egui::Frame {
    let border = if is_pending {
        colors::CARD_BORDER_PENDING
    } else {
        colors::CARD_BORDER
    };
    egui::Frame::new()
        .fill(colors::note_background(color_token))
        .stroke(Stroke::new(1.0, border))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(14, 12))
}

/// Frame for the color picker popup
pub fn picker_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::FORM_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::same(8))
        .shadow(egui::epaint::Shadow {
            offset: [0, 3],
            blur: 10,
            spread: 0,
            color: Color32::from_black_alpha(40),
        })
}

/// Frame for the connection log panel
pub fn log_panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::FORM_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .inner_margin(egui::Margin::symmetric(12, 8))
}
