//! Application Views
//!
//! Top bar and central panel rendering.

use eframe::egui;

use crate::egui_app::notes::notes_view;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::event::ConnectionStatus;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_PRIMARY,
                    egui::RichText::new("📝 Keep Clone").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);

                    // Push channel status indicator
                    let status = state.notes_state.connection_status.clone();
                    let (color, label) = match &status {
                        Some(status) => {
                            let (color, icon) = match status {
                                ConnectionStatus::Connected => (colors::STATUS_LIVE, "🟢"),
                                ConnectionStatus::Connecting | ConnectionStatus::Retrying => {
                                    (colors::STATUS_RETRYING, "🟡")
                                }
                                ConnectionStatus::Error(_) | ConnectionStatus::Disconnected => {
                                    (colors::STATUS_OFFLINE, "🔴")
                                }
                            };
                            (color, format!("{} {}", icon, status.label()))
                        }
                        None => (colors::TEXT_SECONDARY, "⚪ Starting".to_string()),
                    };
                    let response = ui
                        .add(
                            egui::Label::new(egui::RichText::new(label).color(color))
                                .sense(egui::Sense::click()),
                        )
                        .on_hover_text("Show connection log");
                    if response.clicked() {
                        state.notes_state.show_connection_log =
                            !state.notes_state.show_connection_log;
                    }

                    let pending = state.notes_state.pending_operation_count();
                    if pending > 0 {
                        ui.colored_label(
                            colors::STATUS_RETRYING,
                            format!("🔄 {} pending", pending),
                        );
                    }

                    if ui
                        .button(egui::RichText::new("⟳").color(colors::ICONS))
                        .on_hover_text("Refresh from server")
                        .clicked()
                    {
                        state.request_refresh();
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    if state.notes_state.show_connection_log {
        render_connection_log(ctx, state);
    }

    let frame = egui::Frame::default()
        .fill(colors::CANVAS_BG)
        .inner_margin(egui::Margin::symmetric(24, 8));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let config = state.config.clone();
        notes_view::render_notes_view(ui, &mut state.notes_state, &config);
    });
}

/// Bottom panel with recent push-channel status transitions
fn render_connection_log(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::bottom("connection_log")
        .frame(styles::log_panel_frame())
        .max_height(140.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_SECONDARY, "Connection log");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").clicked() {
                        state.notes_state.show_connection_log = false;
                    }
                });
            });
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in &state.notes_state.connection_log {
                        ui.colored_label(
                            colors::TEXT_SECONDARY,
                            egui::RichText::new(line).size(11.0).monospace(),
                        );
                    }
                });
        });
}
