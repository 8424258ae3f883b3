//! Notes Grid Component
//!
//! Responsive column layout of note cards. Cards report actions back up;
//! the caller turns them into store operations.

use super::note_card::{self, CardAction};
use crate::egui_app::notes::store::NotesState;
use crate::egui_app::theme::colors;
use eframe::egui;

/// Target card width used to pick the column count
const CARD_WIDTH: f32 = 240.0;

/// Gap between cards
const CARD_GAP: f32 = 12.0;

/// Render the grid; returns any card action requested this frame.
pub fn render(ui: &mut egui::Ui, state: &mut NotesState) -> Option<CardAction> {
    if state.is_loading && state.notes.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.spinner();
            ui.colored_label(colors::TEXT_SECONDARY, "Loading notes...");
        });
        return None;
    }

    if state.notes.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.colored_label(colors::TEXT_SECONDARY, "Notes you add appear here");
        });
        return None;
    }

    let mut action = None;

    let columns = ((ui.available_width() + CARD_GAP) / (CARD_WIDTH + CARD_GAP))
        .floor()
        .max(1.0) as usize;

    // Cards borrow state mutably for edit fields, so iterate a snapshot
    let notes = state.notes.clone();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.set_width(ui.available_width());
        for row in notes.chunks(columns) {
            ui.horizontal_top(|ui| {
                for note in row {
                    ui.allocate_ui_with_layout(
                        egui::vec2(CARD_WIDTH, 0.0),
                        egui::Layout::top_down(egui::Align::LEFT),
                        |ui| {
                            if let Some(a) = note_card::render(ui, note, state) {
                                action = Some(a);
                            }
                        },
                    );
                    ui.add_space(CARD_GAP);
                }
            });
            ui.add_space(CARD_GAP);
        }
    });

    action
}
