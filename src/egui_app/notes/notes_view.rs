//! Main Notes View
//!
//! Per-frame driver for the notes UI: kicks off the initial load, drains
//! pending operation results and push events, and lays out the form above
//! the card grid.

use super::components::note_card::CardAction;
use super::components::{note_form, notes_grid};
use super::push::PushClient;
use super::store::NotesState;
use crate::egui_app::config::Config;
use eframe::egui;

/// Render the main notes view
pub fn render_notes_view(ui: &mut egui::Ui, state: &mut NotesState, config: &Config) {
    // Apply results of background operations first
    state.check_pending_operations();
    state.check_push_channel();

    // Initialize data on first render
    if !state.initialized {
        state.initialized = true;
        tracing::info!("Starting initial notes load");
        state.load_notes(config);
        state.push_client = Some(PushClient::connect(config.clone()));
    }

    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        if let Some(submit) = note_form::render(ui, state) {
            state.add_note(config, submit.title, submit.content, submit.color);
        }
        ui.add_space(20.0);
    });

    let action = notes_grid::render(ui, state);
    if let Some(action) = action {
        match action {
            CardAction::Update { id, title, content } => {
                let color = state
                    .notes
                    .iter()
                    .find(|n| n.id == id)
                    .map(|n| n.color.clone())
                    .unwrap_or_else(|| crate::shared::note::NOTE_COLORS[0].value.to_string());
                state.update_note(config, &id, title, content, color);
            }
            CardAction::ChangeColor { id, color } => {
                state.change_note_color(config, &id, color);
            }
            CardAction::Delete(id) => {
                state.delete_note(config, &id);
            }
        }
    }
}
