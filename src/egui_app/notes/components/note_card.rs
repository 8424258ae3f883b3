//! Note Card Component
//!
//! A single note in the grid: title, content, colored background. Hover
//! reveals the edit/palette/delete actions; edit mode swaps in inline
//! fields. Pending notes get a subtle saving indicator.

use super::{color_picker, editor};
use crate::egui_app::notes::store::NotesState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::note::Note;
use eframe::egui;

/// Action requested from a card this frame
#[derive(Debug, Clone)]
pub enum CardAction {
    Update {
        id: String,
        title: String,
        content: String,
    },
    ChangeColor {
        id: String,
        color: String,
    },
    Delete(String),
}

/// Render a note card; returns any action the user requested.
pub fn render(ui: &mut egui::Ui, note: &Note, state: &mut NotesState) -> Option<CardAction> {
    let mut action = None;
    let is_editing = state.editing_note_id.as_deref() == Some(note.id.as_str());

    let response = styles::note_card_frame(&note.color, note.is_pending())
        .show(ui, |ui| {
            if is_editing {
                render_edit_mode(ui, note, state, &mut action);
            } else {
                render_display_mode(ui, note);
            }
        })
        .response;

    if !is_editing {
        let hovered = response.hovered() || ui.rect_contains_pointer(response.rect);
        let menu_open = state.color_menu_note_id.as_deref() == Some(note.id.as_str());

        if hovered || menu_open {
            render_actions(ui, note, state, &mut action);
        } else {
            // Keep row height stable when the actions are hidden
            ui.add_space(22.0);
        }
    }

    action
}

fn render_display_mode(ui: &mut egui::Ui, note: &Note) {
    ui.set_width(ui.available_width());

    if !note.title.is_empty() {
        ui.label(
            egui::RichText::new(&note.title)
                .strong()
                .size(15.0)
                .color(colors::TEXT_PRIMARY),
        );
        ui.add_space(4.0);
    }

    if !note.content.is_empty() {
        ui.label(
            egui::RichText::new(editor::strip_tags(&note.content))
                .color(colors::TEXT_PRIMARY),
        );
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.colored_label(
            colors::TEXT_SECONDARY,
            egui::RichText::new(format_date(note)).size(11.0),
        );
        if note.is_pending() {
            ui.colored_label(
                colors::TEXT_SECONDARY,
                egui::RichText::new("Saving...").size(11.0).italics(),
            );
        }
    });
}

fn render_edit_mode(
    ui: &mut egui::Ui,
    note: &Note,
    state: &mut NotesState,
    action: &mut Option<CardAction>,
) {
    ui.set_width(ui.available_width());

    ui.add(
        egui::TextEdit::singleline(&mut state.edit_title)
            .hint_text("Title")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);

    let editor_id = format!("card_editor_{}", note.id);
    editor::render(ui, &editor_id, &mut state.edit_content, "Note");
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        let has_input =
            !state.edit_title.trim().is_empty() || !state.edit_content.trim().is_empty();

        if ui.add_enabled(has_input, egui::Button::new("Save")).clicked() {
            *action = Some(CardAction::Update {
                id: note.id.clone(),
                title: state.edit_title.trim().to_string(),
                content: state.edit_content.trim().to_string(),
            });
            state.cancel_edit();
        }

        if ui.button("Cancel").clicked() {
            state.cancel_edit();
        }
    });
}

fn render_actions(
    ui: &mut egui::Ui,
    note: &Note,
    state: &mut NotesState,
    action: &mut Option<CardAction>,
) {
    ui.horizontal(|ui| {
        if ui
            .button(egui::RichText::new("✏").color(colors::ICONS))
            .on_hover_text("Edit")
            .clicked()
        {
            state.start_edit(note);
        }

        if ui
            .button(egui::RichText::new("🎨").color(colors::ICONS))
            .on_hover_text("Change color")
            .clicked()
        {
            if state.color_menu_note_id.as_deref() == Some(note.id.as_str()) {
                state.color_menu_note_id = None;
            } else {
                state.color_menu_note_id = Some(note.id.clone());
            }
        }

        if ui
            .button(egui::RichText::new("🗑").color(colors::ICONS))
            .on_hover_text("Delete")
            .clicked()
        {
            *action = Some(CardAction::Delete(note.id.clone()));
        }
    });

    if state.color_menu_note_id.as_deref() == Some(note.id.as_str()) {
        styles::picker_frame().show(ui, |ui| {
            if let Some(color) = color_picker::render(ui, &note.color) {
                *action = Some(CardAction::ChangeColor {
                    id: note.id.clone(),
                    color,
                });
                state.color_menu_note_id = None;
            }
        });
    }
}

/// Short date label for the card footer
fn format_date(note: &Note) -> String {
    let shown = note.updated_at.unwrap_or(note.created_at);
    shown.format("%b %e, %Y").to_string()
}
