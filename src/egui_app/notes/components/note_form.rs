//! Note Form Component
//!
//! The "Take a note..." composer. Collapsed, it is a single-line prompt;
//! clicking expands it into title, rich-content editor, and color picker.
//! Save submits when the trimmed title or content is non-empty.

use super::{color_picker, editor};
use crate::egui_app::notes::store::NotesState;
use crate::egui_app::theme::{colors, styles};
use eframe::egui;

/// A submitted note: title, content, color
pub struct FormSubmit {
    pub title: String,
    pub content: String,
    pub color: String,
}

/// Render the form; returns the submission if Save was clicked with input.
pub fn render(ui: &mut egui::Ui, state: &mut NotesState) -> Option<FormSubmit> {
    let mut submit = None;

    styles::form_frame().show(ui, |ui| {
        ui.set_width(ui.available_width().min(560.0));

        if !state.form_expanded {
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.form_title)
                    .hint_text("Take a note...")
                    .desired_width(f32::INFINITY)
                    .frame(false),
            );
            if response.clicked() || response.has_focus() {
                state.form_expanded = true;
            }
            return;
        }

        ui.add(
            egui::TextEdit::singleline(&mut state.form_title)
                .hint_text("Title")
                .desired_width(f32::INFINITY)
                .frame(false),
        );
        ui.add_space(6.0);

        editor::render(ui, "note_form_editor", &mut state.form_content, "Take a note...");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let palette_label =
                egui::RichText::new("🎨").size(16.0).color(colors::ICONS);
            if ui
                .button(palette_label)
                .on_hover_text("Note color")
                .clicked()
            {
                state.form_color_picker_open = !state.form_color_picker_open;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let has_input = !state.form_title.trim().is_empty()
                    || !state.form_content.trim().is_empty();

                if ui
                    .add_enabled(has_input, egui::Button::new("Save"))
                    .clicked()
                {
                    submit = Some(FormSubmit {
                        title: state.form_title.trim().to_string(),
                        content: state.form_content.trim().to_string(),
                        color: state.form_color.clone(),
                    });
                    state.reset_form();
                }

                if ui.button("Cancel").clicked() {
                    state.reset_form();
                }
            });
        });

        if state.form_color_picker_open {
            ui.add_space(6.0);
            if let Some(color) = color_picker::render(ui, &state.form_color) {
                state.form_color = color;
                state.form_color_picker_open = false;
            }
        }
    });

    submit
}
