//! Rich-Content Editor Component
//!
//! Multiline editor with a small formatting toolbar. Content is stored
//! HTML-ish (the backend's wire format): the B/I/U buttons wrap the current
//! selection in `<b>`/`<i>`/`<u>` tags, and cards strip tags for display.

use crate::egui_app::theme::colors;
use eframe::egui;

/// Render the editor, mutating `content` in place.
///
/// `id_salt` keeps editor state distinct when several editors are visible
/// (the form plus any card in edit mode).
pub fn render(ui: &mut egui::Ui, id_salt: &str, content: &mut String, placeholder: &str) {
    // Formatting toolbar
    ui.horizontal(|ui| {
        let selection = ui.memory_mut(|m| {
            m.data
                .get_temp::<(usize, usize)>(egui::Id::new(("editor_sel", id_salt)))
        });

        for (label, tag) in [("B", "b"), ("I", "i"), ("U", "u")] {
            let button = egui::Button::new(
                egui::RichText::new(label).strong().color(colors::ICONS),
            )
            .min_size(egui::vec2(24.0, 24.0));
            if ui.add(button).clicked() {
                if let Some((start, end)) = selection {
                    if start != end {
                        *content = wrap_range(content, start, end, tag);
                    }
                }
            }
        }
    });

    let output = egui::TextEdit::multiline(content)
        .id_salt(id_salt)
        .desired_rows(4)
        .desired_width(f32::INFINITY)
        .hint_text(placeholder)
        .show(ui);

    // Remember the selection so a toolbar click (which steals focus) can
    // still apply to it.
    if let Some(range) = output.state.cursor.char_range() {
        let (start, end) = (
            range.primary.index.min(range.secondary.index),
            range.primary.index.max(range.secondary.index),
        );
        if start != end {
            ui.memory_mut(|m| {
                m.data
                    .insert_temp(egui::Id::new(("editor_sel", id_salt)), (start, end));
            });
        }
    }
}

/// Wrap the char range `[start, end)` of `content` in an HTML tag
pub fn wrap_range(content: &str, start: usize, end: usize, tag: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    let start = start.min(chars.len());
    let end = end.min(chars.len());
    if start >= end {
        return content.to_string();
    }

    let mut result = String::with_capacity(content.len() + tag.len() * 2 + 5);
    result.extend(&chars[..start]);
    result.push('<');
    result.push_str(tag);
    result.push('>');
    result.extend(&chars[start..end]);
    result.push_str("</");
    result.push_str(tag);
    result.push('>');
    result.extend(&chars[end..]);
    result
}

/// Strip HTML tags for plain-text display in cards
pub fn strip_tags(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut in_tag = false;
    for c in content.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}
