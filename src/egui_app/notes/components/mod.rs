//! Notes UI Components

pub mod color_picker;
pub mod editor;
pub mod note_card;
pub mod note_form;
pub mod notes_grid;
