//! Application State
//!
//! Central state shared across egui views.

use crate::egui_app::config::Config;
use crate::egui_app::notes::NotesState;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    /// Notes state for the main view
    pub notes_state: NotesState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
            notes_state: NotesState::new(),
        }
    }

    /// Ask the server for a fresh list over the push channel
    pub fn request_refresh(&self) {
        if let Some(ref client) = self.notes_state.push_client {
            client.request_refresh();
        }
    }
}
