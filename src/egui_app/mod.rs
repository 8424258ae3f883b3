//! egui Native Desktop App Module
//!
//! This module provides the native desktop application using egui/eframe
//! that talks to the notes backend.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs       - Module exports
//! ├── main.rs      - Application entry point (binary)
//! ├── config.rs    - Configuration management
//! ├── state.rs     - Central application state
//! ├── views/       - Top bar and central panel
//! ├── theme/       - Colors and frame styles
//! └── notes/       - Store, API client, push channel, components
//! ```

pub mod config;
pub mod notes;
pub mod state;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use notes::NotesState;
pub use state::AppState;
