//! keepnotes - Main Library
//!
//! keepnotes is a native desktop note-taking client built with egui/eframe.
//! It talks to a pre-existing notes backend: optimistic CRUD over a REST
//! surface, kept live by a push channel that delivers the authoritative note
//! list on every server-side change.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared across the client
//!   - Note model and wire payloads
//!   - Push channel events and connection status
//!   - Error and configuration types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Notes store with optimistic updates and rollback
//!   - REST API client and push-channel subscription
//!   - Note form, cards, color picker, rich-content editor

pub mod egui_app;
pub mod shared;
