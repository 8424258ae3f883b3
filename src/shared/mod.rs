//! Shared Types
//!
//! Types shared across the client modules: the note domain model, push
//! channel events, errors, and configuration.

pub mod config;
pub mod error;
pub mod event;
pub mod note;

pub use error::ApiError;
pub use event::{ConnectionStatus, PushEvent};
pub use note::{ApiNote, CreateNoteRequest, DeleteNoteRequest, Note, UpdateNoteRequest};
