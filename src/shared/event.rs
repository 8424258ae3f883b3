//! Push Channel Events
//!
//! Event types exchanged over the server push channel. The server delivers
//! the full note list on any change (`notesUpdate`); the client can request a
//! refresh (`requestNotesUpdate`).

use crate::shared::note::ApiNote;
use serde::{Deserialize, Serialize};

/// Event name for server-pushed full-list updates
pub const EVENT_NOTES_UPDATE: &str = "notesUpdate";

/// Event name for client-originated refresh requests
pub const EVENT_REQUEST_NOTES_UPDATE: &str = "requestNotesUpdate";

/// An event received on the push channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PushEvent {
    /// Full authoritative note list from the server
    NotesUpdate(Vec<ApiNote>),
}

impl PushEvent {
    /// Parse an event from its SSE name and data payload
    pub fn parse(event_name: &str, data: &str) -> Result<Option<Self>, serde_json::Error> {
        match event_name {
            EVENT_NOTES_UPDATE => {
                let notes: Vec<ApiNote> = serde_json::from_str(data)?;
                Ok(Some(PushEvent::NotesUpdate(notes)))
            }
            _ => Ok(None),
        }
    }
}

/// Connection status reported by the push channel subscription
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Retrying,
    Error(String),
    Disconnected,
}

impl ConnectionStatus {
    /// Short label for status indicators
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Connecting",
            ConnectionStatus::Connected => "Live",
            ConnectionStatus::Retrying => "Reconnecting",
            ConnectionStatus::Error(_) => "Error",
            ConnectionStatus::Disconnected => "Offline",
        }
    }
}
