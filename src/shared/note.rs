//! Note Data Structures
//!
//! The note is the sole domain entity: a titled, colored, timestamped piece
//! of rich-text content. The wire form (`ApiNote`) carries timestamps as
//! RFC3339 strings; the client form (`Note`) uses native `chrono` timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix for client-assigned ids of notes not yet acknowledged by the server
pub const TEMP_ID_PREFIX: &str = "temp_";

/// A note as held in client state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    /// Unique note id; `temp_`-prefixed while pending server confirmation
    pub id: String,
    /// Note title
    pub title: String,
    /// Rich text content (HTML-ish, as stored by the backend)
    pub content: String,
    /// CSS color token (`#rrggbb` or `rgba(...)`)
    pub color: String,
    /// When the note was created
    pub created_at: DateTime<Utc>,
    /// When the note was last updated, if ever
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Create a new optimistic note with a temp id and current timestamps
    pub fn new_pending(title: String, content: String, color: String) -> Self {
        let now = Utc::now();
        Self {
            id: generate_temp_id(),
            title,
            content,
            color,
            created_at: now,
            updated_at: Some(now),
        }
    }

    /// Whether this note is still awaiting server acknowledgment
    pub fn is_pending(&self) -> bool {
        self.id.starts_with(TEMP_ID_PREFIX)
    }
}

/// A note as returned by the API (string timestamps, no `updated_at`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiNote {
    pub id: String,
    pub title: String,
    pub content: String,
    pub color: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<ApiNote> for Note {
    fn from(api: ApiNote) -> Self {
        // The API only provides createdAt; mirror it into updated_at.
        let created_at = DateTime::parse_from_rfc3339(&api.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());
        Self {
            id: api.id,
            title: api.title,
            content: api.content,
            color: api.color,
            created_at,
            updated_at: Some(created_at),
        }
    }
}

/// Request to create a note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    pub color: String,
}

/// Request to update a note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    pub id: String,
    pub title: String,
    pub content: String,
    pub color: String,
}

/// Request to delete a note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteNoteRequest {
    pub id: String,
}

/// A palette entry: display name plus CSS color token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteColor {
    pub name: &'static str,
    pub value: &'static str,
}

/// The note color palette offered by the picker
pub const NOTE_COLORS: [NoteColor; 10] = [
    NoteColor { name: "Default", value: "rgba(255, 255, 255, 0.9)" },
    NoteColor { name: "Red", value: "#fee2e2" },
    NoteColor { name: "Orange", value: "#fed7aa" },
    NoteColor { name: "Yellow", value: "#fef3c7" },
    NoteColor { name: "Green", value: "#dcfce7" },
    NoteColor { name: "Blue", value: "#dbeafe" },
    NoteColor { name: "Indigo", value: "#e0e7ff" },
    NoteColor { name: "Purple", value: "#f3e8ff" },
    NoteColor { name: "Pink", value: "#fce7f3" },
    NoteColor { name: "Gray", value: "#f3f4f6" },
];

/// Generate a client-side temporary id for an unconfirmed note
pub fn generate_temp_id() -> String {
    format!(
        "{}{}{}",
        TEMP_ID_PREFIX,
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_id_prefix_and_uniqueness() {
        let a = generate_temp_id();
        let b = generate_temp_id();
        assert!(a.starts_with(TEMP_ID_PREFIX));
        assert!(b.starts_with(TEMP_ID_PREFIX));
        assert_ne!(a, b);
    }

    #[test]
    fn test_pending_detection() {
        let pending = Note::new_pending("a".into(), "b".into(), "#fee2e2".into());
        assert!(pending.is_pending());

        let confirmed = Note {
            id: "42".into(),
            ..pending
        };
        assert!(!confirmed.is_pending());
    }

    #[test]
    fn test_api_note_conversion_parses_timestamp() {
        let api = ApiNote {
            id: "1".into(),
            title: "Groceries".into(),
            content: "<b>milk</b>".into(),
            color: "#dcfce7".into(),
            created_at: "2024-01-15T10:30:00Z".into(),
        };
        let note: Note = api.into();
        assert_eq!(note.created_at.to_rfc3339(), "2024-01-15T10:30:00+00:00");
        // updated_at mirrors created_at; the API does not provide it
        assert_eq!(note.updated_at, Some(note.created_at));
    }

    #[test]
    fn test_api_note_conversion_bad_timestamp_falls_back() {
        let api = ApiNote {
            id: "1".into(),
            title: String::new(),
            content: String::new(),
            color: "#f3f4f6".into(),
            created_at: "not a date".into(),
        };
        let before = Utc::now();
        let note: Note = api.into();
        assert!(note.created_at >= before);
    }

    #[test]
    fn test_api_note_serde_field_names() {
        let json = r##"{"id":"7","title":"t","content":"c","color":"#dbeafe","createdAt":"2024-01-15T10:30:00Z"}"##;
        let api: ApiNote = serde_json::from_str(json).unwrap();
        assert_eq!(api.id, "7");
        assert_eq!(api.created_at, "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_palette_has_default_first() {
        assert_eq!(NOTE_COLORS[0].name, "Default");
        assert_eq!(NOTE_COLORS.len(), 10);
    }
}
