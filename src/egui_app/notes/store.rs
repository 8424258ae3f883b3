//! Notes Store
//!
//! Central in-memory note list plus the optimistic-update machinery around
//! it. Every mutation is applied locally first, then confirmed or rolled
//! back when the background API call resolves. Results come back over
//! `std::sync::mpsc` channels polled once per frame.

use crate::egui_app::config::Config;
use crate::egui_app::notes::api::NotesApiClient;
use crate::egui_app::notes::push::PushClient;
use crate::egui_app::notes::reconcile::{reconcile, ReconcileOutcome};
use crate::shared::event::ConnectionStatus;
use crate::shared::note::{
    ApiNote, CreateNoteRequest, DeleteNoteRequest, Note, UpdateNoteRequest,
};
use std::sync::mpsc::{channel, Receiver};

/// Result types for pending API operations
pub type LoadNotesResult = Result<Vec<ApiNote>, String>;
pub type SaveNoteResult = Result<ApiNote, String>;
pub type DeleteNoteResult = Result<(), String>;

/// The main state for the notes UI
pub struct NotesState {
    /// Current note list, newest first
    pub notes: Vec<Note>,

    /// Push channel client, created on first render
    pub push_client: Option<PushClient>,

    /// Note form state
    pub form_expanded: bool,
    pub form_title: String,
    pub form_content: String,
    pub form_color: String,
    pub form_color_picker_open: bool,

    /// Inline card editing state
    pub editing_note_id: Option<String>,
    pub edit_title: String,
    pub edit_content: String,

    /// Which card's color menu is open, if any
    pub color_menu_note_id: Option<String>,

    /// Loading state for the initial fetch
    pub is_loading: bool,

    /// Pending async operation receivers
    pub pending_load: Option<Receiver<LoadNotesResult>>,
    pending_creates: Vec<(String, Receiver<SaveNoteResult>)>,
    pending_updates: Vec<(String, Note, Receiver<SaveNoteResult>)>,
    pending_deletes: Vec<(Note, Receiver<DeleteNoteResult>)>,

    /// Whether initial data load has been kicked off
    pub initialized: bool,

    /// Latest push channel status
    pub connection_status: Option<ConnectionStatus>,
    /// Whether to show the connection log panel
    pub show_connection_log: bool,
    /// Recent connection status log lines
    pub connection_log: Vec<String>,
    /// Remember last status to avoid duplicate log entries
    last_logged_status: Option<ConnectionStatus>,
}

impl Default for NotesState {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesState {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            push_client: None,
            form_expanded: false,
            form_title: String::new(),
            form_content: String::new(),
            form_color: crate::shared::note::NOTE_COLORS[0].value.to_string(),
            form_color_picker_open: false,
            editing_note_id: None,
            edit_title: String::new(),
            edit_content: String::new(),
            color_menu_note_id: None,
            is_loading: false,
            pending_load: None,
            pending_creates: Vec::new(),
            pending_updates: Vec::new(),
            pending_deletes: Vec::new(),
            initialized: false,
            connection_status: None,
            show_connection_log: false,
            connection_log: Vec::new(),
            last_logged_status: None,
        }
    }

    /// Number of operations still awaiting server confirmation
    pub fn pending_operation_count(&self) -> usize {
        self.pending_creates.len() + self.pending_updates.len() + self.pending_deletes.len()
    }

    /// Kick off the initial list fetch on a worker thread
    pub fn load_notes(&mut self, config: &Config) {
        let config = config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let client = NotesApiClient::new(config);
            let result = client.list_notes().map_err(|e| e.to_string());
            let _ = tx.send(result);
        });
        self.pending_load = Some(rx);
        self.is_loading = true;
    }

    /// Optimistically add a note and save it in the background
    pub fn add_note(&mut self, config: &Config, title: String, content: String, color: String) {
        let note = Note::new_pending(title, content, color);
        let temp_id = note.id.clone();
        let request = CreateNoteRequest {
            title: note.title.clone(),
            content: note.content.clone(),
            color: note.color.clone(),
        };
        self.notes.insert(0, note);

        let config = config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let client = NotesApiClient::new(config);
            let result = client.save_note(&request).map_err(|e| e.to_string());
            let _ = tx.send(result);
        });
        self.pending_creates.push((temp_id, rx));
    }

    /// Optimistically update a note and sync it in the background.
    ///
    /// No-op if the id is unknown.
    pub fn update_note(
        &mut self,
        config: &Config,
        id: &str,
        title: String,
        content: String,
        color: String,
    ) {
        let Some(snapshot) = self.begin_update(id, title, content, color) else {
            return;
        };

        let updated = self
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .unwrap_or_else(|| snapshot.clone());
        let request = UpdateNoteRequest {
            id: updated.id.clone(),
            title: updated.title.clone(),
            content: updated.content.clone(),
            color: updated.color.clone(),
        };

        let config = config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let client = NotesApiClient::new(config);
            let result = client.update_note(&request).map_err(|e| e.to_string());
            let _ = tx.send(result);
        });
        self.pending_updates.push((id.to_string(), snapshot, rx));
    }

    /// Optimistically delete a note and sync it in the background.
    ///
    /// No-op if the id is unknown.
    pub fn delete_note(&mut self, config: &Config, id: &str) {
        let Some(removed) = self.begin_delete(id) else {
            return;
        };

        let request = DeleteNoteRequest { id: id.to_string() };
        let config = config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let client = NotesApiClient::new(config);
            let result = client.delete_note(&request).map_err(|e| e.to_string());
            let _ = tx.send(result);
        });
        self.pending_deletes.push((removed, rx));
    }

    /// Change only a note's color
    pub fn change_note_color(&mut self, config: &Config, id: &str, color: String) {
        let Some(note) = self.notes.iter().find(|n| n.id == id) else {
            return;
        };
        let (title, content) = (note.title.clone(), note.content.clone());
        self.update_note(config, id, title, content, color);
    }

    /// Check for completed async operations and apply their results
    pub fn check_pending_operations(&mut self) {
        // Initial load
        if let Some(ref rx) = self.pending_load {
            if let Ok(result) = rx.try_recv() {
                self.pending_load = None;
                self.is_loading = false;
                self.apply_load_result(result);
            }
        }

        // Creates: confirm with the server note or roll the temp note back
        let mut creates = std::mem::take(&mut self.pending_creates);
        creates.retain(|(temp_id, rx)| match rx.try_recv() {
            Ok(result) => {
                self.apply_create_result(temp_id, result);
                false
            }
            Err(_) => true,
        });
        self.pending_creates = creates;

        // Updates: on failure, revert to the pre-edit snapshot
        let mut updates = std::mem::take(&mut self.pending_updates);
        updates.retain(|(id, snapshot, rx)| match rx.try_recv() {
            Ok(result) => {
                self.apply_update_result(id, snapshot, result);
                false
            }
            Err(_) => true,
        });
        self.pending_updates = updates;

        // Deletes: on failure, restore the removed note
        let mut deletes = std::mem::take(&mut self.pending_deletes);
        deletes.retain(|(removed, rx)| match rx.try_recv() {
            Ok(result) => {
                self.apply_delete_result(removed, result);
                false
            }
            Err(_) => true,
        });
        self.pending_deletes = deletes;
    }

    /// Drain push-channel events and status updates for this frame
    pub fn check_push_channel(&mut self) {
        let Some(ref client) = self.push_client else {
            return;
        };

        let mut incoming = None;
        for event in client.poll_events() {
            let crate::shared::event::PushEvent::NotesUpdate(notes) = event;
            // Only the newest list matters when several arrive in one frame
            incoming = Some(notes);
        }

        let status = client.poll_status();

        if let Some(notes) = incoming {
            self.apply_push_update(notes);
        }

        if let Some(status) = status {
            if self.last_logged_status.as_ref() != Some(&status) {
                let ts = chrono::Utc::now().to_rfc3339();
                self.connection_log.push(format!("{} - {:?}", ts, status));
                if self.connection_log.len() > 200 {
                    self.connection_log.remove(0);
                }
                self.last_logged_status = Some(status.clone());
            }
            self.connection_status = Some(status);
        }
    }

    /// Apply a full list from the push channel, replacing state only when
    /// the diff says something actually changed. Returns true on replace.
    pub fn apply_push_update(&mut self, incoming: Vec<ApiNote>) -> bool {
        let incoming: Vec<Note> = incoming.into_iter().map(Note::from).collect();
        match reconcile(&self.notes, incoming) {
            ReconcileOutcome::Unchanged => {
                tracing::debug!("[PUSH] Incoming list identical, skipping");
                false
            }
            ReconcileOutcome::Replace(notes) => {
                tracing::info!("[PUSH] Replacing note list ({} notes)", notes.len());
                self.notes = notes;
                true
            }
        }
    }

    // Optimistic halves and result appliers. Kept separate from the spawn
    // sites so the rollback paths are testable without a network.

    fn begin_update(
        &mut self,
        id: &str,
        title: String,
        content: String,
        color: String,
    ) -> Option<Note> {
        let index = self.notes.iter().position(|n| n.id == id)?;
        let snapshot = self.notes[index].clone();
        let note = &mut self.notes[index];
        note.title = title;
        note.content = content;
        note.color = color;
        note.updated_at = Some(chrono::Utc::now());
        Some(snapshot)
    }

    fn begin_delete(&mut self, id: &str) -> Option<Note> {
        let index = self.notes.iter().position(|n| n.id == id)?;
        Some(self.notes.remove(index))
    }

    fn apply_load_result(&mut self, result: LoadNotesResult) {
        match result {
            Ok(api_notes) => {
                tracing::info!("Loaded {} notes", api_notes.len());
                self.notes = api_notes.into_iter().map(Note::from).collect();
            }
            Err(e) => {
                // Swallowed: start with an empty list rather than failing
                tracing::error!("Failed to load notes: {}", e);
                self.notes = Vec::new();
            }
        }
    }

    fn apply_create_result(&mut self, temp_id: &str, result: SaveNoteResult) {
        match result {
            Ok(api_note) => {
                let confirmed = Note::from(api_note);
                if let Some(index) = self.notes.iter().position(|n| n.id == temp_id) {
                    self.notes[index] = confirmed;
                }
                // Note may have been deleted locally before confirmation;
                // nothing to replace then.
            }
            Err(e) => {
                tracing::error!("Failed to save note: {}", e);
                self.notes.retain(|n| n.id != temp_id);
            }
        }
    }

    fn apply_update_result(&mut self, id: &str, snapshot: &Note, result: SaveNoteResult) {
        match result {
            Ok(_) => {
                // The optimistic copy already reflects the change
                tracing::debug!("Note {} updated on server", id);
            }
            Err(e) => {
                tracing::error!("Failed to update note {}: {}", id, e);
                if let Some(index) = self.notes.iter().position(|n| n.id == id) {
                    self.notes[index] = snapshot.clone();
                }
            }
        }
    }

    fn apply_delete_result(&mut self, removed: &Note, result: DeleteNoteResult) {
        match result {
            Ok(()) => {
                tracing::debug!("Note {} deleted on server", removed.id);
            }
            Err(e) => {
                tracing::error!("Failed to delete note {}: {}", removed.id, e);
                self.notes.insert(0, removed.clone());
            }
        }
    }

    /// Reset the note form
    pub fn reset_form(&mut self) {
        self.form_title.clear();
        self.form_content.clear();
        self.form_color = crate::shared::note::NOTE_COLORS[0].value.to_string();
        self.form_expanded = false;
        self.form_color_picker_open = false;
    }

    /// Enter edit mode for a card
    pub fn start_edit(&mut self, note: &Note) {
        self.editing_note_id = Some(note.id.clone());
        self.edit_title = note.title.clone();
        self.edit_content = note.content.clone();
    }

    /// Leave edit mode without saving
    pub fn cancel_edit(&mut self) {
        self.editing_note_id = None;
        self.edit_title.clear();
        self.edit_content.clear();
    }
}
