//! Push Update Reconciliation
//!
//! When the push channel delivers a full note list, decide whether local
//! state actually changed. A wholesale replacement of an identical list
//! would churn the UI for nothing, so the incoming list is diffed against
//! current state first.

use crate::shared::note::Note;
use std::collections::HashSet;

/// Outcome of diffing an incoming note list against current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Incoming list is equivalent; leave state untouched
    Unchanged,
    /// Incoming list differs; replace state wholesale
    Replace(Vec<Note>),
}

/// Diff an incoming full list against the current one.
///
/// The update is a no-op iff:
/// - the lists have the same length,
/// - no ids were added or removed, and
/// - every non-pending note's id/title/content/color are unchanged.
///
/// Pending (temp-id) notes are exempt from the field comparison: the server
/// does not know about them yet, so their local edits must not force a
/// replace on their own. Anything else replaces state wholesale.
pub fn reconcile(current: &[Note], incoming: Vec<Note>) -> ReconcileOutcome {
    if current.len() != incoming.len() {
        return ReconcileOutcome::Replace(incoming);
    }

    let current_ids: HashSet<&str> = current.iter().map(|n| n.id.as_str()).collect();
    let incoming_ids: HashSet<&str> = incoming.iter().map(|n| n.id.as_str()).collect();
    if current_ids != incoming_ids {
        return ReconcileOutcome::Replace(incoming);
    }

    for note in current.iter().filter(|n| !n.is_pending()) {
        let matched = incoming.iter().find(|n| n.id == note.id);
        match matched {
            Some(other)
                if other.title == note.title
                    && other.content == note.content
                    && other.color == note.color => {}
            _ => return ReconcileOutcome::Replace(incoming),
        }
    }

    ReconcileOutcome::Unchanged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(id: &str, title: &str, content: &str, color: &str) -> Note {
        Note {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            color: color.into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_identical_lists_are_noop() {
        let current = vec![note("1", "a", "x", "#fee2e2"), note("2", "b", "y", "#dcfce7")];
        let incoming = current.clone();
        assert_eq!(reconcile(&current, incoming), ReconcileOutcome::Unchanged);
    }

    #[test]
    fn test_changed_field_replaces() {
        let current = vec![note("1", "a", "x", "#fee2e2")];
        let incoming = vec![note("1", "a", "edited", "#fee2e2")];
        assert!(matches!(
            reconcile(&current, incoming),
            ReconcileOutcome::Replace(_)
        ));
    }

    #[test]
    fn test_changed_color_replaces() {
        let current = vec![note("1", "a", "x", "#fee2e2")];
        let incoming = vec![note("1", "a", "x", "#dbeafe")];
        assert!(matches!(
            reconcile(&current, incoming),
            ReconcileOutcome::Replace(_)
        ));
    }

    #[test]
    fn test_added_note_replaces() {
        let current = vec![note("1", "a", "x", "#fee2e2")];
        let incoming = vec![note("1", "a", "x", "#fee2e2"), note("2", "b", "y", "#dcfce7")];
        assert!(matches!(
            reconcile(&current, incoming),
            ReconcileOutcome::Replace(_)
        ));
    }

    #[test]
    fn test_swapped_id_replaces_even_at_same_length() {
        let current = vec![note("1", "a", "x", "#fee2e2")];
        let incoming = vec![note("2", "a", "x", "#fee2e2")];
        assert!(matches!(
            reconcile(&current, incoming),
            ReconcileOutcome::Replace(_)
        ));
    }

    #[test]
    fn test_pending_note_field_drift_is_noop() {
        // A temp note the server echoed back with different fields must not
        // force a replace; only membership counts for pending notes.
        let current = vec![note("temp_123", "draft", "local", "#fee2e2")];
        let incoming = vec![note("temp_123", "draft", "server view", "#fee2e2")];
        assert_eq!(reconcile(&current, incoming), ReconcileOutcome::Unchanged);
    }

    #[test]
    fn test_empty_lists_are_noop() {
        assert_eq!(reconcile(&[], Vec::new()), ReconcileOutcome::Unchanged);
    }

    #[test]
    fn test_timestamp_drift_alone_is_noop() {
        let current = vec![note("1", "a", "x", "#fee2e2")];
        let mut drifted = note("1", "a", "x", "#fee2e2");
        drifted.updated_at = Some(Utc::now());
        assert_eq!(
            reconcile(&current, vec![drifted]),
            ReconcileOutcome::Unchanged
        );
    }
}
