//! Property-based tests for push-update reconciliation

use chrono::Utc;
use keepnotes::egui_app::notes::{reconcile, ReconcileOutcome};
use keepnotes::shared::note::{Note, NOTE_COLORS};
use proptest::prelude::*;

fn arb_note_fields() -> impl Strategy<Value = (String, String, usize)> {
    ("[a-z ]{0,20}", "[a-z ]{0,40}", 0..NOTE_COLORS.len())
}

/// A list of confirmed (non-pending) notes with unique ids
fn arb_note_list() -> impl Strategy<Value = Vec<Note>> {
    prop::collection::vec(arb_note_fields(), 0..8).prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(i, (title, content, color_idx))| Note {
                id: format!("note-{}", i),
                title,
                content,
                color: NOTE_COLORS[color_idx].value.to_string(),
                created_at: Utc::now(),
                updated_at: None,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn identical_list_is_always_noop(notes in arb_note_list()) {
        let incoming = notes.clone();
        prop_assert_eq!(reconcile(&notes, incoming), ReconcileOutcome::Unchanged);
    }

    #[test]
    fn reordered_list_is_noop(notes in arb_note_list()) {
        let mut incoming = notes.clone();
        incoming.reverse();
        prop_assert_eq!(reconcile(&notes, incoming), ReconcileOutcome::Unchanged);
    }

    #[test]
    fn appended_note_always_replaces(notes in arb_note_list()) {
        let mut incoming = notes.clone();
        incoming.push(Note {
            id: "note-extra".to_string(),
            title: "new".to_string(),
            content: "new".to_string(),
            color: NOTE_COLORS[0].value.to_string(),
            created_at: Utc::now(),
            updated_at: None,
        });
        prop_assert!(matches!(
            reconcile(&notes, incoming),
            ReconcileOutcome::Replace(_)
        ));
    }

    #[test]
    fn removed_note_always_replaces(notes in arb_note_list()) {
        prop_assume!(!notes.is_empty());
        let mut incoming = notes.clone();
        incoming.pop();
        prop_assert!(matches!(
            reconcile(&notes, incoming),
            ReconcileOutcome::Replace(_)
        ));
    }

    #[test]
    fn edited_field_always_replaces(notes in arb_note_list(), index in any::<prop::sample::Index>()) {
        prop_assume!(!notes.is_empty());
        let mut incoming = notes.clone();
        let i = index.index(incoming.len());
        incoming[i].content = format!("{} (edited)", incoming[i].content);
        prop_assert!(matches!(
            reconcile(&notes, incoming),
            ReconcileOutcome::Replace(_)
        ));
    }

    #[test]
    fn timestamp_drift_never_replaces(notes in arb_note_list()) {
        let incoming: Vec<Note> = notes
            .iter()
            .cloned()
            .map(|mut n| {
                n.updated_at = Some(Utc::now());
                n
            })
            .collect();
        prop_assert_eq!(reconcile(&notes, incoming), ReconcileOutcome::Unchanged);
    }

    #[test]
    fn replace_carries_incoming_list_verbatim(notes in arb_note_list()) {
        let mut incoming = notes.clone();
        incoming.push(Note {
            id: "note-extra".to_string(),
            title: String::new(),
            content: String::new(),
            color: NOTE_COLORS[1].value.to_string(),
            created_at: Utc::now(),
            updated_at: None,
        });
        match reconcile(&notes, incoming.clone()) {
            ReconcileOutcome::Replace(result) => prop_assert_eq!(result, incoming),
            ReconcileOutcome::Unchanged => prop_assert!(false, "expected replace"),
        }
    }
}
