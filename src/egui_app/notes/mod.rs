//! Notes Module
//!
//! Everything note-specific on the client side: the store with optimistic
//! updates, the REST API client, the push-channel subscription, the
//! reconciliation diff, and the UI components.

pub mod api;
pub mod components;
pub mod notes_view;
pub mod push;
pub mod reconcile;
pub mod store;

pub use api::NotesApiClient;
pub use push::PushClient;
pub use reconcile::{reconcile, ReconcileOutcome};
pub use store::NotesState;
