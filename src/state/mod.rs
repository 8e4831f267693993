//! Application state module.
//!
//! Holds the session, the stored preference profile, the visible panel, and
//! the dialog state. Submodules are re-exported so callers can use
//! `crate::state::*`.

pub mod app_state;
pub mod modal;
pub mod session;
pub mod types;
pub mod vocab;

// Public re-exports to keep existing paths working
pub use app_state::{AlertKind, AlertSlot, AppState, Focus, InlineAlert};
pub use modal::{AuthTab, Modal, PreferenceForm, PreferenceRow, SignInForm, SignUpForm};
pub use session::{PreferenceProfile, Session, UserIdentity};
pub use types::{
    Deal, FollowUp, HistoryEntry, HistoryItem, Outcome, Recommendation, RemoteRequest,
    SearchQuery, Secret, ViewState,
};
