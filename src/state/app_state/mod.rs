//! Central `AppState` container owned by the event loop.

use ratatui::widgets::ListState;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::state::modal::Modal;
use crate::state::session::{PreferenceProfile, Session};
use crate::state::types::{Deal, Recommendation, ViewState};
use crate::theme::Settings;

mod methods;
pub use methods::NO_RECOMMENDATIONS_MESSAGE;

/// Which part of the main screen receives typed keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// The search bar.
    #[default]
    Search,
    /// The card list of the visible panel.
    Results,
}

/// Where an inline alert is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlertSlot {
    /// Sign-in tab of the auth dialog.
    Login,
    /// Sign-up tab of the auth dialog.
    Signup,
    /// Preferences dialog.
    Preferences,
    /// Main-screen status line.
    Status,
}

/// Visual tone of an inline alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    /// Green confirmation.
    Success,
    /// Red failure.
    Error,
}

/// A message shown inline until it expires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineAlert {
    /// Tone.
    pub kind: AlertKind,
    /// Text shown to the user.
    pub message: String,
    /// When the alert appeared; used for auto-dismiss.
    pub shown_at: Instant,
}

/// What: Application state shared by the event, networking, and UI layers.
///
/// Details:
/// - Mutated only by the event loop; workers report through `Outcome` messages.
/// - `all_deals` holds the last search response as received and `deals` the
///   subset currently shown after the relevance filter.
#[derive(Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppState {
    /// Logged-in session, `None` for guests.
    pub session: Option<Session>,
    /// Stored preference profile for the session, if any.
    pub profile: Option<PreferenceProfile>,
    /// Visible main panel.
    pub view: ViewState,
    /// Open dialog.
    pub modal: Modal,
    /// Focused main-screen area.
    pub focus: Focus,
    /// Search bar text.
    pub input: String,
    /// "Use my location" toggle.
    pub use_location: bool,
    /// "Match my skin profile" toggle.
    pub match_profile: bool,
    /// Result cap sent with searches.
    pub max_results: u32,
    /// Query shown in the results header.
    pub searched_query: String,
    /// Backend commentary for the last search that supplied one.
    pub insights: Option<String>,
    /// Deals exactly as returned by the last search.
    pub all_deals: Vec<Deal>,
    /// Deals currently shown.
    pub deals: Vec<Deal>,
    /// Whether the relevance filter removed anything from `all_deals`.
    pub filter_applied: bool,
    /// `Found N deals ...` header line.
    pub count_line: String,
    /// Recommendation cards currently shown.
    pub recommendations: Vec<Recommendation>,
    /// Highlighted card index in the visible panel.
    pub selected: usize,
    /// List selection state for the card list.
    pub list_state: ListState,
    /// Visible inline alerts, at most one per slot.
    pub alerts: HashMap<AlertSlot, InlineAlert>,
    /// How long an alert stays visible.
    pub alert_ttl: Duration,
    /// Placeholder image service for cards without images.
    pub placeholder_image_base: String,
}

impl AppState {
    /// What: Build the initial state from user settings.
    ///
    /// Inputs:
    /// - `settings`: Loaded and normalized settings.
    ///
    /// Output:
    /// - Guest state on the Empty panel with toggles taken from settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            session: None,
            profile: None,
            view: ViewState::Empty,
            modal: Modal::None,
            focus: Focus::Search,
            input: String::new(),
            use_location: settings.use_location_default,
            match_profile: settings.match_profile_default,
            max_results: settings.max_results,
            searched_query: String::new(),
            insights: None,
            all_deals: Vec::new(),
            deals: Vec::new(),
            filter_applied: false,
            count_line: String::new(),
            recommendations: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            alerts: HashMap::new(),
            alert_ttl: Duration::from_secs(settings.alert_dismiss_secs),
            placeholder_image_base: settings.placeholder_image_base.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
