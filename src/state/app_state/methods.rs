//! Implementation methods for `AppState`.

use std::time::Instant;

use crate::logic::filter::apply_profile_filter;
use crate::state::app_state::{AlertKind, AlertSlot, AppState, Focus, InlineAlert};
use crate::state::modal::{AuthTab, Modal, PreferenceForm};
use crate::state::session::{PreferenceProfile, Session, UserIdentity};
use crate::state::types::{Deal, Recommendation, ViewState};

/// Shown when the recommendation step returns nothing.
pub const NO_RECOMMENDATIONS_MESSAGE: &str =
    "No recommendations found. Try adjusting your preferences.";

impl AppState {
    /// Whether a user is logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// What: Whether a result requested for `user_id` still belongs to the current session.
    ///
    /// Output:
    /// - `false` for guests, for a missing id, and after another user signed in.
    #[must_use]
    pub fn owns_result(&self, user_id: Option<i64>) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| user_id == Some(s.user.id))
    }

    /// What: Skin type of the stored profile, when set and non-blank.
    #[must_use]
    pub fn profile_skin_type(&self) -> Option<&str> {
        self.profile.as_ref().and_then(PreferenceProfile::skin_type)
    }

    /// What: Whether the match-profile toggle is offered.
    ///
    /// Output:
    /// - `true` only when a profile with a skin type exists.
    #[must_use]
    pub fn match_toggle_available(&self) -> bool {
        self.profile_skin_type().is_some()
    }

    /// What: Show an inline alert, replacing whatever the slot held.
    ///
    /// Inputs:
    /// - `slot`: Where to show it.
    /// - `kind`: Tone.
    /// - `message`: Text.
    pub fn show_alert(&mut self, slot: AlertSlot, kind: AlertKind, message: impl Into<String>) {
        self.alerts.insert(
            slot,
            InlineAlert {
                kind,
                message: message.into(),
                shown_at: Instant::now(),
            },
        );
    }

    /// Alert currently shown in `slot`.
    #[must_use]
    pub fn alert(&self, slot: AlertSlot) -> Option<&InlineAlert> {
        self.alerts.get(&slot)
    }

    /// What: Drop alerts older than the configured lifetime.
    ///
    /// Inputs:
    /// - `now`: Current instant (injected for tests).
    ///
    /// Output:
    /// - `true` when at least one alert was removed.
    pub fn expire_alerts(&mut self, now: Instant) -> bool {
        let ttl = self.alert_ttl;
        let before = self.alerts.len();
        self.alerts
            .retain(|_, a| now.saturating_duration_since(a.shown_at) < ttl);
        self.alerts.len() != before
    }

    /// Slot for preference errors: the dialog while it is open, else the status line.
    #[must_use]
    pub const fn preferences_alert_slot(&self) -> AlertSlot {
        if matches!(self.modal, Modal::Preferences { .. }) {
            AlertSlot::Preferences
        } else {
            AlertSlot::Status
        }
    }

    /// What: Open the auth dialog on a tab with empty forms.
    pub fn open_auth(&mut self, tab: AuthTab) {
        self.alerts.remove(&AlertSlot::Login);
        self.alerts.remove(&AlertSlot::Signup);
        self.modal = Modal::Auth {
            tab,
            signin: crate::state::SignInForm::default(),
            signup: crate::state::SignUpForm::default(),
        };
    }

    /// What: Open the preferences dialog.
    ///
    /// Details:
    /// - Without a session the auth dialog opens on the sign-up tab instead.
    /// - The form is rebuilt from the stored profile each time (budgets default to 10/100).
    pub fn open_preferences(&mut self) {
        if self.session.is_none() {
            self.open_auth(AuthTab::SignUp);
            return;
        }
        self.alerts.remove(&AlertSlot::Preferences);
        self.modal = Modal::Preferences {
            form: PreferenceForm::from_profile(self.profile.as_ref()),
        };
    }

    /// Close any open dialog.
    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
    }

    /// What: Apply the result of an identity check.
    ///
    /// Inputs:
    /// - `user`: Identity when authenticated; `None` for guests or failed checks.
    ///
    /// Details:
    /// - A new identity replaces the session, keeping the prompt flag for the same user.
    /// - A different user id also drops the previous profile until it is re-fetched.
    pub fn apply_identity(&mut self, user: Option<UserIdentity>) {
        match user {
            Some(user) => {
                let same_user = self.session.as_ref().is_some_and(|s| s.user.id == user.id);
                if !same_user {
                    self.profile = None;
                }
                self.session = Some(Session::refreshed(self.session.as_ref(), user));
            }
            None => self.clear_session(),
        }
    }

    /// What: Forget the session and profile (guest chrome).
    pub fn clear_session(&mut self) {
        self.session = None;
        self.profile = None;
        if matches!(self.modal, Modal::Preferences { .. } | Modal::History { .. }) {
            self.modal = Modal::None;
        }
    }

    /// What: Store a fetched or freshly saved profile.
    ///
    /// Details:
    /// - Re-applies the relevance filter when deals are showing, since the
    ///   filter depends on the profile.
    pub fn set_profile(&mut self, profile: Option<PreferenceProfile>) {
        self.profile = profile;
        if self.view == ViewState::Results {
            apply_profile_filter(self);
        }
    }

    /// What: Reset everything tied to the session after a successful logout.
    ///
    /// Details:
    /// - Clears session, profile, and both card lists and returns to the Empty panel
    ///   regardless of the previous one, with focus back on the search bar.
    pub fn logout_reset(&mut self) {
        self.clear_session();
        self.all_deals.clear();
        self.deals.clear();
        self.recommendations.clear();
        self.insights = None;
        self.count_line.clear();
        self.filter_applied = false;
        self.view = ViewState::Empty;
        self.focus = Focus::Search;
        self.reset_selection();
    }

    /// What: Show deal results for a finished search.
    ///
    /// Inputs:
    /// - `query`: Query that produced the deals.
    /// - `deals`: Deals as returned (may be empty).
    /// - `insights`: Optional commentary; `None` keeps the previous block.
    ///
    /// Output:
    /// - Switches to the Results panel with filtered deals and a fresh count line.
    pub fn render_deals(&mut self, query: &str, deals: Vec<Deal>, insights: Option<String>) {
        self.searched_query = query.to_string();
        if let Some(text) = insights.filter(|t| !t.trim().is_empty()) {
            self.insights = Some(text);
        }
        self.all_deals = deals;
        apply_profile_filter(self);
        self.view = ViewState::Results;
        self.reset_selection();
    }

    /// What: Show recommendation cards.
    ///
    /// Inputs:
    /// - `list`: Recommendations from the backend.
    ///
    /// Output:
    /// - `true` when the panel switched; `false` when the list was empty, in which case
    ///   an error is shown in [`Self::preferences_alert_slot`] and the view stays as it was.
    pub fn render_recommendations(&mut self, list: Vec<Recommendation>) -> bool {
        if list.is_empty() {
            self.show_alert(
                self.preferences_alert_slot(),
                AlertKind::Error,
                NO_RECOMMENDATIONS_MESSAGE,
            );
            return false;
        }
        self.recommendations = list;
        self.view = ViewState::Recommendations;
        self.reset_selection();
        true
    }

    /// What: Flip the match-profile toggle and re-filter visible deals.
    pub fn toggle_match_profile(&mut self) {
        self.match_profile = !self.match_profile;
        if self.view == ViewState::Results {
            apply_profile_filter(self);
            self.reset_selection();
        }
    }

    /// Number of cards in the visible panel.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        match self.view {
            ViewState::Results => self.deals.len(),
            ViewState::Recommendations => self.recommendations.len(),
            ViewState::Empty | ViewState::Loading => 0,
        }
    }

    /// What: Move the highlighted card by `delta`, clamped to the visible list.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible_len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
        self.list_state.select(Some(self.selected));
    }

    /// Highlighted deal, when deals are showing.
    #[must_use]
    pub fn selected_deal(&self) -> Option<&Deal> {
        (self.view == ViewState::Results)
            .then(|| self.deals.get(self.selected))
            .flatten()
    }

    /// Highlighted recommendation, when recommendations are showing.
    #[must_use]
    pub fn selected_recommendation(&self) -> Option<&Recommendation> {
        (self.view == ViewState::Recommendations)
            .then(|| self.recommendations.get(self.selected))
            .flatten()
    }

    /// Select the first card of the visible panel, if any.
    fn reset_selection(&mut self) {
        self.selected = 0;
        let sel = (self.visible_len() > 0).then_some(0);
        self.list_state.select(sel);
    }
}
