//! Modal dialog state for the UI.

use std::collections::BTreeSet;

use crate::state::session::PreferenceProfile;
use crate::state::types::{HistoryEntry, Secret};
use crate::state::vocab::{
    AVOIDED_INGREDIENTS, CONCERNS, PREFERRED_INGREDIENTS, PRODUCT_PREFERENCES, SKIN_TYPES,
};

/// Default lower budget shown when the profile has none.
pub const DEFAULT_BUDGET_MIN: f64 = 10.0;
/// Default upper budget shown when the profile has none.
pub const DEFAULT_BUDGET_MAX: f64 = 100.0;

/// Which tab of the authentication dialog is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthTab {
    /// Existing account.
    SignIn,
    /// New account.
    SignUp,
}

impl AuthTab {
    /// Switch to the other tab.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

/// Sign-in form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    /// Email field.
    pub email: String,
    /// Password field.
    pub password: Secret,
    /// Focused field index (0 = email, 1 = password).
    pub focus: usize,
}

impl SignInForm {
    /// Number of editable fields.
    pub const FIELDS: usize = 2;

    /// What: Insert a typed character into the focused field.
    pub fn push(&mut self, ch: char) {
        match self.focus {
            0 => self.email.push(ch),
            _ => self.password.push(ch),
        }
    }

    /// What: Delete the last character of the focused field.
    pub fn pop(&mut self) {
        match self.focus {
            0 => {
                self.email.pop();
            }
            _ => self.password.pop(),
        }
    }
}

/// Sign-up form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    /// Display name field.
    pub name: String,
    /// Email field.
    pub email: String,
    /// Password field.
    pub password: Secret,
    /// Focused field index (0 = name, 1 = email, 2 = password).
    pub focus: usize,
}

impl SignUpForm {
    /// Number of editable fields.
    pub const FIELDS: usize = 3;

    /// What: Insert a typed character into the focused field.
    pub fn push(&mut self, ch: char) {
        match self.focus {
            0 => self.name.push(ch),
            1 => self.email.push(ch),
            _ => self.password.push(ch),
        }
    }

    /// What: Delete the last character of the focused field.
    pub fn pop(&mut self) {
        match self.focus {
            0 => {
                self.name.pop();
            }
            1 => {
                self.email.pop();
            }
            _ => self.password.pop(),
        }
    }
}

/// One selectable line of the preferences form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceRow {
    /// Radio choice for the skin type.
    SkinType(&'static str),
    /// Concern checkbox.
    Concern(&'static str),
    /// Lower budget text field.
    BudgetMin,
    /// Upper budget text field.
    BudgetMax,
    /// Preferred ingredient checkbox.
    Preferred(&'static str),
    /// Avoided ingredient checkbox.
    Avoided(&'static str),
    /// Product preference checkbox.
    ProductPreference(&'static str),
}

/// What: Editable contents of the preferences dialog.
///
/// Details:
/// - Budgets are kept as text while editing and parsed on submit; an unparsable
///   budget is sent as `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct PreferenceForm {
    /// Selected skin type (radio).
    pub skin_type: Option<String>,
    /// Checked concerns.
    pub concerns: BTreeSet<String>,
    /// Lower budget text.
    pub budget_min: String,
    /// Upper budget text.
    pub budget_max: String,
    /// Checked preferred ingredients.
    pub preferred_ingredients: BTreeSet<String>,
    /// Checked avoided ingredients.
    pub avoided_ingredients: BTreeSet<String>,
    /// Checked product preferences.
    pub product_preferences: BTreeSet<String>,
    /// Index of the highlighted row in [`PreferenceForm::rows`].
    pub cursor: usize,
}

impl Default for PreferenceForm {
    fn default() -> Self {
        Self {
            skin_type: None,
            concerns: BTreeSet::new(),
            budget_min: format_budget(DEFAULT_BUDGET_MIN),
            budget_max: format_budget(DEFAULT_BUDGET_MAX),
            preferred_ingredients: BTreeSet::new(),
            avoided_ingredients: BTreeSet::new(),
            product_preferences: BTreeSet::new(),
            cursor: 0,
        }
    }
}

impl PreferenceForm {
    /// What: Build a fresh form, pre-filled from a stored profile when present.
    ///
    /// Inputs:
    /// - `profile`: Stored profile, if any.
    ///
    /// Output:
    /// - Form with all choices reset, then set from the profile. Values outside the
    ///   known vocabularies are dropped because no row can show them.
    #[must_use]
    pub fn from_profile(profile: Option<&PreferenceProfile>) -> Self {
        let mut form = Self::default();
        let Some(p) = profile else {
            return form;
        };
        form.skin_type = p
            .skin_type()
            .filter(|s| SKIN_TYPES.contains(s))
            .map(str::to_string);
        form.budget_min = format_budget(p.budget_min.unwrap_or(DEFAULT_BUDGET_MIN));
        form.budget_max = format_budget(p.budget_max.unwrap_or(DEFAULT_BUDGET_MAX));
        form.concerns = known(&p.concerns, CONCERNS);
        form.preferred_ingredients = known(&p.preferred_ingredients, PREFERRED_INGREDIENTS);
        form.avoided_ingredients = known(&p.avoided_ingredients, AVOIDED_INGREDIENTS);
        form.product_preferences = known(&p.product_preferences, PRODUCT_PREFERENCES);
        form
    }

    /// What: All rows in display order.
    #[must_use]
    pub fn rows() -> Vec<PreferenceRow> {
        let mut rows: Vec<PreferenceRow> = SKIN_TYPES
            .iter()
            .map(|s| PreferenceRow::SkinType(s))
            .collect();
        rows.extend(CONCERNS.iter().map(|s| PreferenceRow::Concern(s)));
        rows.push(PreferenceRow::BudgetMin);
        rows.push(PreferenceRow::BudgetMax);
        rows.extend(PREFERRED_INGREDIENTS.iter().map(|s| PreferenceRow::Preferred(s)));
        rows.extend(AVOIDED_INGREDIENTS.iter().map(|s| PreferenceRow::Avoided(s)));
        rows.extend(
            PRODUCT_PREFERENCES
                .iter()
                .map(|s| PreferenceRow::ProductPreference(s)),
        );
        rows
    }

    /// Row under the cursor.
    #[must_use]
    pub fn current_row(&self) -> PreferenceRow {
        let rows = Self::rows();
        rows[self.cursor.min(rows.len() - 1)]
    }

    /// What: Move the cursor by `delta` rows, clamped to the list.
    pub fn move_cursor(&mut self, delta: isize) {
        let last = Self::rows().len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// What: Whether a row is currently selected/checked.
    #[must_use]
    pub fn is_checked(&self, row: PreferenceRow) -> bool {
        match row {
            PreferenceRow::SkinType(s) => self.skin_type.as_deref() == Some(s),
            PreferenceRow::Concern(s) => self.concerns.contains(s),
            PreferenceRow::Preferred(s) => self.preferred_ingredients.contains(s),
            PreferenceRow::Avoided(s) => self.avoided_ingredients.contains(s),
            PreferenceRow::ProductPreference(s) => self.product_preferences.contains(s),
            PreferenceRow::BudgetMin | PreferenceRow::BudgetMax => false,
        }
    }

    /// What: Toggle the row under the cursor.
    ///
    /// Details:
    /// - Skin type behaves like a radio group: selecting one replaces the previous choice.
    /// - Budget rows are text fields and ignore toggling.
    pub fn toggle_current(&mut self) {
        match self.current_row() {
            PreferenceRow::SkinType(s) => self.skin_type = Some(s.to_string()),
            PreferenceRow::Concern(s) => flip(&mut self.concerns, s),
            PreferenceRow::Preferred(s) => flip(&mut self.preferred_ingredients, s),
            PreferenceRow::Avoided(s) => flip(&mut self.avoided_ingredients, s),
            PreferenceRow::ProductPreference(s) => flip(&mut self.product_preferences, s),
            PreferenceRow::BudgetMin | PreferenceRow::BudgetMax => {}
        }
    }

    /// What: Type into the budget field under the cursor.
    ///
    /// Inputs:
    /// - `ch`: Typed character; only digits and `.` are accepted.
    ///
    /// Output:
    /// - `true` when the character was consumed by a budget field.
    pub fn push_budget_char(&mut self, ch: char) -> bool {
        if !(ch.is_ascii_digit() || ch == '.') {
            return false;
        }
        match self.current_row() {
            PreferenceRow::BudgetMin => self.budget_min.push(ch),
            PreferenceRow::BudgetMax => self.budget_max.push(ch),
            _ => return false,
        }
        true
    }

    /// What: Backspace in the budget field under the cursor.
    pub fn pop_budget_char(&mut self) {
        match self.current_row() {
            PreferenceRow::BudgetMin => {
                self.budget_min.pop();
            }
            PreferenceRow::BudgetMax => {
                self.budget_max.pop();
            }
            _ => {}
        }
    }
}

/// What: Active modal dialog, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Modal {
    /// No dialog open.
    #[default]
    None,
    /// Sign-in / sign-up dialog.
    Auth {
        /// Active tab.
        tab: AuthTab,
        /// Sign-in fields.
        signin: SignInForm,
        /// Sign-up fields.
        signup: SignUpForm,
    },
    /// Preferences quiz.
    Preferences {
        /// Form contents.
        form: PreferenceForm,
    },
    /// Past recommendation runs.
    History {
        /// Loaded entries, newest first.
        entries: Vec<HistoryEntry>,
        /// Vertical scroll offset.
        scroll: u16,
    },
}

/// Keep only values present in a vocabulary.
fn known(values: &BTreeSet<String>, vocab: &[&str]) -> BTreeSet<String> {
    values
        .iter()
        .filter(|v| vocab.contains(&v.as_str()))
        .cloned()
        .collect()
}

/// Toggle membership of `value` in `set`.
fn flip(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

/// Render a budget as text without a trailing `.0` for whole numbers.
fn format_budget(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}
