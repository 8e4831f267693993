//! Core non-UI logic: the relevance filter, form validation, and request dispatch.

pub mod dispatch;
pub mod filter;
pub mod preferences;

// Re-export public APIs so callers can use `crate::logic::...`
pub use dispatch::{
    RequestSender, begin_search, find_best_price, refresh_session, request_history,
    request_logout, submit_login, submit_preferences, submit_signup,
};
pub use filter::{apply_profile_filter, count_line, filter_deals, is_skincare_query};
pub use preferences::{SKIN_TYPE_REQUIRED, profile_from_form};
