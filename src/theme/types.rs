use ratatui::style::Color;

/// Colors by role, as used by the renderers.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Screen background.
    pub background: Color,
    /// Dialog background.
    pub dialog: Color,
    /// Text drawn on top of `active_tab`.
    pub on_accent: Color,
    /// Highlighted list row.
    pub selection: Color,
    /// Unfocused borders.
    pub border: Color,
    /// Hints, footers, and secondary labels.
    pub muted: Color,
    /// Scores and reasons.
    pub faint: Color,
    /// Body text.
    pub text: Color,
    /// Placeholder and count text.
    pub dim: Color,
    /// Seller and brand lines.
    pub secondary: Color,
    /// Focused borders, cursor, and links.
    pub focus: Color,
    /// Titles and headings.
    pub title: Color,
    /// Prices and success alerts.
    pub success: Color,
    /// Insights heading.
    pub notice: Color,
    /// Error alerts.
    pub error: Color,
    /// Selected tab or option.
    pub active_tab: Color,
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Backend origin, without a trailing slash.
    pub base_url: String,
    /// Result cap sent with every deal search (1..=50).
    pub max_results: u32,
    /// Initial state of the "use my location" toggle.
    pub use_location_default: bool,
    /// Initial state of the "match my skin profile" toggle.
    pub match_profile_default: bool,
    /// Seconds before an inline alert disappears.
    pub alert_dismiss_secs: u64,
    /// Delay between a successful login/signup and the session refresh.
    pub login_refresh_delay_ms: u64,
    /// Delay between the post-login refresh and the preferences prompt.
    pub prompt_delay_ms: u64,
    /// Placeholder image service used when a card has no image.
    pub placeholder_image_base: String,
}

impl Default for Settings {
    /// What: Provide the built-in settings used when `settings.conf` is missing or partial.
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            max_results: 12,
            use_location_default: false,
            match_profile_default: false,
            alert_dismiss_secs: 5,
            login_refresh_delay_ms: 1000,
            prompt_delay_ms: 500,
            placeholder_image_base: "https://via.placeholder.com/300x200/6366F1/FFFFFF"
                .to_string(),
        }
    }
}
