//! Command-line argument definition and settings overrides.

use clap::Parser;

use crate::theme::{Settings, normalize};

/// skindeals - find shopping deals and skincare recommendations from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "skindeals")]
#[command(version)]
#[command(about = "Find shopping deals and skincare recommendations from the terminal", long_about = None)]
pub struct Args {
    /// Backend base URL (overrides `base_url` in settings.conf)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Search deals from the command line, print the cards, and exit
    #[arg(short, long)]
    pub search: Option<String>,

    /// Ask the backend to localize results by your IP address
    #[arg(long)]
    pub use_location: bool,

    /// Maximum number of deals to request (1-50)
    #[arg(long)]
    pub max_results: Option<u32>,

    /// Filter skincare results against your stored skin profile
    #[arg(long)]
    pub match_profile: bool,

    /// Log in before a one-shot search (password is prompted for)
    #[arg(long, value_name = "EMAIL", requires = "search")]
    pub login: Option<String>,
}

impl Args {
    /// What: Apply command-line overrides to loaded settings for this run only.
    ///
    /// Inputs:
    /// - `settings`: Settings loaded from `settings.conf`.
    ///
    /// Output:
    /// - None (modifies `settings` in place and re-normalizes it).
    ///
    /// Details:
    /// - Boolean flags only switch toggles on; absent flags keep the file values.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.base_url {
            settings.base_url.clone_from(url);
        }
        if let Some(n) = self.max_results {
            settings.max_results = n;
        }
        if self.use_location {
            settings.use_location_default = true;
        }
        if self.match_profile {
            settings.match_profile_default = true;
        }
        normalize(settings);
    }
}
