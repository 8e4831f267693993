//! skindeals binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use skindeals::{app, args, theme};

/// Log timestamps as local `YYYY-MM-DD HH:MM:SS`.
struct SkindealsTimer;

impl tracing_subscriber::fmt::time::FormatTime for SkindealsTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `~/.config/skindeals/logs/skindeals.log`.
///
/// Inputs:
/// - `level`: Default filter used when `RUST_LOG` is unset.
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("skindeals.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(SkindealsTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(SkindealsTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let mut settings = theme::settings();
    theme::ensure_settings_keys_present(&settings);
    cli.apply_overrides(&mut settings);
    tracing::info!(
        base_url = %settings.base_url,
        max_results = settings.max_results,
        "skindeals starting"
    );

    let result = match cli.search.as_deref() {
        Some(query) => args::run_search(query, cli.login.as_deref(), &settings).await,
        None => app::run(settings).await,
    };
    if let Err(err) = result {
        tracing::error!(error = ?err, "Application error");
        eprintln!("skindeals: {err}");
        std::process::exit(1);
    }
}
