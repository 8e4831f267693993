//! skindeals application module: terminal lifecycle and the async runtime.

/// Runtime event loop and background workers.
pub mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;
