//! Library entry for skindeals exposing state, sync, and rendering for the
//! binary and integration tests.

pub mod app;
pub mod args;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
