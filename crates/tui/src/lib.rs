//! # Ssopanel TUI Library
//!
//! Terminal user interface for the Ssopanel identity-provider settings
//! panel, built on Ratatui.
//!
//! ## Architecture
//!
//! The UI follows a component-based architecture: the provider list and the
//! provider editor are separate components that handle their own events and
//! rendering, report side effects as `Effect`s, and never mutate the
//! provider collection directly. The runtime drains effects after each
//! event, applies them to the application state, and re-renders.

mod app;
mod ui;

use anyhow::Result;
use ssopanel_util::SettingsStore;

/// Runs the main TUI application loop.
///
/// Initializes the terminal, loads the provider list from the given store,
/// and runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error for terminal setup failures or event loop runtime
/// errors.
pub fn run(store: SettingsStore) -> Result<()> {
    ui::runtime::run_app(store)
}
