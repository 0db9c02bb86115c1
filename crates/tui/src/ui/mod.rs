//! UI rendering module for the TUI application.

pub mod components;
pub mod main_view;
pub mod runtime;
pub mod theme;
pub mod utils;
