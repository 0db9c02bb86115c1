//! The provider editor form.
//!
//! `state` holds the pure editing core: which fields the selected record
//! exposes, the transient add-role buffer, and the action reducer that turns
//! field edits into replacement records. `editor_view` maps terminal events
//! onto those actions and renders the form.

pub mod editor_view;
pub mod state;

pub use editor_view::ProviderEditorView;
pub use state::{EditorAction, EditorField, ProviderEditorState};
