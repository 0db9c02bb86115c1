//! UI components: provider list, provider editor, modals.

pub mod common;
pub mod component;
pub mod provider_editor;
pub mod providers;

pub(crate) use component::Component;
pub use provider_editor::ProviderEditorView;
pub use providers::ProviderListView;
