//! The provider list: owns the record collection and the selection.

pub mod list_view;
pub mod state;

pub use list_view::ProviderListView;
pub use state::ProviderListState;
