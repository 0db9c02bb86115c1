//! Modal dialog presenting a short message and a row of buttons.
//!
//! Used both for the destructive remove confirmation and for picking the
//! kind of a new provider record.

pub mod choice_modal_view;
pub mod state;

pub use choice_modal_view::ChoiceModalView;
pub use state::{ChoiceButton, ChoiceModalState};
