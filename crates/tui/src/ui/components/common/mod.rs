//! Shared building blocks: text input state, form field widgets, modals.

pub mod choice_modal;
pub mod fields;
pub mod text_input;

pub use choice_modal::{ChoiceButton, ChoiceModalState, ChoiceModalView};
pub use text_input::TextInputState;
