use std::borrow::Cow;

use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use ssopanel_types::{Effect, ProviderType};

/// One button in a [`ChoiceModalState`].
#[derive(Debug, Clone)]
pub struct ChoiceButton {
    pub label: Cow<'static, str>,
    /// Rendered in the error style when set.
    pub destructive: bool,
    /// Emitted alongside `Effect::CloseModal` when the button is activated.
    pub effect: Effect,
    pub focus: FocusFlag,
}

impl ChoiceButton {
    fn new(label: impl Into<Cow<'static, str>>, effect: Effect) -> Self {
        Self {
            label: label.into(),
            destructive: false,
            effect,
            focus: FocusFlag::default(),
        }
    }

    fn destructive(label: impl Into<Cow<'static, str>>, effect: Effect) -> Self {
        Self {
            destructive: true,
            ..Self::new(label, effect)
        }
    }
}

/// State for the choice modal: title, optional message, button row.
#[derive(Debug, Clone, Default)]
pub struct ChoiceModalState {
    title: String,
    message: Option<String>,
    buttons: Vec<ChoiceButton>,

    container_focus: FocusFlag,
}

impl ChoiceModalState {
    /// Modal asking the user to confirm removal of the named record.
    pub fn confirm_remove(provider_label: &str) -> Self {
        let name = if provider_label.is_empty() {
            "this provider"
        } else {
            provider_label
        };
        Self {
            title: "Remove Provider".to_string(),
            message: Some(format!("Remove {name}? This cannot be undone.")),
            buttons: vec![
                ChoiceButton::destructive("Remove", Effect::RemoveProviderConfirmed),
                ChoiceButton::new("Cancel", Effect::CloseModal),
            ],
            container_focus: FocusFlag::default(),
        }
    }

    /// Modal offering one button per provider kind plus cancel.
    pub fn add_provider() -> Self {
        let mut buttons: Vec<ChoiceButton> = ProviderType::ALL
            .iter()
            .map(|kind| ChoiceButton::new(kind.title(), Effect::AddProvider(*kind)))
            .collect();
        buttons.push(ChoiceButton::new("Cancel", Effect::CloseModal));
        Self {
            title: "Add Provider".to_string(),
            message: Some("Select the provider type to add.".to_string()),
            buttons,
            container_focus: FocusFlag::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn buttons(&self) -> &[ChoiceButton] {
        &self.buttons
    }

    pub fn focused_button(&self) -> Option<&ChoiceButton> {
        self.buttons.iter().find(|button| button.focus.get())
    }

    pub fn is_button_focused(&self, idx: usize) -> bool {
        self.buttons.get(idx).is_some_and(|button| button.focus.get())
    }
}

impl HasFocus for ChoiceModalState {
    fn build(&self, builder: &mut FocusBuilder) {
        let start = builder.start(self);
        for button in &self.buttons {
            builder.leaf_widget(&button.focus);
        }
        builder.end(start);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_remove_offers_destructive_and_cancel() {
        let modal = ChoiceModalState::confirm_remove("Acme Okta");
        assert_eq!(modal.buttons().len(), 2);
        assert!(modal.buttons()[0].destructive);
        assert_eq!(modal.buttons()[0].effect, Effect::RemoveProviderConfirmed);
        assert_eq!(modal.buttons()[1].effect, Effect::CloseModal);
        assert!(modal.message().unwrap().contains("Acme Okta"));
    }

    #[test]
    fn confirm_remove_falls_back_for_unnamed_records() {
        let modal = ChoiceModalState::confirm_remove("");
        assert!(modal.message().unwrap().contains("this provider"));
    }

    #[test]
    fn add_provider_offers_every_kind() {
        let modal = ChoiceModalState::add_provider();
        assert_eq!(modal.buttons().len(), ProviderType::ALL.len() + 1);
        assert_eq!(
            modal.buttons()[0].effect,
            Effect::AddProvider(ProviderType::Google)
        );
        assert_eq!(modal.buttons().last().unwrap().effect, Effect::CloseModal);
    }
}
