use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use ssopanel_types::Provider;

/// Owner of the provider collection and the current selection.
///
/// All mutation is structural: the editor hands back whole replacement
/// records and [`replace_selected`](Self::replace_selected) swaps them in.
/// `dirty` tracks unsaved changes for the status line and the save prompt.
#[derive(Debug, Default)]
pub struct ProviderListState {
    pub f_list: FocusFlag,
    container: FocusFlag,

    providers: Vec<Provider>,
    list_state: ListState,
    dirty: bool,
}

impl ProviderListState {
    pub fn new(providers: Vec<Provider>) -> Self {
        let mut state = Self {
            providers,
            ..Default::default()
        };
        if !state.providers.is_empty() {
            state.list_state.select(Some(0));
        }
        state
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected().filter(|i| *i < self.providers.len())
    }

    pub fn selected_provider(&self) -> Option<&Provider> {
        self.selected().and_then(|i| self.providers.get(i))
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    pub fn select_next(&mut self) {
        if self.providers.is_empty() {
            return;
        }
        let next = match self.selected() {
            Some(i) => (i + 1).min(self.providers.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_prev(&mut self) {
        if self.providers.is_empty() {
            return;
        }
        let prev = self.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }

    /// Swap the selected record for its replacement and mark unsaved.
    pub fn replace_selected(&mut self, provider: Provider) {
        if let Some(i) = self.selected() {
            self.providers[i] = provider;
            self.dirty = true;
        }
    }

    /// Remove the selected record, keeping the selection in bounds.
    pub fn remove_selected(&mut self) -> Option<Provider> {
        let i = self.selected()?;
        let removed = self.providers.remove(i);
        self.dirty = true;
        if self.providers.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(i.min(self.providers.len() - 1)));
        }
        Some(removed)
    }

    /// Append a record and move the selection onto it.
    pub fn push_and_select(&mut self, provider: Provider) {
        self.providers.push(provider);
        self.list_state.select(Some(self.providers.len() - 1));
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn is_focused(&self) -> bool {
        self.container.get()
    }
}

impl HasFocus for ProviderListState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_list);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssopanel_types::ProviderType;

    fn three() -> ProviderListState {
        ProviderListState::new(vec![
            Provider::new(ProviderType::Google).with_label("g"),
            Provider::new(ProviderType::OneLogin).with_label("ol"),
            Provider::new(ProviderType::Okta).with_label("ok"),
        ])
    }

    #[test]
    fn replace_swaps_only_the_selected_record() {
        let mut list = three();
        list.select_next();
        let updated = list.selected_provider().unwrap().with_label("renamed");
        list.replace_selected(updated);

        assert_eq!(list.providers()[0].label, "g");
        assert_eq!(list.providers()[1].label, "renamed");
        assert_eq!(list.providers()[2].label, "ok");
        assert!(list.is_dirty());
    }

    #[test]
    fn remove_keeps_selection_in_bounds() {
        let mut list = three();
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), Some(2));

        list.remove_selected();
        assert_eq!(list.selected(), Some(1));
        assert_eq!(list.len(), 2);

        list.remove_selected();
        list.remove_selected();
        assert_eq!(list.selected(), None);
        assert!(list.selected_provider().is_none());
    }

    #[test]
    fn push_selects_the_new_record() {
        let mut list = ProviderListState::default();
        assert!(!list.is_dirty());
        list.push_and_select(Provider::new(ProviderType::Okta));
        assert_eq!(list.selected(), Some(0));
        assert!(list.is_dirty());
    }

    #[test]
    fn mark_clean_clears_the_dirty_flag() {
        let mut list = three();
        list.replace_selected(list.providers()[0].with_auto_create(true));
        assert!(list.is_dirty());
        list.mark_clean();
        assert!(!list.is_dirty());
    }
}
