//! Application state shared across the UI components.

use std::rc::Rc;

use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use ssopanel_types::Modal;
use ssopanel_util::SettingsStore;

use crate::ui::components::common::ChoiceModalState;
use crate::ui::components::provider_editor::ProviderEditorState;
use crate::ui::components::providers::ProviderListState;
use crate::ui::theme::{SlateTheme, Theme};

/// Long-lived context handed to components during render.
pub(crate) struct SharedCtx {
    pub theme: Box<dyn Theme>,
    pub store: SettingsStore,
}

/// Top-level application state.
///
/// The provider collection lives in `providers`; the editor holds only
/// editing scaffolding and reads the selected record each event. While a
/// modal is open it owns the focus cycle exclusively.
pub(crate) struct App {
    pub ctx: SharedCtx,
    pub providers: ProviderListState,
    pub editor: ProviderEditorState,
    pub modal: Option<ChoiceModalState>,
    pub status: Option<String>,
    pub focus: Rc<Focus>,
    pub should_quit: bool,

    container: FocusFlag,
}

impl App {
    pub fn new(store: SettingsStore) -> Self {
        let providers = ProviderListState::new(store.load());
        let mut editor = ProviderEditorState::default();
        if let Some(provider) = providers.selected_provider() {
            editor.attach(provider);
        }
        let mut app = Self {
            ctx: SharedCtx {
                theme: Box::new(SlateTheme::default()),
                store,
            },
            providers,
            editor,
            modal: None,
            status: None,
            focus: Rc::new(Focus::default()),
            should_quit: false,
            container: FocusFlag::default(),
        };
        app.focus = Rc::new(FocusBuilder::build_for(&app));
        app.focus.focus(&app.providers.f_list);
        app
    }

    /// Re-point the editor at the current selection, dropping transient
    /// editing state.
    pub fn sync_editor(&mut self) {
        if let Some(provider) = self.providers.selected_provider() {
            self.editor.attach(provider);
        }
    }

    pub fn open_modal(&mut self, modal: Modal) {
        let state = match modal {
            Modal::ConfirmRemove => {
                let label = self
                    .providers
                    .selected_provider()
                    .map(|provider| provider.label.clone())
                    .unwrap_or_default();
                ChoiceModalState::confirm_remove(&label)
            }
            Modal::AddProvider => ChoiceModalState::add_provider(),
        };
        self.modal = Some(state);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Persist the provider list; failures surface on the status line and
    /// leave the in-memory state untouched.
    pub fn save(&mut self) {
        match self.ctx.store.save(self.providers.providers()) {
            Ok(()) => {
                self.providers.mark_clean();
                self.status = Some(format!("Saved to {}", self.ctx.store.path().display()));
            }
            Err(error) => {
                tracing::warn!("failed to save settings: {error}");
                self.status = Some(format!("Save failed: {error}"));
            }
        }
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        match &self.modal {
            // An open modal owns the whole focus cycle.
            Some(modal) => {
                builder.widget(modal);
            }
            None => {
                builder.widget(&self.providers);
                builder.widget(&self.editor);
            }
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
