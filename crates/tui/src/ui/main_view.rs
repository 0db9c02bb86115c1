//! Top-level view: provider list on the left, editor on the right, one
//! status-and-hints line at the bottom, modal overlay on top.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ssopanel_types::Effect;

use crate::app::App;
use crate::ui::components::common::ChoiceModalView;
use crate::ui::components::{Component, ProviderEditorView, ProviderListView};

#[derive(Debug, Default)]
pub struct MainView {
    list_view: ProviderListView,
    editor_view: ProviderEditorView,
    modal_view: ChoiceModalView,
}

impl MainView {
    /// Focus fallback after a focus rebuild left nothing focused.
    pub fn restore_focus(&mut self, app: &mut App) {
        match app.modal.as_ref() {
            Some(_) => app.focus.first(),
            None => {
                let flag = app.providers.f_list.clone();
                app.focus.focus(&flag);
            }
        }
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.modal.is_some() {
            return self.modal_view.handle_key_events(app, key);
        }

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![Effect::SaveRequested];
        }
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![Effect::Quit];
        }

        if app.providers.is_focused() {
            return self.list_view.handle_key_events(app, key);
        }
        if app.editor.is_focused() {
            return self.editor_view.handle_key_events(app, key);
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.modal.is_some() {
            return self.modal_view.handle_mouse_events(app, mouse);
        }
        let mut effects = self.list_view.handle_mouse_events(app, mouse);
        effects.extend(self.editor_view.handle_mouse_events(app, mouse));
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let [content_area, bottom_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        let [list_area, editor_area] =
            Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)]).areas(content_area);

        self.list_view.render(frame, list_area, app);
        self.editor_view.render(frame, editor_area, app);

        let bottom = match app.status.clone() {
            Some(status) => Line::from(Span::styled(status, app.ctx.theme.status_info())),
            None => Line::from(self.get_hint_spans(app)),
        };
        frame.render_widget(
            Paragraph::new(bottom).style(app.ctx.theme.text_muted_style()),
            bottom_area,
        );

        if app.modal.is_some() {
            let overlay = Paragraph::new("").style(app.ctx.theme.modal_background_style());
            frame.render_widget(overlay, content_area);
            self.modal_view.render(frame, content_area, app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut spans = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];
        if app.modal.is_some() {
            spans.extend(self.modal_view.get_hint_spans(app));
            return spans;
        }
        if app.providers.is_focused() {
            spans.extend(self.list_view.get_hint_spans(app));
            return spans;
        }
        spans.extend(self.editor_view.get_hint_spans(app));
        spans
    }
}
