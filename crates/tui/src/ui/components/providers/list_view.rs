use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem};
use ssopanel_types::{Effect, Modal};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{self, build_hint_spans};

/// Renders the provider list and drives selection.
#[derive(Debug, Default)]
pub struct ProviderListView {
    list_area: Rect,
}

impl Component for ProviderListView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                Vec::new()
            }
            KeyCode::BackTab => {
                app.focus.prev();
                Vec::new()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.providers.select_prev();
                app.sync_editor();
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.providers.select_next();
                app.sync_editor();
                Vec::new()
            }
            KeyCode::Char('a') => vec![Effect::ShowModal(Modal::AddProvider)],
            KeyCode::Enter => {
                if app.providers.selected().is_some() {
                    let flag = app.editor.f_label.clone();
                    app.focus.focus(&flag);
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let MouseEvent { kind, column, row, .. } = mouse;
        if kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        if !self.list_area.contains(Position::new(column, row)) {
            return Vec::new();
        }
        let flag = app.providers.f_list.clone();
        app.focus.focus(&flag);
        let index = (row - self.list_area.y) as usize + app.providers.list_state_mut().offset();
        if index < app.providers.len() {
            app.providers.list_state_mut().select(Some(index));
            app.sync_editor();
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let title = if app.providers.is_dirty() {
            "Providers (unsaved)"
        } else {
            "Providers"
        };
        let block = theme_helpers::block(theme, Some(title), app.providers.is_focused());
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        self.list_area = inner;

        let items: Vec<ListItem> = app
            .providers
            .providers()
            .iter()
            .map(|provider| {
                let name = if provider.label.is_empty() {
                    "(unnamed)"
                } else {
                    provider.label.as_str()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(name.to_string(), theme.text_primary_style()),
                    Span::raw(" "),
                    Span::styled(provider.kind.title().to_string(), theme.text_muted_style()),
                ]))
            })
            .collect();

        if items.is_empty() {
            frame.render_widget(
                ratatui::widgets::Paragraph::new("No providers").style(theme.text_muted_style()),
                inner,
            );
            return;
        }

        let list = List::new(items).highlight_style(theme.selection_style());
        frame.render_stateful_widget(list, inner, app.providers.list_state_mut());
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        build_hint_spans(
            &*app.ctx.theme,
            &[
                ("↑/↓", " Select "),
                ("a", " Add "),
                ("Enter", " Edit "),
                ("Tab", " Next panel"),
            ],
        )
    }
}
