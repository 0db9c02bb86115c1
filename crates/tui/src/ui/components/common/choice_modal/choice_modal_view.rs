use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Borders, Clear, Paragraph, Wrap};
use ssopanel_types::Effect;

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{block, build_hint_spans, render_button};
use crate::ui::utils::centered_rect;

/// Renders the active [`ChoiceModalState`](super::ChoiceModalState) and maps
/// key and mouse input onto its buttons.
#[derive(Debug, Clone, Default)]
pub struct ChoiceModalView {
    button_areas: Vec<Rect>,
}

impl Component for ChoiceModalView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let Some(modal) = app.modal.as_ref() else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Tab | KeyCode::Right => {
                app.focus.next();
                Vec::new()
            }
            KeyCode::BackTab | KeyCode::Left => {
                app.focus.prev();
                Vec::new()
            }
            KeyCode::Enter => match modal.focused_button() {
                Some(button) => vec![Effect::CloseModal, button.effect.clone()],
                None => Vec::new(),
            },
            KeyCode::Esc => vec![Effect::CloseModal],
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let MouseEvent { kind, column, row, .. } = mouse;
        if kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(modal) = app.modal.as_ref() else {
            return Vec::new();
        };
        let position = Position::new(column, row);
        match self.button_areas.iter().position(|area| area.contains(position)) {
            Some(index) => vec![Effect::CloseModal, modal.buttons()[index].effect.clone()],
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let Some(modal) = app.modal.as_ref() else {
            return;
        };

        let area = centered_rect(50, 30, rect);
        frame.render_widget(Clear, area);

        let frame_block = block(theme, Some(modal.title()), true).style(theme.modal_background_style());
        let inner = frame_block.inner(area);
        frame.render_widget(frame_block, area);

        let [message_area, _, button_row] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1), Constraint::Length(3)]).areas(inner);

        if let Some(message) = modal.message() {
            let lines = message.lines().map(Line::from).collect::<Vec<_>>();
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), message_area);
        }

        let buttons = modal.buttons();
        let width: u16 = 12;
        let spacer: u16 = 2;
        let mut button_areas = Vec::with_capacity(buttons.len());
        for (i, button) in buttons.iter().enumerate() {
            let offset = i as u16 * (width + spacer);
            let button_area = Rect::new(button_row.x + offset, button_row.y, width, button_row.height);
            render_button(
                frame,
                button_area,
                &button.label,
                true,
                modal.is_button_focused(i),
                button.destructive,
                theme,
                Borders::ALL,
            );
            button_areas.push(button_area);
        }
        self.button_areas = button_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        build_hint_spans(
            &*app.ctx.theme,
            &[("Tab", " Next "), ("Enter", " Select "), ("Esc", " Cancel")],
        )
    }
}
