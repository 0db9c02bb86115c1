use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(
            t,
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
    }
    block
}

/// Style for panel-like containers.
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for input fields; caller sets the block border based on focus.
pub fn input_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    let mut style = Style::default().bg(surface).fg(text);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// Secondary button style (outline-like, rely on border color in Block).
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, enabled: bool, selected: bool) -> Style {
    if enabled {
        let ThemeRoles {
            accent_secondary,
            selection_bg,
            ..
        } = theme.roles().clone();
        let style = Style::default().fg(accent_secondary);
        if selected {
            return style.bg(selection_bg);
        }
        style
    } else {
        theme.text_muted_style()
    }
}

/// Badge/tag style (filled accent, readable text).
pub fn badge_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { accent_secondary, .. } = theme.roles().clone();
    Style::default().bg(accent_secondary).fg(Color::Black)
}

/// Renders a standard button.
#[allow(clippy::too_many_arguments)]
pub fn render_button<T: Theme + ?Sized>(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_enabled: bool,
    is_focused: bool,
    is_destructive: bool,
    theme: &T,
    borders: Borders,
) {
    let border_style = if !is_enabled {
        theme.text_muted_style()
    } else if is_destructive {
        theme.status_error()
    } else {
        theme.border_style(is_focused)
    };

    let button_style = if !is_enabled {
        theme.text_muted_style()
    } else if is_destructive {
        let style = theme.status_error();
        if is_focused {
            style.bg(theme.roles().selection_bg).add_modifier(Modifier::BOLD)
        } else {
            style
        }
    } else {
        button_secondary_style(theme, true, is_focused)
    };

    let padding = if borders.is_empty() {
        Padding::uniform(1)
    } else {
        Padding::uniform(0)
    };

    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(
                Block::bordered()
                    .borders(borders)
                    .border_style(border_style)
                    .padding(padding),
            )
            .style(button_style),
        area,
    );
}

/// Build a one-line checkbox: `[x] Label`.
pub fn create_checkbox<'a, T: Theme + ?Sized>(
    label: Option<&str>,
    checked: bool,
    focused: bool,
    theme: &T,
) -> Line<'a> {
    let mark = if checked { "[x] " } else { "[ ] " };
    let mark_style = if checked {
        theme.status_success()
    } else {
        theme.text_secondary_style()
    };
    let mut label_style = theme.text_primary_style();
    if focused {
        label_style = label_style
            .bg(theme.roles().selection_bg)
            .add_modifier(Modifier::BOLD);
    }
    let mut spans = vec![Span::styled(mark.to_string(), mark_style)];
    if let Some(text) = label {
        spans.push(Span::styled(text.to_string(), label_style));
    }
    Line::from(spans)
}

/// Build hint-bar spans from `(key, description)` pairs.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.hint_key_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}
