//! Generic labeled form-field widgets.
//!
//! These are stateless presentation primitives: each receives a value plus
//! focus information, draws one field row, and returns the editable area so
//! the caller can place the cursor and hit-test mouse clicks. They hold no
//! state of their own and never touch the provider record.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::ui::theme::{Theme, theme_helpers};

/// Width of the label column in field rows.
const LABEL_WIDTH: u16 = 24;

/// One editable single-line text field: `Label   value`.
///
/// Returns the value area for cursor placement and click hit-testing.
pub fn render_input_row(
    frame: &mut Frame,
    area: Rect,
    theme: &dyn Theme,
    label: &str,
    placeholder: &str,
    value: &str,
    focused: bool,
) -> Rect {
    let columns = Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)]).split(area);

    frame.render_widget(
        Span::styled(label.to_string(), theme.text_secondary_style()),
        columns[0],
    );

    let text = if value.is_empty() && !focused {
        Span::styled(placeholder.to_string(), theme.text_muted_style())
    } else {
        Span::styled(value.to_string(), theme_helpers::input_style(theme, focused))
    };
    frame.render_widget(Paragraph::new(text), columns[1]);
    columns[1]
}

/// Multi-line text area with the label as a block title; used for
/// certificate text. Returns the inner text area.
pub fn render_text_area(
    frame: &mut Frame,
    area: Rect,
    theme: &dyn Theme,
    label: &str,
    placeholder: &str,
    value: &str,
    focused: bool,
) -> Rect {
    let block = theme_helpers::block(theme, Some(label), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = if value.is_empty() && !focused {
        Paragraph::new(Span::styled(placeholder.to_string(), theme.text_muted_style()))
    } else {
        Paragraph::new(value.to_string()).style(theme_helpers::input_style(theme, focused))
    };
    frame.render_widget(paragraph.wrap(Wrap { trim: false }), inner);
    inner
}

/// One boolean toggle row: `[x] Label`.
pub fn render_toggle_row(
    frame: &mut Frame,
    area: Rect,
    theme: &dyn Theme,
    label: &str,
    checked: bool,
    focused: bool,
) {
    let line = theme_helpers::create_checkbox(Some(label), checked, focused, theme);
    frame.render_widget(Paragraph::new(line), area);
}

/// Single-choice row cycling a fixed option set: `Label   ‹ Value ›`.
pub fn render_select_row(
    frame: &mut Frame,
    area: Rect,
    theme: &dyn Theme,
    label: &str,
    value_label: &str,
    focused: bool,
) {
    let columns = Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)]).split(area);
    frame.render_widget(
        Span::styled(label.to_string(), theme.text_secondary_style()),
        columns[0],
    );
    let arrows = theme.text_muted_style();
    let line = Line::from(vec![
        Span::styled("‹ ", arrows),
        Span::styled(
            value_label.to_string(),
            theme_helpers::input_style(theme, focused),
        ),
        Span::styled(" ›", arrows),
    ]);
    frame.render_widget(Paragraph::new(line), columns[1]);
}

/// Read-only info row built from `(label, value)` pairs.
pub fn render_info_row(frame: &mut Frame, area: Rect, theme: &dyn Theme, fields: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(fields.len() * 2);
    for (label, value) in fields {
        spans.push(Span::styled(
            format!("{label}: "),
            theme.text_muted_style(),
        ));
        spans.push(Span::styled((*value).to_string(), theme.text_secondary_style()));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
