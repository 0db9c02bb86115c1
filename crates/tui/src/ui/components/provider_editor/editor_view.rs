use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ssopanel_types::{Effect, Provider, ProviderKind};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::common::fields;
use crate::ui::theme::theme_helpers::{self, build_hint_spans};

use super::state::{EditorAction, EditorField, ProviderEditorState};

/// Height of the certificate text area, borders included.
const CERT_ROWS: u16 = 6;

/// Areas captured during render, for mouse hit-testing and cursor placement.
#[derive(Debug, Clone, Default)]
struct EditorAreas {
    label: Rect,
    roles: Rect,
    add_role: Rect,
    add_button: Rect,
    auto_create: Rect,
    role_management: Rect,
    variant: Vec<(EditorField, Rect)>,
    remove_button: Rect,
}

/// Renders the provider editor form and maps input onto editor actions.
#[derive(Debug, Default)]
pub struct ProviderEditorView {
    areas: EditorAreas,
}

impl ProviderEditorView {
    /// Label and placeholder for a variant text field, phrased per kind.
    fn field_meta(kind: &ProviderKind, field: EditorField) -> (&'static str, &'static str) {
        match (kind, field) {
            (ProviderKind::Google { .. }, EditorField::Domain) => ("Domain", "Google domain to match"),
            (ProviderKind::OneLogin { .. }, EditorField::IssuerUrl) => ("Issuer URL", "OneLogin issuer URL"),
            (ProviderKind::OneLogin { .. }, EditorField::SamlUrl) => {
                ("SAML 2.0 Endpoint (HTTP)", "OneLogin SAML endpoint")
            }
            (ProviderKind::Okta { .. }, EditorField::SamlUrl) => {
                ("Single Sign-On URL", "Okta single sign-on URL")
            }
            (ProviderKind::Okta { .. }, EditorField::IssuerUrl) => ("Identity Provider Issuer", "Okta issuer URI"),
            (_, EditorField::SamlCert) => ("X.509 Certificate", "PEM encoded certificate"),
            _ => ("", ""),
        }
    }

    /// The text field currently holding focus, if any.
    fn focused_text_field(app: &App) -> Option<EditorField> {
        if app.editor.f_label.get() {
            return Some(EditorField::Label);
        }
        app.editor
            .variant_fields()
            .iter()
            .copied()
            .find(|field| app.editor.flag(*field).get())
    }

    fn apply_action(app: &mut App, provider: &Provider, action: EditorAction) -> Vec<Effect> {
        match app.editor.apply(provider, action) {
            Some(next) => vec![Effect::ReplaceProvider(Box::new(next))],
            None => Vec::new(),
        }
    }

    fn submit_role(app: &mut App, provider: &Provider) -> Vec<Effect> {
        Self::apply_action(app, provider, EditorAction::SubmitRole)
    }

    fn handle_text_field_key(
        &mut self,
        app: &mut App,
        provider: &Provider,
        field: EditorField,
        key: KeyEvent,
    ) -> Vec<Effect> {
        let current = ProviderEditorState::field_value(provider, field).unwrap_or_default();
        app.editor.sync_field_input(field, current);

        let input = app.editor.field_input_mut();
        let changed = match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                input.backspace();
                true
            }
            KeyCode::Delete => {
                input.delete();
                true
            }
            KeyCode::Enter if field == EditorField::SamlCert => {
                input.insert_char('\n');
                true
            }
            KeyCode::Left => {
                input.move_left();
                false
            }
            KeyCode::Right => {
                input.move_right();
                false
            }
            KeyCode::Home => {
                input.set_cursor(0);
                false
            }
            KeyCode::End => {
                let end = input.input().len();
                input.set_cursor(end);
                false
            }
            _ => return Vec::new(),
        };
        if !changed {
            return Vec::new();
        }

        let value = app.editor.field_input().input().to_string();
        let action = ProviderEditorState::text_action(field, value);
        Self::apply_action(app, provider, action)
    }

    fn handle_roles_key(app: &mut App, provider: &Provider, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Left => {
                app.editor.select_prev_role();
                Vec::new()
            }
            KeyCode::Right => {
                app.editor.select_next_role(provider.default_roles.len());
                Vec::new()
            }
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Enter => {
                match provider.default_roles.get(app.editor.selected_role()).cloned() {
                    Some(role) => Self::apply_action(app, provider, EditorAction::RemoveRole(role)),
                    None => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    fn handle_add_role_key(&mut self, app: &mut App, provider: &Provider, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter => Self::submit_role(app, provider),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.editor.add_role_mut().insert_char(c);
                Vec::new()
            }
            KeyCode::Backspace => {
                app.editor.add_role_mut().backspace();
                Vec::new()
            }
            KeyCode::Delete => {
                app.editor.add_role_mut().delete();
                Vec::new()
            }
            KeyCode::Left => {
                app.editor.add_role_mut().move_left();
                Vec::new()
            }
            KeyCode::Right => {
                app.editor.add_role_mut().move_right();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Role badges with the focused selection highlighted.
    fn roles_line<'a>(app: &App, provider: &'a Provider) -> Line<'a> {
        let theme = &*app.ctx.theme;
        if provider.default_roles.is_empty() {
            return Line::from(Span::styled("None", theme.text_muted_style()));
        }
        let focused = app.editor.f_roles.get();
        let selected = app.editor.selected_role();
        let mut spans = Vec::with_capacity(provider.default_roles.len() * 2);
        for (i, role) in provider.default_roles.iter().enumerate() {
            let mut style = theme_helpers::badge_style(theme);
            if focused && i == selected {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {role} "), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Component for ProviderEditorView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let Some(provider) = app.providers.selected_provider().cloned() else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.focus.prev();
                return Vec::new();
            }
            _ => {}
        }

        if let Some(field) = Self::focused_text_field(app) {
            return self.handle_text_field_key(app, &provider, field, key);
        }
        if app.editor.f_roles.get() {
            return Self::handle_roles_key(app, &provider, key);
        }
        if app.editor.f_add_role.get() {
            return self.handle_add_role_key(app, &provider, key);
        }
        if app.editor.f_add_button.get() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Self::submit_role(app, &provider),
                _ => Vec::new(),
            };
        }
        if app.editor.f_auto_create.get() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    Self::apply_action(app, &provider, EditorAction::ToggleAutoCreate)
                }
                _ => Vec::new(),
            };
        }
        if app.editor.f_role_management.get() {
            return match key.code {
                KeyCode::Right | KeyCode::Char(' ') => Self::apply_action(
                    app,
                    &provider,
                    EditorAction::SetRoleManagement(provider.role_management.cycle_right()),
                ),
                KeyCode::Left => Self::apply_action(
                    app,
                    &provider,
                    EditorAction::SetRoleManagement(provider.role_management.cycle_left()),
                ),
                _ => Vec::new(),
            };
        }
        if app.editor.f_remove_button.get() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => vec![Effect::RemoveProviderRequested],
                _ => Vec::new(),
            };
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let MouseEvent { kind, column, row, .. } = mouse;
        if kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(column, row);

        let targets = [
            (self.areas.label, app.editor.f_label.clone()),
            (self.areas.roles, app.editor.f_roles.clone()),
            (self.areas.add_role, app.editor.f_add_role.clone()),
            (self.areas.add_button, app.editor.f_add_button.clone()),
            (self.areas.auto_create, app.editor.f_auto_create.clone()),
            (self.areas.role_management, app.editor.f_role_management.clone()),
            (self.areas.remove_button, app.editor.f_remove_button.clone()),
        ];
        for (area, flag) in targets {
            if area.contains(position) {
                app.focus.focus(&flag);
                return Vec::new();
            }
        }
        for (field, area) in self.areas.variant.clone() {
            if area.contains(position) {
                let flag = app.editor.flag(field).clone();
                app.focus.focus(&flag);
                return Vec::new();
            }
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let Some(provider) = app.providers.selected_provider().cloned() else {
            let block = theme_helpers::block(&*app.ctx.theme, Some("Provider"), false);
            let inner = block.inner(rect);
            frame.render_widget(block, rect);
            frame.render_widget(
                Paragraph::new("No providers configured. Press 'a' to add one.")
                    .style(app.ctx.theme.text_muted_style()),
                inner,
            );
            self.areas = EditorAreas::default();
            return;
        };

        // Load the record's value into the mirror for the focused field so
        // the cursor lands at the end when focus arrives by Tab or click.
        if let Some(field) = Self::focused_text_field(app) {
            let current = ProviderEditorState::field_value(&provider, field)
                .unwrap_or_default()
                .to_string();
            app.editor.sync_field_input(field, &current);
        }

        let theme = &*app.ctx.theme;
        let title = match provider.kind {
            ProviderKind::Unknown => "Provider".to_string(),
            _ => format!("Provider: {}", provider.kind.title()),
        };
        let block = theme_helpers::block(theme, Some(&title), app.editor.is_focused());
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let mut areas = EditorAreas::default();
        let mut y = inner.y;
        let mut next_row = |height: u16| {
            let row = Rect::new(inner.x, y, inner.width, height).intersection(inner);
            y = y.saturating_add(height);
            row
        };

        let id_value = if provider.id.is_empty() { "None" } else { provider.id.as_str() };
        fields::render_info_row(
            frame,
            next_row(1),
            theme,
            &[("ID", id_value), ("Type", provider.kind.title())],
        );
        next_row(1);

        let label_focused = app.editor.f_label.get();
        let label_value = if label_focused {
            app.editor.field_input().input().to_string()
        } else {
            provider.label.clone()
        };
        areas.label = fields::render_input_row(
            frame,
            next_row(1),
            theme,
            "Label",
            "Display name",
            &label_value,
            label_focused,
        );

        let roles_row = next_row(1);
        let [roles_label_area, roles_value_area] =
            Layout::horizontal([Constraint::Length(24), Constraint::Min(1)]).areas(roles_row);
        frame.render_widget(
            Span::styled("Default Roles", theme.text_secondary_style()),
            roles_label_area,
        );
        frame.render_widget(Paragraph::new(Self::roles_line(app, &provider)), roles_value_area);
        areas.roles = roles_value_area;

        let add_row = next_row(1);
        let [add_input_area, add_button_area] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(9)]).areas(add_row);
        areas.add_role = fields::render_input_row(
            frame,
            add_input_area,
            theme,
            "Add Role",
            "Role name",
            app.editor.add_role().input(),
            app.editor.f_add_role.get(),
        );
        frame.render_widget(
            Paragraph::new("[ Add ]").style(theme_helpers::button_secondary_style(
                theme,
                !app.editor.add_role().is_empty(),
                app.editor.f_add_button.get(),
            )),
            add_button_area,
        );
        areas.add_button = add_button_area;
        next_row(1);

        areas.auto_create = next_row(1);
        fields::render_toggle_row(
            frame,
            areas.auto_create,
            theme,
            "Create user on authentication",
            provider.auto_create,
            app.editor.f_auto_create.get(),
        );

        areas.role_management = next_row(1);
        fields::render_select_row(
            frame,
            areas.role_management,
            theme,
            "Role Management",
            provider.role_management.label(),
            app.editor.f_role_management.get(),
        );
        next_row(1);

        if provider.kind == ProviderKind::Unknown {
            frame.render_widget(
                Paragraph::new("Unrecognized provider type; only shared fields can be edited.")
                    .style(theme.status_warning()),
                next_row(1),
            );
        }
        for field in app.editor.variant_fields() {
            let field = *field;
            let focused = app.editor.flag(field).get();
            let value = if focused {
                app.editor.field_input().input().to_string()
            } else {
                ProviderEditorState::field_value(&provider, field)
                    .unwrap_or_default()
                    .to_string()
            };
            let (label, placeholder) = Self::field_meta(&provider.kind, field);
            let area = if field == EditorField::SamlCert {
                fields::render_text_area(frame, next_row(CERT_ROWS), theme, label, placeholder, &value, focused)
            } else {
                fields::render_input_row(frame, next_row(1), theme, label, placeholder, &value, focused)
            };
            areas.variant.push((field, area));
        }
        next_row(1);

        let remove_row = next_row(3);
        let remove_area = Rect::new(remove_row.x, remove_row.y, 20.min(remove_row.width), remove_row.height);
        theme_helpers::render_button(
            frame,
            remove_area,
            "Remove Provider",
            true,
            app.editor.f_remove_button.get(),
            true,
            theme,
            ratatui::widgets::Borders::ALL,
        );
        areas.remove_button = remove_area;

        // Cursor placement for the focused text input.
        if app.editor.f_add_role.get() {
            let x = areas.add_role.x + app.editor.add_role().cursor_columns() as u16;
            frame.set_cursor_position((x.min(areas.add_role.right().saturating_sub(1)), areas.add_role.y));
        } else if let Some(field) = Self::focused_text_field(app) {
            let cursor_area = if field == EditorField::Label {
                Some(areas.label)
            } else {
                areas.variant.iter().find(|(f, _)| *f == field).map(|(_, a)| *a)
            };
            if let Some(area) = cursor_area
                && area.height > 0
            {
                let (x, cursor_y) = if field == EditorField::SamlCert {
                    let (line, col) = app.editor.field_input().cursor_line_col();
                    (
                        area.x + col as u16,
                        area.y + (line as u16).min(area.height.saturating_sub(1)),
                    )
                } else {
                    (area.x + app.editor.field_input().cursor_columns() as u16, area.y)
                };
                frame.set_cursor_position((x.min(area.right().saturating_sub(1)), cursor_y));
            }
        }

        self.areas = areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        if app.editor.f_roles.get() {
            return build_hint_spans(
                theme,
                &[("←/→", " Select role "), ("Del", " Remove role "), ("Tab", " Next field")],
            );
        }
        if app.editor.f_role_management.get() {
            return build_hint_spans(theme, &[("←/→", " Change mode "), ("Tab", " Next field")]);
        }
        build_hint_spans(
            theme,
            &[("Tab", " Next field "), ("Ctrl+S", " Save "), ("Ctrl+C", " Quit")],
        )
    }
}
