//! Theme styling for the TUI UI layer.
//!
//! Defines the semantic color roles, the built-in palette, and helper
//! builders for Ratatui widgets and styles. Prefer these helpers over
//! hard-coding colors to keep the UI consistent.

pub mod theme_helpers;

use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub border: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub accent_primary: Color,
    pub accent_secondary: Color,

    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,
    pub focus: Color,

    /// Background used behind modal overlays.
    pub modal_bg: Color,
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    // Text styles
    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    // Borders and focus
    fn border_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.roles().focus
        } else {
            self.roles().border
        };
        Style::default().fg(color)
    }

    // Selection
    fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.roles().selection_fg)
            .bg(self.roles().selection_bg)
    }

    /// Style used for the darkened background behind modal dialogs.
    fn modal_background_style(&self) -> Style {
        Style::default().bg(self.roles().modal_bg)
    }

    // Status styles
    fn status_info(&self) -> Style {
        Style::default().fg(self.roles().info)
    }
    fn status_success(&self) -> Style {
        Style::default().fg(self.roles().success)
    }
    fn status_warning(&self) -> Style {
        Style::default().fg(self.roles().warning)
    }
    fn status_error(&self) -> Style {
        Style::default().fg(self.roles().error)
    }

    /// Emphasized style for keyboard hints.
    fn hint_key_style(&self) -> Style {
        Style::default()
            .fg(self.roles().accent_secondary)
            .add_modifier(Modifier::BOLD)
    }
}

/// The built-in palette: a muted slate surface with cyan accents.
#[derive(Debug, Clone)]
pub struct SlateTheme {
    roles: ThemeRoles,
}

impl Default for SlateTheme {
    fn default() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Rgb(24, 26, 31),
                surface: Color::Rgb(30, 33, 39),
                surface_muted: Color::Rgb(39, 43, 51),
                border: Color::Rgb(62, 68, 81),

                text: Color::Rgb(220, 223, 228),
                text_secondary: Color::Rgb(171, 178, 191),
                text_muted: Color::Rgb(110, 118, 131),

                accent_primary: Color::Rgb(82, 139, 255),
                accent_secondary: Color::Rgb(86, 182, 194),

                info: Color::Rgb(97, 175, 239),
                success: Color::Rgb(152, 195, 121),
                warning: Color::Rgb(229, 192, 123),
                error: Color::Rgb(224, 108, 117),

                selection_bg: Color::Rgb(54, 59, 70),
                selection_fg: Color::Rgb(229, 233, 240),
                focus: Color::Rgb(86, 182, 194),

                modal_bg: Color::Rgb(18, 20, 24),
            },
        }
    }
}

impl Theme for SlateTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
