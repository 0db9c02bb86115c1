//! Component trait for the Ssopanel TUI.
//!
//! Components are self-contained UI elements that handle their own events
//! and rendering while integrating with the application through a
//! consistent interface. They report side effects as `Effect`s rather than
//! modifying shared state directly; the runtime processes the returned
//! effects after the handler completes.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;
use ssopanel_types::Effect;

use crate::app::App;

/// A trait representing a UI component with its own behavior.
///
/// Handlers run to completion before the next event is processed; any
/// record mutation a handler produces is reported upward as
/// `Effect::ReplaceProvider` rather than applied in place.
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and cursor placement; state changes belong in event handlers.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Keyboard hints for the bottom bar while this component has focus.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
