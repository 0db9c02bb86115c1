//! Runtime: terminal lifecycle, input thread, and the event loop.
//!
//! Input comes from a dedicated thread that blocks on
//! `crossterm::event::read()` and forwards events over a channel; keeping
//! `read()` on one OS thread avoids lost or delayed events in some
//! terminals. The main loop drains events, routes them to the focused
//! component, applies the returned `Effect`s, and redraws when something
//! changed.

use std::rc::Rc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::*};
use ssopanel_types::{Effect, Modal, Provider};
use ssopanel_util::SettingsStore;

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_view::MainView;

/// Spawn a dedicated input thread that blocks on terminal input and
/// forwards `crossterm` events over a channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    tracing::warn!("failed to read terminal event: {error}");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Render one frame, rebuilding the focus cycle first so structural
/// changes (modal opened, variant switched) are reflected.
fn render(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
) -> Result<()> {
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = Rc::new(FocusBuilder::rebuild_for(app, Some(Rc::unwrap_or_clone(old_focus))));
    if app.focus.focused().is_none() {
        main_view.restore_focus(app);
    }
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => {
            app.status = None;
            main_view.handle_key_events(app, key_event)
        }
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        // A resize is redrawn by the loop; the other events carry nothing
        // the components care about.
        _ => Vec::new(),
    }
}

fn process_effects(app: &mut App, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::ReplaceProvider(provider) => {
                app.providers.replace_selected(*provider);
            }
            Effect::RemoveProviderRequested => {
                app.open_modal(Modal::ConfirmRemove);
            }
            Effect::RemoveProviderConfirmed => {
                if let Some(removed) = app.providers.remove_selected() {
                    tracing::info!(label = %removed.label, "removed provider");
                    app.status = Some("Provider removed".to_string());
                }
                app.sync_editor();
            }
            Effect::AddProvider(provider_type) => {
                app.providers.push_and_select(Provider::new(provider_type));
                app.sync_editor();
                let flag = app.editor.f_label.clone();
                app.focus.focus(&flag);
            }
            Effect::SaveRequested => app.save(),
            Effect::ShowModal(modal) => app.open_modal(modal),
            Effect::CloseModal => app.close_modal(),
            Effect::Quit => app.should_quit = true,
        }
    }
}

/// Entry point for the TUI runtime: terminal setup, event loop, teardown.
pub fn run_app(store: SettingsStore) -> Result<()> {
    let input_receiver = spawn_input_thread();
    let mut main_view = MainView::default();
    let mut app = App::new(store);
    let mut terminal = setup_terminal()?;

    render(&mut terminal, &mut app, &mut main_view)?;

    loop {
        match input_receiver.recv_timeout(Duration::from_millis(250)) {
            Ok(event) => {
                if let Event::Key(key_event) = &event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                let effects = handle_input_event(&mut app, &mut main_view, event);
                process_effects(&mut app, effects);
                if app.should_quit {
                    break;
                }
                render(&mut terminal, &mut app, &mut main_view)?;
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}
