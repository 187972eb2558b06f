//! Event handling and key bindings

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::SYNC_TOGGLE_UNSUPPORTED;

use super::actions::Action;
use super::app::{App, Mode};

/// Apply a terminal event to the state machine, returning the store action
/// to dispatch (if any). Rendering happens after every event regardless.
pub fn handle_event(event: &Event, app: &mut App) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(*key, app),
        // Resize needs nothing beyond the re-render every event gets.
        _ => None,
    }
}

fn handle_key(key: KeyEvent, app: &mut App) -> Option<Action> {
    match app.mode() {
        Mode::Normal => handle_normal_mode(key, app),
        Mode::Create { .. } | Mode::Edit { .. } => handle_input_mode(key, app),
    }
}

fn handle_normal_mode(key: KeyEvent, app: &mut App) -> Option<Action> {
    // Check for Ctrl+C first
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next();
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous();
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('c') => {
            app.start_create();
            None
        }
        KeyCode::Char('e') => {
            app.start_edit();
            None
        }
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('s') => {
            app.set_error(SYNC_TOGGLE_UNSUPPORTED.to_string());
            None
        }
        _ => None,
    }
}

fn handle_input_mode(key: KeyEvent, app: &mut App) -> Option<Action> {
    match key.code {
        KeyCode::Esc => {
            app.cancel_input();
            None
        }
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => {
            app.pop_input();
            None
        }
        KeyCode::Char(c) if !c.is_control() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_input(c);
            None
        }
        _ => None,
    }
}
