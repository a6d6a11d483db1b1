//! Event handling for the TUI
//!
//! Maps key events to actions on [`AppState`], per mode.

use super::state::{AppState, Mode};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::MAIN_SEPARATOR;
use std::time::Duration;

/// Columns moved per Shift+Left/Right
const HORIZONTAL_STEP: usize = 8;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the application
    Quit,
    /// No action taken
    Ignored,
}

/// Handle events in normal mode
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _)
        | (KeyCode::Char('q' | 'c'), KeyModifiers::CONTROL) => EventResult::Quit,

        // Buttons
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => {
            state.open_file_picker();
            EventResult::Continue
        }
        (KeyCode::Enter, _) => {
            state.run_search();
            EventResult::Continue
        }
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        // Panes
        (KeyCode::Tab | KeyCode::BackTab, _) => {
            state.toggle_focus();
            EventResult::Continue
        }
        (KeyCode::Up, _) => {
            state.scroll_up(1);
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.scroll_down(1);
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Left, KeyModifiers::SHIFT) => {
            state.scroll_left(HORIZONTAL_STEP);
            EventResult::Continue
        }
        (KeyCode::Right, KeyModifiers::SHIFT) => {
            state.scroll_right(HORIZONTAL_STEP);
            EventResult::Continue
        }
        (KeyCode::Home, KeyModifiers::CONTROL) => {
            state.scroll_to_top();
            EventResult::Continue
        }
        (KeyCode::End, KeyModifiers::CONTROL) => {
            state.scroll_to_bottom();
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query.clear();
            EventResult::Continue
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            state.query.delete_word_backwards();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query.insert_char(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if state.query.backspace() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Delete, _) => {
            if state.query.delete() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Left, _) => {
            state.query.cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query.cursor_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.query.cursor_home();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.query.cursor_end();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events while the file picker is open
fn handle_pick_file_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    if matches!(key.code, KeyCode::Esc)
        || matches!(
            (key.code, key.modifiers),
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
        )
    {
        state.cancel_file_picker();
        return EventResult::Continue;
    }

    let Some(prompt) = state.path_prompt.as_mut() else {
        state.mode = Mode::Normal;
        return EventResult::Ignored;
    };

    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => {
            let Some(path) = prompt.selected_path() else {
                return EventResult::Ignored;
            };
            if path.is_dir() {
                // Descend instead of trying to read a directory
                let mut text = prompt.input.text().to_string();
                if !text.ends_with(std::path::is_separator) {
                    text.push(MAIN_SEPARATOR);
                }
                prompt.input.set_text(text);
                prompt.update_suggestions();
            } else {
                state.cancel_file_picker();
                state.load_file(&path);
            }
        }
        (KeyCode::Tab, _) => prompt.accept_suggestion(),
        (KeyCode::Up | KeyCode::BackTab, _) => prompt.suggestion_up(),
        (KeyCode::Down, _) => prompt.suggestion_down(),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => prompt.clear(),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => prompt.delete_word_backwards(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => prompt.insert_char(c),
        (KeyCode::Backspace, _) => prompt.backspace(),
        (KeyCode::Delete, _) => prompt.delete(),
        (KeyCode::Left, _) => prompt.input.cursor_left(),
        (KeyCode::Right, _) => prompt.input.cursor_right(),
        (KeyCode::Home, _) => prompt.input.cursor_home(),
        (KeyCode::End, _) => prompt.input.cursor_end(),
        _ => return EventResult::Ignored,
    }

    EventResult::Continue
}

/// Handle events while a message dialog is open
fn handle_message_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            state.dismiss_message();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState, _key: KeyEvent) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Dispatch a key event according to the current mode
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match state.mode {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::Help => handle_help_mode(state, key),
        Mode::PickFile => handle_pick_file_mode(state, key),
        Mode::Message => handle_message_mode(state, key),
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        // Windows reports releases too
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
