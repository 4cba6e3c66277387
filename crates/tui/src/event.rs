//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use jot_protocol::Action;

use crate::message::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Key bindings shown in the help overlay, in display order.
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("j / ↓", "Select next"),
    ("k / ↑", "Select previous"),
    ("Esc", "Clear selection"),
    ("Space", "Check / uncheck"),
    ("Ctrl+K", "Move item up"),
    ("Ctrl+J", "Move item down"),
    ("Ctrl+D", "Delete item"),
    ("e", "Edit item"),
    ("n", "New item"),
    ("o", "Open file"),
    ("r", "Reload file"),
    ("h / ?", "Show help"),
    ("q", "Quit"),
];

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to an application message.
///
/// Only key presses are handled; releases and repeats reported by some
/// terminals are ignored. `editing` selects the editor key map.
#[must_use]
pub fn event_to_message(event: &Event, editing: bool) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if editing {
                key_to_editor_message(*key)
            } else {
                key_to_message(*key)
            }
        }
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` or `q` | Quit |
/// | `j` or `Down` | Select next |
/// | `k` or `Up` | Select previous |
/// | `Esc` | Clear selection |
/// | `Space` | Check / uncheck |
/// | `Ctrl+K` | Move item up |
/// | `Ctrl+J` | Move item down |
/// | `Ctrl+D` | Delete item |
/// | `e` | Edit item |
/// | `n` | New item |
/// | `o` | Open file |
/// | `r` | Reload file |
/// | `h` or `?` | Show help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        // In raw mode Ctrl+J arrives as `j` with CONTROL, not as Enter
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            KeyCode::Char('k') => Some(Message::Action(Action::Promote)),
            KeyCode::Char('j') => Some(Message::Action(Action::Demote)),
            KeyCode::Char('d') => Some(Message::Action(Action::Delete)),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,
        KeyCode::Char('k') | KeyCode::Up => Action::SelectPrev,
        KeyCode::Esc => Action::Unselect,
        KeyCode::Char(' ') => Action::ToggleDone,
        KeyCode::Char('e') => Action::Edit,
        KeyCode::Char('o') => Action::OpenExternal,
        KeyCode::Char('h' | '?') => Action::ShowHelp,

        KeyCode::Char('n') => return Some(Message::NewItem),
        KeyCode::Char('r') => return Some(Message::Refresh),
        KeyCode::Char('q') => return Some(Message::Quit),
        _ => return None,
    };
    Some(Message::Action(action))
}

/// Converts a key event to an editor message.
///
/// Used while the item editor is open; every printable character is text.
///
/// # Key Bindings (Editor)
///
/// | Key | Action |
/// |-----|--------|
/// | `Enter` | Confirm |
/// | `Esc` | Cancel |
/// | `Backspace` | Delete previous character |
/// | `Left` / `Right` | Move cursor |
/// | `Ctrl+C` | Quit |
/// | Any char | Input |
#[must_use]
pub fn key_to_editor_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Message::EditorConfirm),
        KeyCode::Esc => Some(Message::EditorCancel),
        KeyCode::Backspace => Some(Message::EditorBackspace),
        KeyCode::Left => Some(Message::EditorLeft),
        KeyCode::Right => Some(Message::EditorRight),
        KeyCode::Char(ch) => Some(Message::EditorInput { ch }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn action(action: Action) -> Option<Message> {
        Some(Message::Action(action))
    }

    #[test]
    fn quit_keys() {
        assert_eq!(key_to_message(make_ctrl('c')), Some(Message::Quit));
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), Some(Message::Quit));
    }

    #[test]
    fn selection_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('j'))), action(Action::SelectNext));
        assert_eq!(key_to_message(make_key(KeyCode::Down)), action(Action::SelectNext));
        assert_eq!(key_to_message(make_key(KeyCode::Char('k'))), action(Action::SelectPrev));
        assert_eq!(key_to_message(make_key(KeyCode::Up)), action(Action::SelectPrev));
        assert_eq!(key_to_message(make_key(KeyCode::Esc)), action(Action::Unselect));
    }

    #[test]
    fn mutation_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Char(' '))), action(Action::ToggleDone));
        assert_eq!(key_to_message(make_ctrl('k')), action(Action::Promote));
        assert_eq!(key_to_message(make_ctrl('j')), action(Action::Demote));
        assert_eq!(key_to_message(make_ctrl('d')), action(Action::Delete));
    }

    #[test]
    fn delegated_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('e'))), action(Action::Edit));
        assert_eq!(key_to_message(make_key(KeyCode::Char('o'))), action(Action::OpenExternal));
        assert_eq!(key_to_message(make_key(KeyCode::Char('h'))), action(Action::ShowHelp));
        assert_eq!(
            key_to_message(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            action(Action::ShowHelp)
        );
    }

    #[test]
    fn host_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('n'))), Some(Message::NewItem));
        assert_eq!(key_to_message(make_key(KeyCode::Char('r'))), Some(Message::Refresh));
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
        assert_eq!(key_to_message(make_ctrl('x')), None);
    }

    #[test]
    fn editor_keys() {
        assert_eq!(
            key_to_editor_message(make_key(KeyCode::Char('q'))),
            Some(Message::EditorInput { ch: 'q' })
        );
        assert_eq!(
            key_to_editor_message(make_key(KeyCode::Char(' '))),
            Some(Message::EditorInput { ch: ' ' })
        );
        assert_eq!(
            key_to_editor_message(make_key(KeyCode::Enter)),
            Some(Message::EditorConfirm)
        );
        assert_eq!(
            key_to_editor_message(make_key(KeyCode::Esc)),
            Some(Message::EditorCancel)
        );
        assert_eq!(
            key_to_editor_message(make_key(KeyCode::Backspace)),
            Some(Message::EditorBackspace)
        );
        assert_eq!(
            key_to_editor_message(make_key(KeyCode::Left)),
            Some(Message::EditorLeft)
        );
        assert_eq!(
            key_to_editor_message(make_key(KeyCode::Right)),
            Some(Message::EditorRight)
        );
    }

    #[test]
    fn editor_ctrl_c_quits() {
        assert_eq!(key_to_editor_message(make_ctrl('c')), Some(Message::Quit));
        assert_eq!(key_to_editor_message(make_ctrl('k')), None);
    }

    #[test]
    fn event_to_message_picks_key_map() {
        let event = Event::Key(make_key(KeyCode::Char('n')));
        assert_eq!(event_to_message(&event, false), Some(Message::NewItem));
        assert_eq!(
            event_to_message(&event, true),
            Some(Message::EditorInput { ch: 'n' })
        );
    }

    #[test]
    fn event_to_message_ignores_releases_and_resizes() {
        let mut release = make_key(KeyCode::Char('j'));
        release.kind = KeyEventKind::Release;
        assert_eq!(event_to_message(&Event::Key(release), false), None);
        assert_eq!(event_to_message(&Event::Resize(80, 24), false), None);
    }

    #[test]
    fn key_bindings_cover_every_action() {
        for act in Action::ALL {
            assert!(
                KEY_BINDINGS.iter().any(|(_, desc)| *desc == act.description()),
                "no binding listed for {act:?}"
            );
        }
    }
}
