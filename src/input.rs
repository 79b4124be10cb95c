//! Keyboard to game input mapping.

use crate::game::GameInput;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a game input. Key releases map to `None`.
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let input = match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::Action,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        _ => GameInput::Other,
    };
    Some(input)
}

/// Map any terminal event; only key events produce input.
pub fn map_event(event: &Event) -> Option<GameInput> {
    match event {
        Event::Key(key) => map_key(*key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn test_action_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Enter] {
            assert_eq!(map_key(press(code)), Some(GameInput::Action));
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(GameInput::Quit));
        let ctrl_c = key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(map_key(ctrl_c), Some(GameInput::Quit));
    }

    #[test]
    fn test_other_keys() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), Some(GameInput::Other));
        assert_eq!(map_key(press(KeyCode::Left)), Some(GameInput::Other));
    }

    #[test]
    fn test_release_is_ignored() {
        let release = key(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(map_key(release), None);
        assert_eq!(map_event(&Event::FocusLost), None);
        assert_eq!(map_event(&Event::Key(press(KeyCode::Esc))), Some(GameInput::Quit));
    }
}
