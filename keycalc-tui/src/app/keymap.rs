//! Terminal key events to calculator keys

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use libkeycalc::{Key, KeyBindings};

/// Translate a terminal key event; unrecognized keys map to `None`
///
/// Only presses count, so terminals that report releases and repeats do
/// not double-enter digits.
pub fn map_key(event: &KeyEvent, bindings: &KeyBindings) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    match event.code {
        KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
            if c.eq_ignore_ascii_case(&bindings.reset) {
                Some(Key::Reset)
            } else if c.eq_ignore_ascii_case(&bindings.quit) {
                Some(Key::Quit)
            } else {
                None
            }
        }
        KeyCode::Char(_) if event.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Key::from_char(c),
        KeyCode::Backspace => Some(Key::Backspace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use libkeycalc::Operator;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_release_is_ignored() {
        let event = KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(&event, &KeyBindings::default()), None);
    }

    #[test]
    fn test_shifted_operator_symbols() {
        let bindings = KeyBindings::default();
        let plus = press(KeyCode::Char('+'), KeyModifiers::SHIFT);
        let star = press(KeyCode::Char('*'), KeyModifiers::SHIFT);
        assert_eq!(map_key(&plus, &bindings), Some(Key::Operator(Operator::Add)));
        assert_eq!(map_key(&star, &bindings), Some(Key::Operator(Operator::Multiply)));
    }

    #[test]
    fn test_plain_r_and_q_are_not_gestures() {
        let bindings = KeyBindings::default();
        assert_eq!(map_key(&press(KeyCode::Char('r'), KeyModifiers::NONE), &bindings), None);
        assert_eq!(map_key(&press(KeyCode::Char('q'), KeyModifiers::NONE), &bindings), None);
    }

    #[test]
    fn test_alt_digit_is_ignored() {
        let bindings = KeyBindings::default();
        assert_eq!(map_key(&press(KeyCode::Char('1'), KeyModifiers::ALT), &bindings), None);
    }
}
