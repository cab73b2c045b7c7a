use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use pagescroll_core::NavKey;

/// Input action resolved from a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Nav(NavKey),
    None,
}

/// Map a key event to an action.
///
/// Only the four arrow keys are claimed for page navigation; every other key
/// falls through as `None` so unrelated handling is never swallowed.
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Up, KeyModifiers::NONE) => Action::Nav(NavKey::Up),
        (KeyCode::Down, KeyModifiers::NONE) => Action::Nav(NavKey::Down),
        (KeyCode::Left, KeyModifiers::NONE) => Action::Nav(NavKey::Left),
        (KeyCode::Right, KeyModifiers::NONE) => Action::Nav(NavKey::Right),

        _ => Action::None,
    }
}
