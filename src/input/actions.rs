//! Game action definitions and the fixed keyboard map

use macroquad::input::KeyCode;

/// All logical actions the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,   // Left arrow
    MoveRight,  // Right arrow
    Jump,       // Up arrow / Space
    Shoot,      // Z
}

/// Map a physical key to its action. Unrecognized keys map to `None`.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Up | KeyCode::Space => Some(Action::Jump),
        KeyCode::Z => Some(Action::Shoot),
        _ => None,
    }
}
