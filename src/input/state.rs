//! Input state management
//!
//! Polls macroquad's key-down / key-up edges each frame and keeps the four
//! held flags the simulation reads.

use macroquad::input::{get_keys_pressed, get_keys_released, KeyCode};
use super::{action_for_key, Action};

/// Held state of each logical action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFlags {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub shoot: bool,
}

impl InputFlags {
    /// Set the held state of one action
    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::MoveLeft => self.left = held,
            Action::MoveRight => self.right = held,
            Action::Jump => self.up = held,
            Action::Shoot => self.shoot = held,
        }
    }

    /// Apply a key-down edge. Returns false for keys the game does not use.
    pub fn key_down(&mut self, key: KeyCode) -> bool {
        self.apply(key, true)
    }

    /// Apply a key-up edge. Returns false for keys the game does not use.
    pub fn key_up(&mut self, key: KeyCode) -> bool {
        self.apply(key, false)
    }

    fn apply(&mut self, key: KeyCode, held: bool) -> bool {
        match action_for_key(key) {
            Some(action) => {
                self.set(action, held);
                true
            }
            None => false,
        }
    }
}

/// Keyboard poller owning the current flags
#[derive(Debug, Default)]
pub struct InputState {
    pub flags: InputFlags,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per frame before stepping the simulation.
    /// Key-down edges are applied before key-up edges of the same frame.
    pub fn poll(&mut self) {
        for key in get_keys_pressed() {
            self.flags.key_down(key);
        }
        for key in get_keys_released() {
            self.flags.key_up(key);
        }
    }
}
