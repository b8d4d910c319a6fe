//! Simulation context
//!
//! All mutable game state in one struct. The frame driver owns it and passes
//! it by reference to `simulation::step` and `renderer::render`.

use std::time::Duration;
use crate::world::Level;
use super::camera::Camera;
use super::components::{Bullet, Coin, Platform, Player};
use super::event::{EventQueue, GameEvent};

pub struct World {
    pub player: Player,
    pub camera: Camera,
    /// Static layout (world space)
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    /// Live projectiles (world space)
    pub bullets: Vec<Bullet>,
    pub score: u32,
    /// Time left before the next shot is allowed
    pub shoot_cooldown: Duration,
    /// Parallax background offset derived from the camera during the last step
    pub background_x: f32,
    /// Events produced by the last step(s), drained by the frame driver
    pub events: EventQueue<GameEvent>,
}

impl World {
    pub fn from_level(level: &Level) -> Self {
        Self {
            player: Player::new(level.player),
            camera: Camera::new(),
            platforms: level.platforms.iter().copied().map(Platform::new).collect(),
            coins: level.coins.iter().copied().map(Coin::new).collect(),
            bullets: Vec::new(),
            score: 0,
            shoot_cooldown: Duration::ZERO,
            background_x: 0.0,
            events: EventQueue::new(),
        }
    }

    /// Coins not yet collected
    pub fn coins_remaining(&self) -> usize {
        self.coins.iter().filter(|c| !c.is_collected()).count()
    }
}
