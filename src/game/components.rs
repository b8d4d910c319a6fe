//! Game Components
//!
//! Plain data for everything the simulation moves or tests against.
//! Behavior lives in `simulation`; drawing lives in `renderer`.

use super::rect::Rect;

// =============================================================================
// Player
// =============================================================================

/// Horizontal facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, +1.0 for right
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The player character.
///
/// Position is in screen space: the camera scrolls the world underneath the
/// player, so `x` stays within the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub facing: Facing,
    /// Set by a jump, cleared by landing or touching the bottom of the canvas
    pub jumping: bool,
    /// A platform landing was resolved during the last step
    pub on_ground: bool,
}

impl Player {
    pub fn new(spawn: Rect) -> Self {
        Self {
            x: spawn.x,
            y: spawn.y,
            width: spawn.w,
            height: spawn.h,
            velocity_x: 0.0,
            velocity_y: 0.0,
            facing: Facing::Right,
            jumping: false,
            on_ground: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

// =============================================================================
// Level pieces
// =============================================================================

/// Solid, immutable platform (world space)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }
}

/// Collectible coin (world space). `collected` only ever goes false -> true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub rect: Rect,
    collected: bool,
}

impl Coin {
    pub fn new(rect: Rect) -> Self {
        Self { rect, collected: false }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Mark as collected. Returns true only on the first call.
    pub fn collect(&mut self) -> bool {
        let first = !self.collected;
        self.collected = true;
        first
    }
}

// =============================================================================
// Projectiles
// =============================================================================

/// Projectile fired by the player (world space)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
    pub direction: Facing,
    /// Pixels per frame
    pub speed: f32,
}

impl Bullet {
    /// Advance one frame along its direction
    pub fn advance(&mut self) {
        self.rect.x += self.direction.sign() * self.speed;
    }
}
