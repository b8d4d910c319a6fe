//! Dead-zone side-scrolling camera
//!
//! The camera is a single horizontal offset. Every world -> screen conversion
//! (collision, bullet culling, drawing) goes through `Camera::to_screen` so the
//! call sites cannot disagree.

use crate::config::CameraConfig;
use super::components::Player;
use super::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    /// World x shown at the left edge of the canvas
    pub x: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// World rectangle -> screen rectangle
    pub fn to_screen(&self, world: Rect) -> Rect {
        world.offset_x(-self.x)
    }

    /// Screen x -> world x
    pub fn to_world_x(&self, screen_x: f32) -> f32 {
        screen_x + self.x
    }

    /// Is a world x inside the visible window `[x, x + canvas_width]`?
    pub fn is_visible_x(&self, world_x: f32, canvas_width: f32) -> bool {
        world_x >= self.x && world_x <= self.x + canvas_width
    }

    /// Scroll with the player once it leaves the dead zone.
    ///
    /// Past the right edge the camera moves by the player's horizontal velocity
    /// and the player is pinned to the edge. Past the left edge the same happens,
    /// but only while the camera is scrolled (x > 0), and never below zero.
    pub fn track(&mut self, player: &mut Player, config: &CameraConfig, canvas_width: f32) {
        let right_edge = canvas_width * config.dead_zone_right;
        let left_edge = canvas_width * config.dead_zone_left;

        if player.x > right_edge {
            self.x += player.velocity_x;
            player.x = right_edge;
        } else if player.x < left_edge && self.x > 0.0 {
            self.x = (self.x + player.velocity_x).max(0.0);
            player.x = left_edge;
        }
    }

    /// Background offset for the parallax layer, in `(-canvas_width, canvas_width)`.
    /// The remainder keeps the sign of the dividend, so the offset is never positive
    /// while the camera is at or right of the origin.
    pub fn parallax_offset(&self, factor: f32, canvas_width: f32) -> f32 {
        -(self.x * factor) % canvas_width
    }
}
