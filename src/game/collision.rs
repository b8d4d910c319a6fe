//! Collision System
//!
//! AABB collision of the player against platforms. Each overlapping platform
//! is resolved on its own, in level order, by exactly one of:
//! 1. Landing on top (falling, bottom was above the platform before the move)
//! 2. Bumping the underside (rising, top at or below the platform bottom)
//! 3. Side push-out opposite to the horizontal velocity
//!
//! The underside test looks at the top edge after the move, so it cannot hold
//! while the two rectangles overlap: a rising player passes up through a
//! platform and can land on it from above. Platforms are one-way in practice.
//!
//! There is no combined contact solver: fast movement can tunnel through thin
//! platforms and simultaneous overlaps resolve in order.

use super::components::Player;
use super::rect::Rect;

/// How an overlap with one platform was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Feet snapped to the platform top
    Landed,
    /// Head snapped to the platform bottom (unreachable while overlapping)
    Ceiling,
    /// Moving right into the platform, pushed back to its left side
    WallOnRight,
    /// Moving left into the platform, pushed back to its right side
    WallOnLeft,
    /// Overlapping with no horizontal motion to push against; left as is
    Embedded,
}

/// Resolve the player against one platform given in screen space.
/// Returns `None` when they do not overlap.
pub fn resolve_platform(player: &mut Player, platform: Rect) -> Option<Contact> {
    if !player.rect().overlaps(&platform) {
        return None;
    }

    let vy = player.velocity_y;
    let vx = player.velocity_x;

    let contact = if vy > 0.0 && player.bottom() - vy <= platform.y {
        player.y = platform.y - player.height;
        player.velocity_y = 0.0;
        player.jumping = false;
        player.on_ground = true;
        Contact::Landed
    } else if vy < 0.0 && player.y >= platform.bottom() {
        player.y = platform.bottom();
        player.velocity_y = 0.0;
        Contact::Ceiling
    } else if vx > 0.0 {
        player.x = platform.x - player.width;
        Contact::WallOnRight
    } else if vx < 0.0 {
        player.x = platform.right();
        Contact::WallOnLeft
    } else {
        Contact::Embedded
    };

    Some(contact)
}
