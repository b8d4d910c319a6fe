//! World module - level layout
//!
//! Static level description loaded from RON: where the player spawns,
//! which platforms exist and where the coins sit. All rectangles are in
//! world coordinates; the game converts them to screen space through the camera.

mod level;

pub use level::*;
