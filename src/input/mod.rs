//! Keyboard input
//!
//! Raw key edges are mapped to four logical actions and folded into a set of
//! held flags. The simulation samples the flags each frame; it never clears them.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
