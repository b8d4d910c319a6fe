//! Game Module
//!
//! The side-scroller itself: entity data, the camera, collision, the per-frame
//! simulation step and the renderer.
//!
//! Key concepts:
//! - World: explicit context holding everything the step mutates
//! - Camera: the single world -> screen transform
//! - Event: things that happened during a step, drained by the frame loop
//! - Canvas: the drawing surface the renderer writes to

pub mod rect;
pub mod components;
pub mod camera;
pub mod collision;
pub mod event;
pub mod world;
pub mod simulation;
pub mod runtime;
pub mod renderer;

// Re-export main types
pub use rect::Rect;
pub use event::GameEvent;
pub use runtime::{limit_frame_rate, FpsLimit, GameRuntime};
pub use renderer::{render, MacroquadCanvas};
