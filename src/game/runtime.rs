//! Game Runtime
//!
//! Owns the simulation context and the "started" flag, and paces frames.
//! The game begins on the title screen; `start` moves it to play exactly once.
//! There is no pause, restart or stop.

use std::time::Duration;
use serde::{Serialize, Deserialize};
use crate::config::GameConfig;
use crate::input::InputFlags;
use crate::world::Level;
use super::event::GameEvent;
use super::simulation;
use super::world::World;

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    /// 30 FPS (half speed: physics is per frame)
    Fps30,
    /// 60 FPS (the speed the movement constants are tuned for)
    #[default]
    Fps60,
    /// Unlocked (as fast as possible)
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }
}

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting on the title screen
    Title,
    /// Frame loop running
    Playing,
}

pub struct GameRuntime {
    pub config: GameConfig,
    pub world: World,
    phase: Phase,
}

impl GameRuntime {
    pub fn new(config: GameConfig, level: &Level) -> Self {
        Self {
            config,
            world: World::from_level(level),
            phase: Phase::Title,
        }
    }

    pub fn is_started(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Leave the title screen. Returns false if the game was already started.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Playing {
            return false;
        }
        self.phase = Phase::Playing;
        log::info!("Game started");
        true
    }

    /// Advance one frame. Does nothing until the game has been started.
    pub fn update(&mut self, input: &InputFlags, elapsed: Duration) {
        if self.phase != Phase::Playing {
            return;
        }
        simulation::step(&mut self.world, input, &self.config, elapsed);
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.world.events.drain()
    }
}

/// Wait out the rest of the frame according to the FPS limit.
/// `frame_start` is macroquad's `get_time()` sampled at the start of the frame.
pub fn limit_frame_rate(fps_limit: FpsLimit, frame_start: f64) {
    use macroquad::prelude::get_time;

    let Some(target_frame_time) = fps_limit.frame_time() else { return };
    let elapsed = get_time() - frame_start;
    if target_frame_time - elapsed <= 0.0 {
        return;
    }

    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: just spin-wait (no thread::sleep available)
    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < target_frame_time {
            // Busy wait - browser will handle frame pacing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_nothing_moves_before_start() {
        let mut runtime = GameRuntime::new(GameConfig::default(), &Level::default());
        assert!(!runtime.is_started());

        let input = InputFlags { right: true, shoot: true, ..Default::default() };
        for _ in 0..10 {
            runtime.update(&input, FRAME);
        }
        assert_eq!(runtime.world.player.y, 200.0);
        assert!(runtime.world.bullets.is_empty());
    }

    #[test]
    fn test_start_happens_once() {
        let mut runtime = GameRuntime::new(GameConfig::default(), &Level::default());
        assert!(runtime.start());
        assert!(runtime.is_started());
        assert!(!runtime.start());
        assert!(runtime.is_started());
    }

    #[test]
    fn test_update_after_start_steps_and_emits() {
        let mut runtime = GameRuntime::new(GameConfig::default(), &Level::default());
        runtime.start();
        let input = InputFlags { shoot: true, ..Default::default() };
        runtime.update(&input, FRAME);
        assert_eq!(runtime.world.player.y, 200.5);

        let events: Vec<_> = runtime.drain_events().collect();
        assert_eq!(events, vec![GameEvent::ShotFired]);
        assert_eq!(runtime.drain_events().count(), 0);
    }

    #[test]
    fn test_fps_limit_frame_time() {
        assert_eq!(FpsLimit::default(), FpsLimit::Fps60);
        assert_eq!(FpsLimit::Unlocked.frame_time(), None);
        assert!((FpsLimit::Fps30.frame_time().unwrap() - 1.0 / 30.0).abs() < 1e-12);
    }
}
