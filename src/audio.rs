//! Sound effects
//!
//! Plays the coin and gun sounds in response to the events a simulation step
//! produced. Sounds fire and forget; a sound that failed to load is silent.

use macroquad::audio::{load_sound, play_sound_once, Sound};
use crate::config::AssetConfig;
use crate::game::GameEvent;

/// Sound effect for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Coin,
    Gun,
}

impl Cue {
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::ShotFired => Cue::Gun,
            GameEvent::CoinCollected { .. } => Cue::Coin,
        }
    }
}

pub struct SoundBank {
    coin: Option<Sound>,
    gun: Option<Sound>,
}

impl SoundBank {
    pub async fn load(config: &AssetConfig) -> Self {
        Self {
            coin: load_effect(&config.coin_sound).await,
            gun: load_effect(&config.gun_sound).await,
        }
    }

    pub fn play(&self, event: &GameEvent) {
        let sound = match Cue::for_event(event) {
            Cue::Coin => self.coin.as_ref(),
            Cue::Gun => self.gun.as_ref(),
        };
        if let Some(sound) = sound {
            play_sound_once(sound);
        }
    }
}

async fn load_effect(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => {
            log::info!("Loaded sound {}", path);
            Some(sound)
        }
        Err(e) => {
            log::warn!("Failed to load sound {}: {}", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues() {
        assert_eq!(Cue::for_event(&GameEvent::ShotFired), Cue::Gun);
        assert_eq!(Cue::for_event(&GameEvent::CoinCollected { score: 10 }), Cue::Coin);
    }
}
