//! Image assets
//!
//! The sprite and background are loaded once before the frame loop starts.
//! A missing image is logged and skipped at draw time; the game still runs.

use macroquad::prelude::{load_texture, FilterMode, Texture2D};
use crate::config::AssetConfig;

pub struct Assets {
    pub sprite: Option<Texture2D>,
    pub background: Option<Texture2D>,
}

impl Assets {
    pub async fn load(config: &AssetConfig) -> Self {
        Self {
            sprite: load_image(&config.sprite, FilterMode::Nearest).await,
            background: load_image(&config.background, FilterMode::Linear).await,
        }
    }
}

async fn load_image(path: &str, filter: FilterMode) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(tex) => {
            tex.set_filter(filter);
            log::info!("Loaded image {}", path);
            Some(tex)
        }
        Err(e) => {
            log::warn!("Failed to load image {}: {}", path, e);
            None
        }
    }
}
