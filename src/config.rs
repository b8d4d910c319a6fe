//! Game configuration
//!
//! Every tunable number of the game lives here: canvas size, per-frame
//! physics constants, weapon timing, camera dead-zone and parallax, scoring
//! and asset paths. Stored as RON at `assets/config.ron`; every section and
//! field is optional and falls back to the defaults below.

use std::time::Duration;
use serde::{Serialize, Deserialize};
use crate::game::FpsLimit;

/// Default location of the configuration file (relative to the working directory / web root)
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    /// The file could not be fetched (macroquad file loader, also used on WASM)
    FetchError(String),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::FetchError(e) => write!(f, "Fetch error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas: CanvasConfig,
    pub physics: PhysicsConfig,
    pub weapon: WeaponConfig,
    pub camera: CameraConfig,
    pub scoring: ScoringConfig,
    pub assets: AssetConfig,
    /// Frame pacing. Physics is integrated per frame, so this also sets game speed.
    pub fps_limit: FpsLimit,
}

/// Drawing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            title: "Sidescroller".to_string(),
            width: 800.0,
            height: 400.0,
        }
    }
}

/// Per-frame movement constants (units are pixels and pixels/frame)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to vertical velocity every frame (positive = down)
    pub gravity: f32,
    /// Horizontal speed while a direction key is held
    pub move_speed: f32,
    /// Vertical velocity set on jump (negative = up)
    pub jump_force: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            move_speed: 5.0,
            jump_force: -12.0,
        }
    }
}

/// Projectile settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    /// Pixels per frame
    pub bullet_speed: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    /// Minimum real time between two shots
    pub shoot_cooldown_ms: u64,
}

impl WeaponConfig {
    pub fn shoot_cooldown(&self) -> Duration {
        Duration::from_millis(self.shoot_cooldown_ms)
    }
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            bullet_speed: 10.0,
            bullet_width: 10.0,
            bullet_height: 4.0,
            shoot_cooldown_ms: 250,
        }
    }
}

/// Dead-zone camera and background parallax
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Screen fraction below which the camera scrolls back (only while camera x > 0)
    pub dead_zone_left: f32,
    /// Screen fraction above which the camera scrolls forward
    pub dead_zone_right: f32,
    /// Background scroll per unit of camera scroll
    pub parallax_factor: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            dead_zone_left: 0.4,
            dead_zone_right: 0.6,
            parallax_factor: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points awarded per collected coin
    pub coin_reward: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { coin_reward: 10 }
    }
}

/// Asset paths. Any of them may be missing at runtime; the game then skips that draw/sound.
/// Sounds are WAV: macroquad's decoder handles WAV and Ogg on every target, not MP3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub sprite: String,
    pub background: String,
    pub coin_sound: String,
    pub gun_sound: String,
    pub level: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            sprite: "assets/sprite.png".to_string(),
            background: "assets/background_image.png".to_string(),
            coin_sound: "assets/coin.wav".to_string(),
            gun_sound: "assets/gun.wav".to_string(),
            level: "assets/levels/level1.ron".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a RON string
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file on disk (native only: used before the window exists)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_ron_str(&contents)
    }

    /// Load from disk natively, or over HTTP relative to the page on WASM
    pub async fn load(path: &str) -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::load_file(path)
        }
        #[cfg(target_arch = "wasm32")]
        {
            let contents = macroquad::file::load_string(path)
                .await
                .map_err(|e| ConfigError::FetchError(e.to_string()))?;
            Self::from_ron_str(&contents)
        }
    }

    /// Load, falling back to defaults on any failure
    pub async fn load_or_default(path: &str) -> Self {
        match Self::load(path).await {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::warn!("Using default config ({}: {})", path, e);
                Self::default()
            }
        }
    }

    /// Check value ranges; rejects NaN/Inf and impossible geometry
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("canvas.width", self.canvas.width),
            ("canvas.height", self.canvas.height),
            ("physics.gravity", self.physics.gravity),
            ("physics.move_speed", self.physics.move_speed),
            ("physics.jump_force", self.physics.jump_force),
            ("weapon.bullet_speed", self.weapon.bullet_speed),
            ("weapon.bullet_width", self.weapon.bullet_width),
            ("weapon.bullet_height", self.weapon.bullet_height),
            ("camera.dead_zone_left", self.camera.dead_zone_left),
            ("camera.dead_zone_right", self.camera.dead_zone_right),
            ("camera.parallax_factor", self.camera.parallax_factor),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!("{} is not finite ({})", name, value)));
            }
        }

        if self.canvas.width <= 0.0 || self.canvas.height <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "canvas must have a positive size ({}x{})",
                self.canvas.width, self.canvas.height
            )));
        }
        if self.weapon.bullet_width <= 0.0 || self.weapon.bullet_height <= 0.0 {
            return Err(ConfigError::ValidationError("bullet size must be positive".to_string()));
        }
        let (left, right) = (self.camera.dead_zone_left, self.camera.dead_zone_right);
        if !(0.0..=1.0).contains(&left) || !(0.0..=1.0).contains(&right) || left > right {
            return Err(ConfigError::ValidationError(format!(
                "camera dead zone must satisfy 0 <= left <= right <= 1 (got {}..{})",
                left, right
            )));
        }
        Ok(())
    }
}
