//! Level loading
//!
//! Uses RON (Rusty Object Notation) for human-readable level files.
//! A level that fails to load is replaced by the built-in layout.

use serde::{Serialize, Deserialize};
use crate::game::Rect;

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum number of platforms in a level
    pub const MAX_PLATFORMS: usize = 1024;
    /// Maximum number of coins in a level
    pub const MAX_COINS: usize = 1024;
    /// Maximum coordinate value (prevents overflow issues)
    pub const MAX_COORD: f32 = 1_000_000.0;
}

/// Static level layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Player spawn position and size (screen space at camera x = 0)
    pub player: Rect,
    /// Solid platforms (world space)
    pub platforms: Vec<Rect>,
    /// Coin pickups (world space)
    pub coins: Vec<Rect>,
}

impl Default for Level {
    /// The built-in layout: a ground strip and floating platforms with a coin above most of them
    fn default() -> Self {
        Self {
            player: Rect::new(50.0, 200.0, 32.0, 32.0),
            platforms: vec![
                Rect::new(0.0, 350.0, 800.0, 20.0), // Ground
                Rect::new(300.0, 250.0, 100.0, 20.0),
                Rect::new(500.0, 200.0, 100.0, 20.0),
                Rect::new(100.0, 150.0, 100.0, 20.0),
                Rect::new(700.0, 150.0, 100.0, 20.0),
                Rect::new(900.0, 200.0, 100.0, 20.0),
                Rect::new(1100.0, 250.0, 100.0, 20.0),
                Rect::new(1300.0, 150.0, 100.0, 20.0),
                Rect::new(1500.0, 200.0, 100.0, 20.0),
            ],
            coins: vec![
                Rect::new(320.0, 220.0, 15.0, 15.0),
                Rect::new(520.0, 170.0, 15.0, 15.0),
                Rect::new(120.0, 120.0, 15.0, 15.0),
                Rect::new(720.0, 120.0, 15.0, 15.0),
                Rect::new(920.0, 170.0, 15.0, 15.0),
                Rect::new(1120.0, 220.0, 15.0, 15.0),
            ],
        }
    }
}

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    IoError(std::io::Error),
    /// The file could not be fetched (macroquad file loader, also used on WASM)
    FetchError(String),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::ParseError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::IoError(e) => write!(f, "IO error: {}", e),
            LevelError::FetchError(e) => write!(f, "Fetch error: {}", e),
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
            LevelError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for LevelError {}

/// Check if a coordinate is valid (not NaN or Inf, within limits)
fn is_valid_coord(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

/// Validate a rectangle: finite coordinates, positive size
fn validate_rect(rect: &Rect, context: &str) -> Result<(), String> {
    if !(is_valid_coord(rect.x) && is_valid_coord(rect.y) && is_valid_coord(rect.w) && is_valid_coord(rect.h)) {
        return Err(format!("{}: invalid coordinates ({}, {}, {}, {})",
            context, rect.x, rect.y, rect.w, rect.h));
    }
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return Err(format!("{}: size must be positive ({}x{})", context, rect.w, rect.h));
    }
    Ok(())
}

/// Validate an entire level
pub fn validate_level(level: &Level) -> Result<(), LevelError> {
    if level.platforms.len() > limits::MAX_PLATFORMS {
        return Err(LevelError::ValidationError(format!(
            "too many platforms ({} > {})", level.platforms.len(), limits::MAX_PLATFORMS
        )));
    }
    if level.coins.len() > limits::MAX_COINS {
        return Err(LevelError::ValidationError(format!(
            "too many coins ({} > {})", level.coins.len(), limits::MAX_COINS
        )));
    }

    validate_rect(&level.player, "player").map_err(LevelError::ValidationError)?;
    for (i, platform) in level.platforms.iter().enumerate() {
        validate_rect(platform, &format!("platforms[{}]", i)).map_err(LevelError::ValidationError)?;
    }
    for (i, coin) in level.coins.iter().enumerate() {
        validate_rect(coin, &format!("coins[{}]", i)).map_err(LevelError::ValidationError)?;
    }

    Ok(())
}

/// Load a level from a RON string (for embedded levels or testing)
pub fn load_level_from_str(s: &str) -> Result<Level, LevelError> {
    let level: Level = ron::from_str(s)?;
    validate_level(&level)?;
    Ok(level)
}

/// Load a level from disk
#[cfg(not(target_arch = "wasm32"))]
pub fn load_level<P: AsRef<std::path::Path>>(path: P) -> Result<Level, LevelError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    load_level_from_str(&contents)
}

/// Load a level from disk natively, or over HTTP relative to the page on WASM
pub async fn fetch_level(path: &str) -> Result<Level, LevelError> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        load_level(path)
    }
    #[cfg(target_arch = "wasm32")]
    {
        let contents = macroquad::file::load_string(path)
            .await
            .map_err(|e| LevelError::FetchError(e.to_string()))?;
        load_level_from_str(&contents)
    }
}

/// Load a level, falling back to the built-in layout on any failure
pub async fn fetch_level_or_default(path: &str) -> Level {
    match fetch_level(path).await {
        Ok(level) => {
            log::info!(
                "Loaded level {} ({} platforms, {} coins)",
                path, level.platforms.len(), level.coins.len()
            );
            level
        }
        Err(e) => {
            log::warn!("Using built-in level ({}: {})", path, e);
            Level::default()
        }
    }
}
