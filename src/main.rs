//! Sidescroller: a small 2D platformer
//!
//! Run left and right, jump between platforms, shoot, and collect coins while
//! a dead-zone camera scrolls the level and a parallax background drifts behind.
//! Runs natively and in the browser from the same code.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod audio;
mod config;
mod game;
mod input;
mod landing;
mod world;

use std::time::Duration;
use macroquad::prelude::*;
use assets::Assets;
use audio::SoundBank;
use config::{GameConfig, CONFIG_PATH};
use game::{limit_frame_rate, render, GameRuntime, MacroquadCanvas};
use input::InputState;

fn window_config() -> GameConfig {
    // Window settings are needed before the async runtime exists, so only the
    // native build can read them from disk here
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(config) = GameConfig::load_file(CONFIG_PATH) {
            return config;
        }
    }
    GameConfig::default()
}

fn window_conf() -> Conf {
    let config = window_config();
    Conf {
        window_title: config.canvas.title.clone(),
        window_width: config.canvas.width as i32,
        window_height: config.canvas.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    {
        crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    log::info!("Sidescroller v{}", VERSION);

    let config = GameConfig::load_or_default(CONFIG_PATH).await;
    let level = world::fetch_level_or_default(&config.assets.level).await;
    let assets = Assets::load(&config.assets).await;
    let sounds = SoundBank::load(&config.assets).await;

    let screen = game::Rect::screen(config.canvas.width, config.canvas.height);
    let mut runtime = GameRuntime::new(config, &level);
    let mut input = InputState::new();

    loop {
        let frame_start = get_time();

        input.poll();

        if runtime.is_started() {
            let elapsed = Duration::from_secs_f32(get_frame_time().max(0.0));
            runtime.update(&input.flags, elapsed);

            for event in runtime.drain_events() {
                sounds.play(&event);
            }

            clear_background(WHITE);
            let mut canvas = MacroquadCanvas::new(&assets);
            render(&runtime.world, &runtime.config, &mut canvas);
        } else {
            clear_background(WHITE);
            if landing::draw_title_screen(screen, &runtime.config.canvas.title) {
                runtime.start();
            }
        }

        limit_frame_rate(runtime.config.fps_limit, frame_start);
        next_frame().await
    }
}
