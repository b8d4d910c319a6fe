//! Game Renderer
//!
//! Pure read of the post-step world. Everything is drawn back to front in a
//! fixed order, which is also the z-order:
//! background (two tiles) -> platforms -> coins -> player -> bullets -> score.
//!
//! Drawing goes through the small `Canvas` trait so the same code drives the
//! macroquad window and the recording canvas used in tests.

use macroquad::prelude::{
    draw_circle, draw_rectangle, draw_text, draw_texture_ex, vec2, Color, DrawTextureParams, BLACK, WHITE,
};
use crate::assets::Assets;
use crate::config::GameConfig;
use super::components::Facing;
use super::rect::Rect;
use super::world::World;

/// Platform fill (#8B4513)
pub const PLATFORM_COLOR: Color = Color::new(139.0 / 255.0, 69.0 / 255.0, 19.0 / 255.0, 1.0);
/// Coin and bullet fill (#FFD700)
pub const GOLD_COLOR: Color = Color::new(1.0, 215.0 / 255.0, 0.0, 1.0);
/// Score text
pub const SCORE_COLOR: Color = BLACK;
pub const SCORE_FONT_SIZE: f32 = 20.0;
pub const SCORE_POSITION: (f32, f32) = (10.0, 30.0);

/// Images the renderer knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageId {
    Background,
    Sprite,
}

/// Primitive drawing operations of the 2D surface
pub trait Canvas {
    /// Draw an image stretched to `dest`, optionally mirrored horizontally
    fn draw_image(&mut self, image: ImageId, dest: Rect, flip_x: bool);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color);
    /// `y` is the text baseline
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
}

/// Draw one frame of the world
pub fn render(world: &World, config: &GameConfig, canvas: &mut impl Canvas) {
    let width = config.canvas.width;
    let height = config.canvas.height;
    let camera = world.camera;

    // Two background tiles for seamless wraparound
    let bg_x = world.background_x;
    canvas.draw_image(ImageId::Background, Rect::new(bg_x, 0.0, width, height), false);
    canvas.draw_image(ImageId::Background, Rect::new(bg_x + width, 0.0, width, height), false);

    for platform in &world.platforms {
        canvas.fill_rect(camera.to_screen(platform.rect), PLATFORM_COLOR);
    }

    for coin in world.coins.iter().filter(|c| !c.is_collected()) {
        let r = camera.to_screen(coin.rect);
        canvas.fill_circle(r.center_x(), r.center_y(), r.w / 2.0, GOLD_COLOR);
    }

    // Player is already in screen space
    let player = &world.player;
    canvas.draw_image(ImageId::Sprite, player.rect(), player.facing == Facing::Left);

    for bullet in &world.bullets {
        canvas.fill_rect(camera.to_screen(bullet.rect), GOLD_COLOR);
    }

    let (text_x, text_y) = SCORE_POSITION;
    canvas.draw_text(&format!("Score: {}", world.score), text_x, text_y, SCORE_FONT_SIZE, SCORE_COLOR);
}

/// Canvas backed by macroquad's immediate-mode drawing.
/// Images that failed to load are skipped.
pub struct MacroquadCanvas<'a> {
    assets: &'a Assets,
}

impl<'a> MacroquadCanvas<'a> {
    pub fn new(assets: &'a Assets) -> Self {
        Self { assets }
    }
}

impl Canvas for MacroquadCanvas<'_> {
    fn draw_image(&mut self, image: ImageId, dest: Rect, flip_x: bool) {
        let texture = match image {
            ImageId::Background => self.assets.background.as_ref(),
            ImageId::Sprite => self.assets.sprite.as_ref(),
        };
        let Some(texture) = texture else { return };

        // Mirroring is a per-draw parameter, so nothing leaks into later draws
        draw_texture_ex(
            texture,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                flip_x,
                ..Default::default()
            },
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn fill_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color) {
        draw_circle(center_x, center_y, radius, color);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        draw_text(text, x, y, font_size, color);
    }
}
