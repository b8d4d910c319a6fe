//! Title screen
//!
//! Shown until the player presses Start (mouse click on the button, or Enter).
//! The frame loop keeps drawing this instead of the game until then.

use macroquad::prelude::*;
use crate::game::Rect;
use crate::VERSION;

const BG_COLOR: Color = Color::new(0.53, 0.81, 0.92, 1.0);
const PANEL_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.85);
const TEXT_COLOR: Color = Color::new(0.1, 0.1, 0.12, 1.0);
const MUTED_COLOR: Color = Color::new(0.35, 0.35, 0.4, 1.0);
const BUTTON_COLOR: Color = Color::new(0.55, 0.27, 0.07, 1.0);
const BUTTON_HOVER_COLOR: Color = Color::new(0.68, 0.36, 0.12, 1.0);
const BUTTON_TEXT_COLOR: Color = Color::new(1.0, 0.84, 0.0, 1.0);

const BUTTON_WIDTH: f32 = 160.0;
const BUTTON_HEIGHT: f32 = 48.0;

const HOW_TO_PLAY: &str = "Arrow keys to run, Up or Space to jump, Z to shoot.\nGrab the coins scattered across the platforms.";

/// Wrap text to fit within a given pixel width
fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();

        for word in paragraph.split_whitespace() {
            let test_line = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };

            // Approximate glyph width: measure_text is slow to call per word
            let char_width = font_size * 0.55;
            let test_width = test_line.len() as f32 * char_width;

            if test_width <= max_width || current_line.is_empty() {
                current_line = test_line;
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }

        lines.push(current_line);
    }

    lines
}

/// Start button, centered on the canvas
pub fn start_button(screen: Rect) -> Rect {
    screen.centered(BUTTON_WIDTH, BUTTON_HEIGHT).offset_y(60.0)
}

/// Did the player ask to start this frame?
pub fn start_requested(button: Rect, mouse: (f32, f32), clicked: bool, enter_pressed: bool) -> bool {
    enter_pressed || (clicked && button.contains(mouse.0, mouse.1))
}

/// Draw the title screen and report whether Start was activated
pub fn draw_title_screen(screen: Rect, title: &str) -> bool {
    draw_rectangle(screen.x, screen.y, screen.w, screen.h, BG_COLOR);

    let panel = screen.centered((screen.w - 80.0).min(560.0), 260.0);
    draw_rectangle(panel.x, panel.y, panel.w, panel.h, PANEL_COLOR);

    let padding = 20.0;
    let mut y = panel.y + padding;

    let title_size = 36.0;
    let title_width = measure_text(title, None, title_size as u16, 1.0).width;
    draw_text(title, (panel.center_x() - title_width / 2.0).round(), y + title_size, title_size, TEXT_COLOR);
    y += title_size + 16.0;

    let font_size = 16.0;
    for line in wrap_text(HOW_TO_PLAY, font_size, panel.w - padding * 2.0) {
        draw_text(&line, panel.x + padding, y + font_size, font_size, MUTED_COLOR);
        y += 22.0;
    }

    let version = format!("v{}", VERSION);
    draw_text(&version, panel.x + padding, panel.bottom() - 10.0, 12.0, MUTED_COLOR);

    let button = start_button(screen);
    let mouse = mouse_position();
    let hovered = button.contains(mouse.0, mouse.1);
    draw_rectangle(
        button.x,
        button.y,
        button.w,
        button.h,
        if hovered { BUTTON_HOVER_COLOR } else { BUTTON_COLOR },
    );
    let label = "Start";
    let label_size = 24.0;
    let dims = measure_text(label, None, label_size as u16, 1.0);
    draw_text(
        label,
        (button.center_x() - dims.width / 2.0).round(),
        (button.center_y() + dims.offset_y / 2.0).round(),
        label_size,
        BUTTON_TEXT_COLOR,
    );

    start_requested(
        button,
        mouse,
        is_mouse_button_pressed(MouseButton::Left),
        is_key_pressed(KeyCode::Enter),
    )
}
