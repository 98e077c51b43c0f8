//! Start screen: prompt, best score and the achievements button

use super::Button;
use crate::text::{draw_text_shadowed, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const PROMPT: &str = "PRESS SPACE TO START";

pub struct StartMenu {
    achievements_button: Button,
}

impl StartMenu {
    pub fn new(achievements_button: Rect) -> Self {
        StartMenu {
            achievements_button: Button::new(achievements_button, "ACHIEVEMENTS"),
        }
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        high_score: u32,
        unlocked: usize,
        total: usize,
    ) -> Result<(), String> {
        super::draw_overlay(canvas, 120)?;

        let (screen_width, screen_height) = canvas.logical_size();
        let center_x = (screen_width / 2) as i32;
        let center_y = (screen_height / 2) as i32;

        // Largest scale that still fits the prompt on screen
        let scale = (1..=4)
            .rev()
            .find(|&s| text_width(PROMPT, s) + 40 <= screen_width)
            .unwrap_or(1);
        draw_text_shadowed(canvas, PROMPT, center_x, center_y, Color::RGB(255, 255, 255), scale)?;

        draw_text_shadowed(
            canvas,
            &format!("HIGH SCORE = {}", high_score),
            center_x,
            center_y - 80,
            Color::RGB(255, 220, 90),
            3,
        )?;

        self.achievements_button.render(canvas)?;
        draw_text_shadowed(
            canvas,
            &format!("{}/{} UNLOCKED", unlocked, total),
            center_x,
            center_y + 150,
            Color::RGB(200, 200, 210),
            2,
        )
    }
}
