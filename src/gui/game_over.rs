//! Game Over Screen Component
//!
//! Darkens the field, shows the run's score against the high score and,
//! once the restart cooldown has passed, the restart button.

use crate::text::draw_text_shadowed;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Configuration for game over screen appearance
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    /// Overlay darkness (0-255, higher = darker)
    pub overlay_alpha: u8,

    pub title_color: Color,

    pub score_color: Color,

    pub text_scale: u32,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            overlay_alpha: 120,
            title_color: Color::RGB(255, 255, 255),
            score_color: Color::RGB(255, 255, 255),
            text_scale: 5,
        }
    }
}

pub struct GameOverScreen {
    style: GameOverStyle,
}

impl GameOverScreen {
    pub fn new() -> Self {
        GameOverScreen {
            style: GameOverStyle::default(),
        }
    }

    /// `restart` is `Some` once the button may be shown.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        score: u32,
        high_score: u32,
        restart: Option<(&Texture, Rect)>,
    ) -> Result<(), String> {
        super::draw_overlay(canvas, self.style.overlay_alpha)?;

        // Use logical size (game coordinates), not physical window size
        let (screen_width, screen_height) = canvas.logical_size();
        let center_x = (screen_width / 2) as i32;
        let center_y = (screen_height / 2) as i32;
        let scale = self.style.text_scale;

        draw_text_shadowed(canvas, "GAME OVER", center_x, center_y - 200, self.style.title_color, scale)?;
        draw_text_shadowed(
            canvas,
            &format!("SCORE = {}", score),
            center_x,
            center_y - 120,
            self.style.score_color,
            scale,
        )?;
        draw_text_shadowed(
            canvas,
            &format!("HIGH SCORE = {}", high_score),
            center_x,
            center_y - 40,
            self.style.score_color,
            scale,
        )?;

        if let Some((texture, rect)) = restart {
            canvas.copy(texture, None, Some(rect))?;
        }

        Ok(())
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}
