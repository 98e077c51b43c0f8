//! Score counter drawn at the top of the field

use crate::text::draw_text_shadowed;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

#[derive(Debug, Clone)]
pub struct ScoreDisplayStyle {
    pub color: Color,
    pub scale: u32,
    /// Distance of the digits' top edge from the top of the screen
    pub top: i32,
}

impl Default for ScoreDisplayStyle {
    fn default() -> Self {
        ScoreDisplayStyle {
            color: Color::RGB(255, 255, 255),
            scale: 8,
            top: 30,
        }
    }
}

/// Stateless renderer for the running score
pub struct ScoreDisplay {
    style: ScoreDisplayStyle,
}

impl ScoreDisplay {
    pub fn new() -> Self {
        ScoreDisplay {
            style: ScoreDisplayStyle::default(),
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, score: u32) -> Result<(), String> {
        let (screen_width, _) = canvas.logical_size();
        draw_text_shadowed(
            canvas,
            &score.to_string(),
            (screen_width / 2) as i32,
            self.style.top,
            self.style.color,
            self.style.scale,
        )
    }
}

impl Default for ScoreDisplay {
    fn default() -> Self {
        Self::new()
    }
}
