//! Clickable text button
//!
//! Buttons only draw. Hit testing happens in the game update against the same
//! `Rect`, which is why the rect comes from `Layout` rather than being
//! computed here.

use crate::text::{draw_text_centered, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

#[derive(Debug, Clone)]
pub struct ButtonStyle {
    pub background_color: Color,
    pub border_color: Color,
    pub text_color: Color,
    pub text_scale: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            background_color: Color::RGB(224, 120, 40),
            border_color: Color::RGB(255, 255, 255),
            text_color: Color::RGB(255, 255, 255),
            text_scale: 3,
        }
    }
}

pub struct Button {
    rect: Rect,
    label: String,
    style: ButtonStyle,
}

impl Button {
    pub fn new(rect: Rect, label: &str) -> Self {
        Button {
            rect,
            label: label.to_string(),
            style: ButtonStyle::default(),
        }
    }

    /// Largest scale (up to the style's) at which the label fits with a margin
    fn label_scale(&self) -> u32 {
        let mut scale = self.style.text_scale.max(1);
        while scale > 1 && text_width(&self.label, scale) + 16 > self.rect.width() {
            scale -= 1;
        }
        scale
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(self.rect)?;
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(self.rect)?;

        let scale = self.label_scale();
        let text_y = self.rect.center().y() - (7 * scale as i32) / 2;
        draw_text_centered(
            canvas,
            &self.label,
            self.rect.center().x(),
            text_y,
            self.style.text_color,
            scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_shrinks_to_fit() {
        let wide = Button::new(Rect::new(0, 0, 260, 50), "ACHIEVEMENTS");
        assert_eq!(wide.label_scale(), 3);

        let narrow = Button::new(Rect::new(0, 0, 150, 50), "ACHIEVEMENTS");
        assert_eq!(narrow.label_scale(), 1);

        let back = Button::new(Rect::new(0, 0, 160, 50), "BACK");
        assert_eq!(back.label_scale(), 3);
    }
}
