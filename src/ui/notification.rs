//! Achievement unlock banner
//!
//! The banner is stateless: the achievement engine decides whether a
//! notification is still live and hands over its text.
//!
//! # Example
//!
//! ```rust
//! let banner = NotificationBanner::new();
//! if let Some(text) = game.achievements.notification(now) {
//!     banner.render(&mut canvas, text)?;
//! }
//! ```

use crate::text::{draw_text_centered, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Configuration for banner appearance
#[derive(Debug, Clone)]
pub struct NotificationStyle {
    pub background_color: Color,
    pub border_color: Color,
    pub text_color: Color,
    pub text_scale: u32,
    /// Top edge of the banner
    pub top: i32,
    /// Space between text and border
    pub padding: u32,
}

impl Default for NotificationStyle {
    fn default() -> Self {
        NotificationStyle {
            background_color: Color::RGBA(20, 20, 30, 210),
            border_color: Color::RGB(255, 200, 60),
            text_color: Color::RGB(255, 230, 140),
            text_scale: 3,
            top: 120,
            padding: 14,
        }
    }
}

pub struct NotificationBanner {
    style: NotificationStyle,
}

impl NotificationBanner {
    pub fn new() -> Self {
        NotificationBanner {
            style: NotificationStyle::default(),
        }
    }

    /// Banner rect for `text` on a screen `screen_width` wide
    fn bounds(&self, text: &str, screen_width: u32) -> Rect {
        let scale = self.style.text_scale;
        let width = (text_width(text, scale) + self.style.padding * 2).min(screen_width);
        let height = 7 * scale + self.style.padding * 2;
        Rect::new(
            (screen_width.saturating_sub(width) / 2) as i32,
            self.style.top,
            width,
            height,
        )
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, text: &str) -> Result<(), String> {
        let (screen_width, _) = canvas.logical_size();
        let bounds = self.bounds(text, screen_width);

        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(bounds)?;
        canvas.set_blend_mode(BlendMode::None);
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(bounds)?;

        draw_text_centered(
            canvas,
            text,
            bounds.center().x(),
            bounds.y() + self.style.padding as i32,
            self.style.text_color,
            self.style.text_scale,
        )
    }
}

impl Default for NotificationBanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_is_centered_and_padded() {
        let banner = NotificationBanner::new();
        let bounds = banner.bounds("UNLOCKED: ICARUS", 864);
        // 16 chars * 18px + 2 * 14
        assert_eq!(bounds.width(), 316);
        assert_eq!(bounds.height(), 21 + 28);
        assert_eq!(bounds.x(), (864 - 316) / 2);
    }

    #[test]
    fn test_banner_never_wider_than_screen() {
        let banner = NotificationBanner::new();
        let bounds = banner.bounds("UNLOCKED: A VERY LONG ACHIEVEMENT NAME INDEED", 300);
        assert_eq!(bounds.width(), 300);
        assert_eq!(bounds.x(), 0);
    }
}
