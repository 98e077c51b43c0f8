//! Base Panel Component
//!
//! A centered overlay box with a title, shared by the patch notes, the
//! achievements list and anything else that needs a framed window.

use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Configuration for panel appearance
#[derive(Debug, Clone)]
pub struct PanelStyle {
    /// Panel box width in pixels
    pub width: u32,

    /// Panel box height in pixels
    pub height: u32,

    pub background_color: Color,

    pub border_color: Color,

    /// Border thickness (draws double border if > 1)
    pub border_thickness: u32,

    /// Overlay darkness (0-255, higher = darker)
    pub overlay_alpha: u8,

    pub title_color: Color,

    pub title_scale: u32,
}

impl Default for PanelStyle {
    fn default() -> Self {
        PanelStyle {
            width: 640,
            height: 560,
            background_color: Color::RGB(30, 30, 40),
            border_color: Color::RGB(100, 100, 120),
            border_thickness: 2,
            overlay_alpha: 160,
            title_color: Color::RGB(255, 220, 90),
            title_scale: 4,
        }
    }
}

/// A titled overlay window
pub struct Panel {
    title: String,
    style: PanelStyle,
}

impl Panel {
    pub fn new(title: &str, style: PanelStyle) -> Self {
        Panel {
            title: title.to_string(),
            style,
        }
    }

    /// Box position for the current logical size
    pub fn bounds(&self, canvas: &Canvas<Window>) -> Rect {
        let (screen_width, screen_height) = canvas.logical_size();
        Rect::new(
            (screen_width.saturating_sub(self.style.width) / 2) as i32,
            (screen_height.saturating_sub(self.style.height) / 2) as i32,
            self.style.width,
            self.style.height,
        )
    }

    /// Draws overlay, box, border and title. Returns the box so callers can
    /// lay out their content inside it.
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<Rect, String> {
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(BlendMode::None);

        let bounds = self.bounds(canvas);
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(bounds)?;

        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(bounds)?;
        if self.style.border_thickness > 1 {
            canvas.draw_rect(Rect::new(
                bounds.x() + 2,
                bounds.y() + 2,
                bounds.width().saturating_sub(4),
                bounds.height().saturating_sub(4),
            ))?;
        }

        draw_text_centered(
            canvas,
            &self.title,
            bounds.center().x(),
            bounds.y() + 30,
            self.style.title_color,
            self.style.title_scale,
        )?;

        Ok(bounds)
    }
}

/// Full-screen translucent black, used behind the start and game-over text
pub fn draw_overlay(canvas: &mut Canvas<Window>, alpha: u8) -> Result<(), String> {
    canvas.set_blend_mode(BlendMode::Blend);
    canvas.set_draw_color(Color::RGBA(0, 0, 0, alpha));
    canvas.fill_rect(None)?;
    canvas.set_blend_mode(BlendMode::None);
    Ok(())
}
