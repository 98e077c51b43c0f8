//! "What's new" window shown once per launch

use super::{Button, Panel, PanelStyle};
use crate::text::draw_simple_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const NOTES: [&str; 8] = [
    "- ACHIEVEMENTS! EIGHT TO UNLOCK",
    "- PROGRESS IS SAVED BETWEEN RUNS",
    "- NEW SKINS AT 10, 25 AND 50 POINTS",
    "- BIRD EXPLODES ON IMPACT",
    "- RESTART NOW WAITS A SECOND",
    "- UNLOCK BANNER AT THE TOP",
    "",
    "CLICK CONTINUE TO PLAY",
];

pub struct PatchNotes {
    panel: Panel,
    continue_button: Button,
}

impl PatchNotes {
    pub fn new(continue_button: Rect) -> Self {
        PatchNotes {
            panel: Panel::new("PATCH NOTES", PanelStyle::default()),
            continue_button: Button::new(continue_button, "CONTINUE"),
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let bounds = self.panel.render(canvas)?;

        let left = bounds.x() + 40;
        let mut y = bounds.y() + 100;
        for line in NOTES {
            draw_simple_text(canvas, line, left, y, Color::RGB(220, 220, 230), 2)?;
            y += 34;
        }

        self.continue_button.render(canvas)
    }
}
