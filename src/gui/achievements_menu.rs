//! Achievements list
//!
//! One row per achievement: name, description and either the unlock date or
//! LOCKED. Unlocked rows are drawn in gold.

use super::{Button, Panel, PanelStyle};
use crate::achievements::Achievement;
use crate::text::{draw_simple_text, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const ROW_HEIGHT: i32 = 56;

#[derive(Debug, Clone)]
pub struct AchievementsMenuStyle {
    pub unlocked_color: Color,
    pub locked_color: Color,
    pub description_color: Color,
}

impl Default for AchievementsMenuStyle {
    fn default() -> Self {
        AchievementsMenuStyle {
            unlocked_color: Color::RGB(255, 200, 60),
            locked_color: Color::RGB(130, 130, 140),
            description_color: Color::RGB(190, 190, 200),
        }
    }
}

pub struct AchievementsMenu {
    panel: Panel,
    back_button: Button,
    style: AchievementsMenuStyle,
}

/// Right-hand status text for a row
fn status_text(achievement: &Achievement) -> String {
    match (achievement.unlocked, &achievement.unlocked_at) {
        (true, Some(date)) => format!("UNLOCKED {}", date),
        (true, None) => "UNLOCKED".to_string(),
        (false, _) => "LOCKED".to_string(),
    }
}

impl AchievementsMenu {
    pub fn new(back_button: Rect) -> Self {
        AchievementsMenu {
            panel: Panel::new(
                "ACHIEVEMENTS",
                PanelStyle {
                    width: 720,
                    height: 700,
                    ..PanelStyle::default()
                },
            ),
            back_button: Button::new(back_button, "BACK"),
            style: AchievementsMenuStyle::default(),
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, achievements: &[Achievement]) -> Result<(), String> {
        let bounds = self.panel.render(canvas)?;
        let left = bounds.x() + 30;
        let right = bounds.right() - 30;
        let mut y = bounds.y() + 90;

        for achievement in achievements {
            let name_color = if achievement.unlocked {
                self.style.unlocked_color
            } else {
                self.style.locked_color
            };
            draw_simple_text(canvas, achievement.name, left, y, name_color, 2)?;

            let status = status_text(achievement);
            let status_x = right - text_width(&status, 1) as i32;
            draw_simple_text(canvas, &status, status_x, y + 4, name_color, 1)?;

            draw_simple_text(
                canvas,
                achievement.description,
                left,
                y + 22,
                self.style.description_color,
                1,
            )?;
            y += ROW_HEIGHT;
        }

        self.back_button.render(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::master_table;

    #[test]
    fn test_status_text() {
        let mut achievement = master_table().remove(0);
        assert_eq!(status_text(&achievement), "LOCKED");

        achievement.unlocked = true;
        assert_eq!(status_text(&achievement), "UNLOCKED");

        achievement.unlocked_at = Some("2026-10-18".to_string());
        assert_eq!(status_text(&achievement), "UNLOCKED 2026-10-18");
    }
}
