// Shared enums and helper structs used throughout the game

use crate::config::ScreenConfig;
use crate::sprite::BirdSprites;
use sdl2::rect::Rect;
use sdl2::render::Texture;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    PatchNotes,
    StartMenu,
    AchievementsMenu,
    Playing,
    GameOver,
}

/// Everything the game needs from one frame of input.
///
/// `flap_held` is the level signal the bird debounces. `flap_pressed` is true
/// on the frame the space key or the left mouse button went down. `click` is
/// the pointer position (logical pixels) of a left-button press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub flap_held: bool,
    pub flap_pressed: bool,
    pub click: Option<(i32, i32)>,
    pub quit: bool,
}

impl FrameInput {
    pub fn clicked_in(&self, rect: Rect) -> bool {
        self.click.is_some_and(|(x, y)| rect.contains_point((x, y)))
    }
}

/// Button hit areas, shared by input handling and drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub achievements_button: Rect,
    pub back_button: Rect,
    pub continue_button: Rect,
    pub restart_button: Rect,
}

impl Layout {
    pub fn new(screen: &ScreenConfig) -> Self {
        let center_x = screen.width as i32 / 2;
        let center_y = screen.height as i32 / 2;

        Layout {
            achievements_button: Rect::new(center_x - 130, center_y + 80, 260, 50),
            back_button: Rect::new(center_x - 80, screen.height as i32 - 256, 160, 50),
            continue_button: Rect::new(center_x - 100, screen.height as i32 - 296, 200, 50),
            restart_button: Rect::new(center_x - 50, center_y, 120, 42),
        }
    }
}

/// Helper struct to hold all game textures
pub struct GameTextures<'a> {
    pub birds: &'a BirdSprites<'a>,
    pub background: &'a Texture<'a>,
    pub ground: &'a Texture<'a>,
    pub pipe: &'a Texture<'a>,
    pub restart: &'a Texture<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_for_default_screen() {
        let layout = Layout::new(&ScreenConfig::default());
        assert_eq!(layout.achievements_button, Rect::new(302, 548, 260, 50));
        assert_eq!(layout.back_button, Rect::new(352, 680, 160, 50));
        assert_eq!(layout.continue_button, Rect::new(332, 640, 200, 50));
        assert_eq!(layout.restart_button, Rect::new(382, 468, 120, 42));
    }

    #[test]
    fn test_clicked_in() {
        let rect = Rect::new(10, 10, 20, 20);
        let mut input = FrameInput::default();
        assert!(!input.clicked_in(rect));

        input.click = Some((15, 25));
        assert!(input.clicked_in(rect));

        input.click = Some((31, 15));
        assert!(!input.clicked_in(rect));
    }
}
