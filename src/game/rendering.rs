// Drawing: the field first, then the HUD, then whichever screen is active

use super::{Game, GameState, GameTextures, Layout};
use crate::gui::{self, AchievementsMenu, GameOverScreen, PatchNotes, StartMenu};
use crate::save::ProfileStore;
use crate::sprite;
use crate::ui::{NotificationBanner, ScoreDisplay};
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Alpha of the dark wash over the background
const BACKGROUND_DIM: u8 = 100;

/// Every menu and HUD renderer, built once from the button layout
pub struct Screens {
    pub patch_notes: PatchNotes,
    pub start_menu: StartMenu,
    pub achievements_menu: AchievementsMenu,
    pub game_over: GameOverScreen,
    pub score_display: ScoreDisplay,
    pub banner: NotificationBanner,
}

impl Screens {
    pub fn new(layout: &Layout) -> Self {
        Screens {
            patch_notes: PatchNotes::new(layout.continue_button),
            start_menu: StartMenu::new(layout.achievements_button),
            achievements_menu: AchievementsMenu::new(layout.back_button),
            game_over: GameOverScreen::new(),
            score_display: ScoreDisplay::new(),
            banner: NotificationBanner::new(),
        }
    }
}

impl<S: ProfileStore, R: Rng> Game<S, R> {
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        textures: &GameTextures,
        screens: &Screens,
        now: u64,
    ) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();

        canvas.copy(textures.background, None, None)?;
        gui::draw_overlay(canvas, BACKGROUND_DIM)?;

        let alive = self.state() != GameState::GameOver;
        sprite::draw_bird(canvas, textures.birds, &self.world.bird, alive)?;
        for pipe in &self.world.pipes {
            sprite::draw_pipe(canvas, textures.pipe, pipe)?;
        }
        for particle in &self.world.particles {
            sprite::draw_particle(canvas, textures.birds, particle)?;
        }

        let ground = textures.ground.query();
        canvas.copy(
            textures.ground,
            None,
            Some(Rect::new(
                self.session.ground_scroll,
                self.config.screen.ground_y,
                ground.width,
                ground.height,
            )),
        )?;

        match self.state() {
            GameState::PatchNotes => screens.patch_notes.render(canvas)?,
            GameState::StartMenu => screens.start_menu.render(
                canvas,
                self.session.high_score,
                self.achievements.unlocked_count(),
                self.achievements.achievements().len(),
            )?,
            GameState::AchievementsMenu => screens
                .achievements_menu
                .render(canvas, self.achievements.achievements())?,
            GameState::Playing => screens.score_display.render(canvas, self.session.score)?,
            GameState::GameOver => {
                let cooldown = self.config.rules.game_over_cooldown_ms;
                let restart = self
                    .session
                    .cooldown_elapsed(now, cooldown)
                    .then_some((textures.restart, self.layout.restart_button));
                screens
                    .game_over
                    .render(canvas, self.session.score, self.session.high_score, restart)?;
            }
        }

        if let Some(text) = self.achievements.notification(now) {
            screens.banner.render(canvas, text)?;
        }

        Ok(())
    }
}
