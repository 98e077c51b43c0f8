// Game logic: one fixed tick of the state machine
//
// Every tick runs the handler for the current state, then advances particles
// and lets the achievement engine drain whatever events the handler queued.

use super::{Crash, FrameInput, Game, GameState};
use crate::achievements::GameEvent;
use crate::obstacles::Pass;
use crate::save::ProfileStore;
use crate::skin::{self, SkinTier};
use crate::sound::{SoundCue, SoundDevice};
use rand::Rng;

impl<S: ProfileStore, R: Rng> Game<S, R> {
    /// Advances the game by one tick. `now` is milliseconds since startup.
    pub fn tick<D: SoundDevice + ?Sized>(&mut self, input: &FrameInput, now: u64, sound: &mut D) {
        match self.session.state {
            GameState::PatchNotes => self.update_patch_notes(input),
            GameState::StartMenu => self.update_start_menu(input, now),
            GameState::AchievementsMenu => self.update_achievements_menu(input),
            GameState::Playing => self.update_playing(input, now, sound),
            GameState::GameOver => self.update_game_over(input, now),
        }

        self.world.advance_particles();
        self.achievements.process(now, &mut self.store);
    }

    /// Clears the field and run counters. High score and unlocks are kept.
    pub fn reset_game(&mut self) {
        self.world.reset(&self.config);
        self.session.reset_run();
    }

    fn set_state(&mut self, next: GameState) {
        tracing::info!("State {:?} -> {:?}", self.session.state, next);
        self.session.state = next;
    }

    fn update_patch_notes(&mut self, input: &FrameInput) {
        if input.clicked_in(self.layout.continue_button) {
            self.session.patch_notes_seen = true;
            self.set_state(GameState::StartMenu);
        }
    }

    fn update_start_menu(&mut self, input: &FrameInput, now: u64) {
        if input.clicked_in(self.layout.achievements_button) {
            self.set_state(GameState::AchievementsMenu);
        } else if input.flap_pressed {
            self.start_run(now);
        }
    }

    fn update_achievements_menu(&mut self, input: &FrameInput) {
        if input.clicked_in(self.layout.back_button) {
            self.set_state(GameState::StartMenu);
        }
    }

    fn start_run(&mut self, now: u64) {
        self.reset_game();
        let bird = &mut self.world.bird;
        bird.jump(self.config.physics.jump_impulse);
        // The press that started the run must be released before the first flap
        bird.clicked = true;
        self.session.last_flap_at = now;
        self.set_state(GameState::Playing);
    }

    fn update_playing<D: SoundDevice + ?Sized>(&mut self, input: &FrameInput, now: u64, sound: &mut D) {
        let ground_y = self.config.screen.ground_y;

        if self.world.bird.update(input.flap_held, &self.config.physics, ground_y) {
            self.session.flap_count += 1;
            self.session.last_flap_at = now;
            self.session.idle_reported = false;
            sound.play(SoundCue::Flap);
        }

        let idle_for = now.saturating_sub(self.session.last_flap_at);
        if !self.session.idle_reported && idle_for > self.config.rules.idle_timeout_ms {
            self.session.idle_reported = true;
            self.achievements.push(GameEvent::FlapIdleTimeout);
        }

        self.world.advance_pipes(now, &self.config, &mut self.rng);
        self.session
            .scroll_ground(self.config.physics.scroll_speed, self.config.screen.ground_wrap);

        if let Some(pass) = self.world.check_pass(self.config.rules.close_shave_px) {
            self.score_pass(pass, sound);
        }

        if let Some(crash) = self.world.check_crash(ground_y) {
            match crash {
                Crash::Ceiling => self.achievements.push(GameEvent::CollidedWithCeiling),
                Crash::Ground => self.achievements.push(GameEvent::CollidedWithGround),
                Crash::Pipe => {}
            }
            self.die(crash, now, sound);
        }
    }

    fn score_pass<D: SoundDevice + ?Sized>(&mut self, pass: Pass, sound: &mut D) {
        self.session.score += 1;
        sound.play(SoundCue::Point);
        tracing::debug!("Passed pair {}, score {}", pass.unit.pair_id, self.session.score);

        if pass.close_shave {
            self.achievements.push(GameEvent::ClosePass);
        }
        self.achievements.push(GameEvent::ScoreReached {
            score: self.session.score,
            flaps: self.session.flap_count,
        });

        let current = self.world.bird.skin();
        if let Some(tier) = skin::promotion_for(current, self.session.score, &self.config.rules.skin_thresholds) {
            self.promote(tier, sound);
        }
    }

    fn promote<D: SoundDevice + ?Sized>(&mut self, tier: SkinTier, sound: &mut D) {
        tracing::info!("Skin promoted to {} at score {}", tier.name(), self.session.score);
        self.world.bird.change_skin(tier);
        self.world.power_up_burst(tier, &self.config, &mut self.rng);
        sound.play(SoundCue::PowerUp);
    }

    fn die<D: SoundDevice + ?Sized>(&mut self, crash: Crash, now: u64, sound: &mut D) {
        tracing::info!("Bird crashed ({:?}) with score {}", crash, self.session.score);
        sound.play(SoundCue::Crash);
        self.world.explode_bird(&self.config, &mut self.rng);
        self.session.game_over_at = Some(now);

        if self.session.score > self.session.high_score {
            self.session.high_score = self.session.score;
            match self.store.save_high_score(self.session.high_score) {
                Ok(()) => tracing::info!("New high score {}", self.session.high_score),
                Err(e) => tracing::warn!("Failed to save high score: {}", e),
            }
        }

        self.set_state(GameState::GameOver);
    }

    /// Left clicks arrive as flap presses too, so one check covers both.
    fn update_game_over(&mut self, input: &FrameInput, now: u64) {
        if input.flap_pressed && self.session.cooldown_elapsed(now, self.config.rules.game_over_cooldown_ms) {
            self.reset_game();
            self.set_state(GameState::StartMenu);
        }
    }
}
