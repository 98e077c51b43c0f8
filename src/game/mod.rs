// Game module - Contains all game logic and state management
//
// This module contains:
// - types.rs: GameState, per-frame input, button layout, texture bundle
// - session.rs: SessionState (score, timers, flags)
// - world.rs: GameWorld struct and entity management
// - update.rs: the fixed-tick state machine
// - rendering.rs: drawing every screen

pub mod rendering;
pub mod session;
pub mod types;
pub mod update;
pub mod world;

pub use session::SessionState;
pub use types::*;
pub use world::{Crash, GameWorld};

use crate::achievements::AchievementEngine;
use crate::config::GameConfig;
use crate::save::ProfileStore;
use rand::Rng;

/// The whole game: configuration, session, entities and achievements.
///
/// Generic over the profile store and the random source so the full state
/// machine can run headless in tests.
pub struct Game<S: ProfileStore, R: Rng> {
    pub config: GameConfig,
    pub session: SessionState,
    pub world: GameWorld,
    pub achievements: AchievementEngine,
    pub layout: Layout,
    store: S,
    rng: R,
}

impl<S: ProfileStore, R: Rng> Game<S, R> {
    /// Reads the profile and builds a fresh world sized to the loaded sprites.
    pub fn new(config: GameConfig, store: S, rng: R, bird_size: (u32, u32), pipe_size: (u32, u32)) -> Self {
        let high_score = match store.load_high_score() {
            Ok(score) => score,
            Err(e) => {
                tracing::warn!("High score not loaded, starting from 0: {}", e);
                0
            }
        };
        let achievements = AchievementEngine::load(&store, &config.rules);
        tracing::info!(
            "Profile loaded: high score {}, {} achievements unlocked",
            high_score,
            achievements.unlocked_count()
        );

        Game {
            session: SessionState::new(high_score),
            world: GameWorld::new(&config, bird_size, pipe_size),
            layout: Layout::new(&config.screen),
            achievements,
            config,
            store,
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.session.state
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::SaveManager;
    use crate::sound::RecordingSound;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::fs;

    #[test]
    fn test_unwritable_profile_still_plays() {
        let blocker = std::env::temp_dir().join(format!("flappy-game-blocker-{}", std::process::id()));
        fs::write(&blocker, "not a directory").unwrap();
        let store = SaveManager::open(blocker.join("profile"));

        let mut game = Game::new(
            GameConfig::default(),
            store,
            ChaCha8Rng::seed_from_u64(3),
            (51, 36),
            (78, 560),
        );
        assert_eq!(game.session.high_score, 0);
        assert_eq!(game.achievements.unlocked_count(), 0);
        assert_eq!(game.state(), GameState::PatchNotes);

        let mut sound = RecordingSound::default();
        let button = game.layout.continue_button.center();
        let click = FrameInput {
            flap_held: true,
            flap_pressed: true,
            click: Some((button.x(), button.y())),
            quit: false,
        };
        game.tick(&click, 0, &mut sound);
        let space = FrameInput {
            flap_held: true,
            flap_pressed: true,
            ..FrameInput::default()
        };
        game.tick(&space, 0, &mut sound);
        assert_eq!(game.state(), GameState::Playing);

        game.session.score = 3;
        game.world.bird.y = -10;
        game.tick(&FrameInput::default(), 100, &mut sound);

        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.session.high_score, 3);
        assert!(game.achievements.is_unlocked("Icarus"));

        let _ = fs::remove_file(&blocker);
    }
}
