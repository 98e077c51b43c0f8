// Per-process session variables
//
// Everything that is not an entity but still changes from tick to tick lives
// here, so a reset only has to touch one struct.

use super::GameState;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub state: GameState,
    pub score: u32,
    /// Flaps made during the current run (the launch impulse is not a flap)
    pub flap_count: u32,
    pub high_score: u32,
    /// Tick time the run ended, gates the restart input
    pub game_over_at: Option<u64>,
    pub last_flap_at: u64,
    /// Set once the idle event fired; cleared by the next flap
    pub idle_reported: bool,
    /// Patch notes are shown once per process
    pub patch_notes_seen: bool,
    pub ground_scroll: i32,
}

impl SessionState {
    pub fn new(high_score: u32) -> Self {
        SessionState {
            state: GameState::PatchNotes,
            score: 0,
            flap_count: 0,
            high_score,
            game_over_at: None,
            last_flap_at: 0,
            idle_reported: false,
            patch_notes_seen: false,
            ground_scroll: 0,
        }
    }

    /// Clears the per-run counters. High score and patch-notes flag survive.
    pub fn reset_run(&mut self) {
        self.score = 0;
        self.flap_count = 0;
        self.game_over_at = None;
        self.idle_reported = false;
    }

    pub fn cooldown_elapsed(&self, now: u64, cooldown_ms: u64) -> bool {
        self.game_over_at
            .is_some_and(|at| now.saturating_sub(at) > cooldown_ms)
    }

    /// Moves the ground strip left, snapping back once it has travelled `wrap` pixels.
    pub fn scroll_ground(&mut self, speed: i32, wrap: i32) {
        self.ground_scroll -= speed;
        if self.ground_scroll.abs() > wrap {
            self.ground_scroll = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_high_score() {
        let mut session = SessionState::new(7);
        session.score = 12;
        session.flap_count = 30;
        session.game_over_at = Some(100);
        session.patch_notes_seen = true;

        session.reset_run();
        assert_eq!(session.score, 0);
        assert_eq!(session.flap_count, 0);
        assert_eq!(session.game_over_at, None);
        assert_eq!(session.high_score, 7);
        assert!(session.patch_notes_seen);
    }

    #[test]
    fn test_cooldown_is_strict() {
        let mut session = SessionState::new(0);
        assert!(!session.cooldown_elapsed(5000, 1000));

        session.game_over_at = Some(2000);
        assert!(!session.cooldown_elapsed(3000, 1000));
        assert!(session.cooldown_elapsed(3001, 1000));
    }

    #[test]
    fn test_ground_wraps() {
        let mut session = SessionState::new(0);
        for _ in 0..8 {
            session.scroll_ground(4, 35);
        }
        assert_eq!(session.ground_scroll, -32);
        session.scroll_ground(4, 35);
        assert_eq!(session.ground_scroll, 0);
    }
}
