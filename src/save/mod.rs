//! Profile persistence
//!
//! The profile is a high score and the achievement flags. Both are read once
//! at startup and rewritten in full whenever they change.
//!
//! # Architecture
//!
//! - `types`: record structs and `SaveError`
//! - `manager`: `SaveManager`, the file-backed store used by the game
//! - `ProfileStore`: the seam the game talks to, so tests can swap in memory
//!
//! # Example Usage
//!
//! ```ignore
//! let mut store = SaveManager::open(SaveManager::default_directory());
//! store.save_high_score(12)?;
//! let best = store.load_high_score().unwrap_or(0);
//! ```

pub mod manager;
#[cfg(test)]
pub mod memory;
pub mod types;

pub use manager::SaveManager;
pub use types::*;

/// Storage for the two profile records.
///
/// Loads report errors; callers decide on the fallback (zero / all locked).
pub trait ProfileStore {
    fn load_high_score(&self) -> Result<u32, SaveError>;

    fn save_high_score(&mut self, score: u32) -> Result<(), SaveError>;

    fn load_achievements(&self) -> Result<Vec<AchievementRecord>, SaveError>;

    fn save_achievements(&mut self, records: &[AchievementRecord]) -> Result<(), SaveError>;
}
