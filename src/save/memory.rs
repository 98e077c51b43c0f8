//! In-memory profile store for tests. Counts every write.

use super::types::*;
use super::ProfileStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub high_score: Option<u32>,
    pub achievements: Option<Vec<AchievementRecord>>,
    pub high_score_writes: usize,
    pub achievement_writes: usize,
}

impl ProfileStore for MemoryStore {
    fn load_high_score(&self) -> Result<u32, SaveError> {
        self.high_score
            .ok_or_else(|| SaveError::CorruptedData("no high score".to_string()))
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), SaveError> {
        self.high_score = Some(score);
        self.high_score_writes += 1;
        Ok(())
    }

    fn load_achievements(&self) -> Result<Vec<AchievementRecord>, SaveError> {
        self.achievements
            .clone()
            .ok_or_else(|| SaveError::CorruptedData("no achievements".to_string()))
    }

    fn save_achievements(&mut self, records: &[AchievementRecord]) -> Result<(), SaveError> {
        self.achievements = Some(records.to_vec());
        self.achievement_writes += 1;
        Ok(())
    }
}
