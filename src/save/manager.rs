//! File-backed profile store
//!
//! Each record is rewritten in full on every change. Writes go to a
//! temporary sibling first and are renamed over the target, so a crash
//! mid-write leaves the previous file intact.

use super::types::*;
use super::ProfileStore;
use std::fs;
use std::path::{Path, PathBuf};

const HIGH_SCORE_FILE: &str = "highscore.txt";
const ACHIEVEMENTS_FILE: &str = "achievements.json";

pub struct SaveManager {
    save_directory: PathBuf,
}

impl SaveManager {
    /// Creates a new SaveManager with the given save directory
    ///
    /// The save directory will be created if it doesn't exist.
    pub fn new(save_directory: impl AsRef<Path>) -> Result<Self, SaveError> {
        let save_dir = save_directory.as_ref().to_path_buf();

        if !save_dir.exists() {
            fs::create_dir_all(&save_dir)?;
        }

        Ok(SaveManager {
            save_directory: save_dir,
        })
    }

    /// Like `new`, but a directory that cannot be created only logs a warning.
    ///
    /// The profile then loads as missing and every write fails, which the
    /// game logs and otherwise ignores.
    pub fn open(save_directory: impl AsRef<Path>) -> Self {
        let save_dir = save_directory.as_ref();
        match SaveManager::new(save_dir) {
            Ok(manager) => manager,
            Err(e) => {
                tracing::warn!(
                    "Save directory {} unavailable, progress will not be kept: {}",
                    save_dir.display(),
                    e
                );
                SaveManager {
                    save_directory: save_dir.to_path_buf(),
                }
            }
        }
    }

    /// `<data dir>/FlappyBird`, or `./saves` when the platform has no data dir
    pub fn default_directory() -> PathBuf {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .map(|p| p.join("FlappyBird"))
            .unwrap_or_else(|| PathBuf::from("./saves"))
    }

    pub fn directory(&self) -> &Path {
        &self.save_directory
    }

    fn write_replacing(&self, filename: &str, contents: &str) -> Result<(), SaveError> {
        let target = self.save_directory.join(filename);
        let temp = self.save_directory.join(format!("{}.tmp", filename));
        fs::write(&temp, contents)?;
        fs::rename(&temp, &target)?;
        tracing::debug!("Wrote {}", target.display());
        Ok(())
    }
}

impl ProfileStore for SaveManager {
    fn load_high_score(&self) -> Result<u32, SaveError> {
        let text = fs::read_to_string(self.save_directory.join(HIGH_SCORE_FILE))?;
        Ok(text.trim().parse::<u32>()?)
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), SaveError> {
        self.write_replacing(HIGH_SCORE_FILE, &score.to_string())
    }

    fn load_achievements(&self) -> Result<Vec<AchievementRecord>, SaveError> {
        let json = fs::read_to_string(self.save_directory.join(ACHIEVEMENTS_FILE))?;
        Ok(serde_json::from_str(&json)?)
    }

    fn save_achievements(&mut self, records: &[AchievementRecord]) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(records)?;
        self.write_replacing(ACHIEVEMENTS_FILE, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_manager(name: &str) -> SaveManager {
        let dir = std::env::temp_dir().join(format!("flappy-save-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        SaveManager::new(&dir).unwrap()
    }

    fn records() -> Vec<AchievementRecord> {
        vec![
            AchievementRecord {
                name: "Icarus".to_string(),
                unlocked: true,
                unlocked_at: Some("2026-10-18".to_string()),
            },
            AchievementRecord {
                name: "Grounded".to_string(),
                unlocked: false,
                unlocked_at: None,
            },
        ]
    }

    #[test]
    fn test_round_trip() {
        let mut manager = temp_manager("round-trip");

        manager.save_high_score(42).unwrap();
        manager.save_achievements(&records()).unwrap();

        assert_eq!(manager.load_high_score().unwrap(), 42);
        assert_eq!(manager.load_achievements().unwrap(), records());

        let _ = fs::remove_dir_all(manager.directory());
    }

    #[test]
    fn test_overwrite_replaces_whole_file() {
        let mut manager = temp_manager("overwrite");

        manager.save_high_score(1234).unwrap();
        manager.save_high_score(7).unwrap();
        let raw = fs::read_to_string(manager.directory().join(HIGH_SCORE_FILE)).unwrap();
        assert_eq!(raw, "7");
        assert!(!manager.directory().join("highscore.txt.tmp").exists());

        let _ = fs::remove_dir_all(manager.directory());
    }

    #[test]
    fn test_open_tolerates_uncreatable_directory() {
        let blocker = std::env::temp_dir().join(format!("flappy-blocker-{}", std::process::id()));
        fs::write(&blocker, "not a directory").unwrap();
        let dir = blocker.join("profile");

        assert!(SaveManager::new(&dir).is_err());

        let mut manager = SaveManager::open(&dir);
        assert!(manager.load_high_score().is_err());
        assert!(manager.load_achievements().is_err());
        assert!(manager.save_high_score(5).is_err());
        assert!(manager.save_achievements(&records()).is_err());

        let _ = fs::remove_file(&blocker);
    }

    #[test]
    fn test_missing_and_corrupt_files_are_errors() {
        let manager = temp_manager("corrupt");

        assert!(matches!(manager.load_high_score(), Err(SaveError::IoError(_))));
        assert!(matches!(manager.load_achievements(), Err(SaveError::IoError(_))));

        fs::write(manager.directory().join(HIGH_SCORE_FILE), "lots").unwrap();
        fs::write(manager.directory().join(ACHIEVEMENTS_FILE), "{ nope").unwrap();
        assert!(matches!(manager.load_high_score(), Err(SaveError::CorruptedData(_))));
        assert!(matches!(manager.load_achievements(), Err(SaveError::SerializationError(_))));

        let _ = fs::remove_dir_all(manager.directory());
    }
}
