//! Save data types for the player profile
//!
//! The profile is two independent records: the high score (plain text
//! integer) and the achievement set (JSON array).

use serde::{Deserialize, Serialize};

/// One persisted achievement flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub name: String,
    pub unlocked: bool,
    /// Local date of the unlock, e.g. "2026-10-18"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<String>,
}

/// Error types for save/load operations
#[derive(Debug)]
pub enum SaveError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    CorruptedData(String),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::IoError(e) => write!(f, "IO error: {}", e),
            SaveError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            SaveError::CorruptedData(msg) => write!(f, "Corrupted save data: {}", msg),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(err: std::io::Error) -> Self {
        SaveError::IoError(err)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        SaveError::SerializationError(err)
    }
}

impl From<std::num::ParseIntError> for SaveError {
    fn from(err: std::num::ParseIntError) -> Self {
        SaveError::CorruptedData(err.to_string())
    }
}
