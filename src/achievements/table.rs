//! The master achievement table and merging with saved flags

use crate::save::AchievementRecord;

/// Gameplay moments that unlock an achievement directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Icarus,
    Grounded,
    CloseShave,
    ZenFlapper,
    NyepiSilence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Unlocks once a run's score reaches the value
    ScoreAtLeast(u32),
    Signal(Signal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub name: &'static str,
    pub description: &'static str,
    pub trigger: Trigger,
    pub unlocked: bool,
    pub unlocked_at: Option<String>,
}

impl Achievement {
    const fn locked(name: &'static str, description: &'static str, trigger: Trigger) -> Self {
        Achievement {
            name,
            description,
            trigger,
            unlocked: false,
            unlocked_at: None,
        }
    }

    pub fn to_record(&self) -> AchievementRecord {
        AchievementRecord {
            name: self.name.to_string(),
            unlocked: self.unlocked,
            unlocked_at: self.unlocked_at.clone(),
        }
    }
}

/// Every achievement in the game, all locked
pub fn master_table() -> Vec<Achievement> {
    vec![
        Achievement::locked("Bronze Flapper", "Score 10 points in one run", Trigger::ScoreAtLeast(10)),
        Achievement::locked("Silver Flapper", "Score 25 points in one run", Trigger::ScoreAtLeast(25)),
        Achievement::locked("Gold Flapper", "Score 50 points in one run", Trigger::ScoreAtLeast(50)),
        Achievement::locked("Icarus", "Fly into the top of the sky", Trigger::Signal(Signal::Icarus)),
        Achievement::locked("Grounded", "Crash into the ground", Trigger::Signal(Signal::Grounded)),
        Achievement::locked(
            "Close Shave",
            "Clear a pipe with almost no room to spare",
            Trigger::Signal(Signal::CloseShave),
        ),
        Achievement::locked(
            "Zen Flapper",
            "Reach 3 points using 10 flaps or fewer",
            Trigger::Signal(Signal::ZenFlapper),
        ),
        Achievement::locked(
            "Nyepi Silence",
            "Go 1.5 seconds without flapping",
            Trigger::Signal(Signal::NyepiSilence),
        ),
    ]
}

/// Applies saved flags onto the master table by name.
///
/// Saved names that no longer exist are ignored; table entries missing from
/// the save stay locked.
pub fn merge_saved(table: &mut [Achievement], saved: &[AchievementRecord]) {
    for record in saved {
        if let Some(achievement) = table.iter_mut().find(|a| a.name == record.name) {
            achievement.unlocked = record.unlocked;
            achievement.unlocked_at = if record.unlocked {
                record.unlocked_at.clone()
            } else {
                None
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, unlocked: bool) -> AchievementRecord {
        AchievementRecord {
            name: name.to_string(),
            unlocked,
            unlocked_at: None,
        }
    }

    #[test]
    fn test_master_table_starts_locked_with_unique_names() {
        let table = master_table();
        assert!(table.iter().all(|a| !a.unlocked));

        let mut names: Vec<_> = table.iter().map(|a| a.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), table.len());
    }

    #[test]
    fn test_merge_by_name() {
        let mut table = master_table();
        merge_saved(
            &mut table,
            &[
                record("Icarus", true),
                record("Retired Achievement", true),
                record("Grounded", false),
            ],
        );

        let unlocked: Vec<_> = table.iter().filter(|a| a.unlocked).map(|a| a.name).collect();
        assert_eq!(unlocked, vec!["Icarus"]);
        assert_eq!(table.len(), master_table().len());
    }
}
