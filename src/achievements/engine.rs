use super::table::{master_table, merge_saved, Achievement, Signal, Trigger};
use crate::config::RuleConfig;
use crate::save::{AchievementRecord, ProfileStore};
use std::collections::VecDeque;

/// Things that happened during a tick that achievements care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Fired after every score increment with the run's flap count so far
    ScoreReached { score: u32, flaps: u32 },
    CollidedWithCeiling,
    CollidedWithGround,
    ClosePass,
    FlapIdleTimeout,
}

/// On-screen unlock banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub shown_at: u64,
}

/// Evaluates queued gameplay events against the achievement table.
///
/// Gameplay code only pushes events; `process` drains them once per tick,
/// unlocks whatever matches, raises the banner and writes the full set
/// through to the profile store. Unlocking is one-way: an achievement that is
/// already unlocked never notifies or saves again.
pub struct AchievementEngine {
    achievements: Vec<Achievement>,
    pending: VecDeque<GameEvent>,
    notification: Option<Notification>,
    zen_score: u32,
    zen_max_flaps: u32,
    notification_ms: u64,
}

impl AchievementEngine {
    pub fn new(achievements: Vec<Achievement>, rules: &RuleConfig) -> Self {
        AchievementEngine {
            achievements,
            pending: VecDeque::new(),
            notification: None,
            zen_score: rules.zen_score,
            zen_max_flaps: rules.zen_max_flaps,
            notification_ms: rules.notification_ms,
        }
    }

    /// Master table merged with whatever the store holds.
    /// An unreadable save means every achievement starts locked.
    pub fn load<S: ProfileStore + ?Sized>(store: &S, rules: &RuleConfig) -> Self {
        let mut table = master_table();
        match store.load_achievements() {
            Ok(saved) => merge_saved(&mut table, &saved),
            Err(e) => tracing::warn!("Achievements not loaded, starting locked: {}", e),
        }
        AchievementEngine::new(table, rules)
    }

    pub fn push(&mut self, event: GameEvent) {
        self.pending.push_back(event);
    }

    /// Drains the event queue. Returns the names unlocked by this call.
    pub fn process<S: ProfileStore + ?Sized>(&mut self, now: u64, store: &mut S) -> Vec<&'static str> {
        let mut unlocked = Vec::new();

        while let Some(event) = self.pending.pop_front() {
            let matched: Vec<usize> = self
                .achievements
                .iter()
                .enumerate()
                .filter(|(_, a)| !a.unlocked && self.matches(a.trigger, event))
                .map(|(i, _)| i)
                .collect();

            for index in matched {
                unlocked.push(self.unlock(index, now, store));
            }
        }

        unlocked
    }

    fn matches(&self, trigger: Trigger, event: GameEvent) -> bool {
        match (trigger, event) {
            (Trigger::ScoreAtLeast(needed), GameEvent::ScoreReached { score, .. }) => score >= needed,
            (Trigger::Signal(Signal::ZenFlapper), GameEvent::ScoreReached { score, flaps }) => {
                score == self.zen_score && flaps <= self.zen_max_flaps
            }
            (Trigger::Signal(Signal::Icarus), GameEvent::CollidedWithCeiling) => true,
            (Trigger::Signal(Signal::Grounded), GameEvent::CollidedWithGround) => true,
            (Trigger::Signal(Signal::CloseShave), GameEvent::ClosePass) => true,
            (Trigger::Signal(Signal::NyepiSilence), GameEvent::FlapIdleTimeout) => true,
            _ => false,
        }
    }

    fn unlock<S: ProfileStore + ?Sized>(&mut self, index: usize, now: u64, store: &mut S) -> &'static str {
        let achievement = &mut self.achievements[index];
        achievement.unlocked = true;
        achievement.unlocked_at = Some(chrono::Local::now().format("%Y-%m-%d").to_string());
        let name = achievement.name;

        tracing::info!("Achievement unlocked: {}", name);
        self.notification = Some(Notification {
            text: format!("UNLOCKED: {}", name),
            shown_at: now,
        });

        if let Err(e) = store.save_achievements(&self.records()) {
            tracing::warn!("Failed to save achievements: {}", e);
        }

        name
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    #[cfg(test)]
    pub fn is_unlocked(&self, name: &str) -> bool {
        self.achievements.iter().any(|a| a.name == name && a.unlocked)
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// Banner text, while it is still within its display window
    pub fn notification(&self, now: u64) -> Option<&str> {
        self.notification
            .as_ref()
            .filter(|n| now.saturating_sub(n.shown_at) < self.notification_ms)
            .map(|n| n.text.as_str())
    }

    pub fn records(&self) -> Vec<AchievementRecord> {
        self.achievements.iter().map(Achievement::to_record).collect()
    }
}
