//! Bird skin tiers unlocked by score milestones

use sdl2::pixels::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum SkinTier {
    #[default]
    Yellow,
    Red,
    Blue,
    Gold,
}

impl SkinTier {
    pub const ALL: [SkinTier; 4] = [SkinTier::Yellow, SkinTier::Red, SkinTier::Blue, SkinTier::Gold];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            SkinTier::Yellow => "yellow",
            SkinTier::Red => "red",
            SkinTier::Blue => "blue",
            SkinTier::Gold => "gold",
        }
    }

    pub fn next(self) -> Option<SkinTier> {
        SkinTier::ALL.get(self.ordinal() + 1).copied()
    }

    /// Tint used for the power-up burst when this tier is reached
    pub fn burst_color(self) -> Color {
        match self {
            SkinTier::Yellow => Color::RGB(255, 220, 80),
            SkinTier::Red => Color::RGB(235, 70, 60),
            SkinTier::Blue => Color::RGB(80, 150, 255),
            SkinTier::Gold => Color::RGB(255, 190, 30),
        }
    }
}

/// The tier the bird advances to at `score`, if any.
///
/// Promotion is a single step: a yellow bird at score 30 only becomes red,
/// blue has to wait for the next score check.
pub fn promotion_for(current: SkinTier, score: u32, thresholds: &[u32; 3]) -> Option<SkinTier> {
    let next = current.next()?;
    let needed = thresholds[next.ordinal() - 1];
    (score >= needed).then_some(next)
}
