//! Achievement system
//!
//! - `table`: the declarative list of achievements and save merging
//! - `engine`: event queue, unlock pipeline and notification banner

pub mod engine;
pub mod table;

pub use engine::{AchievementEngine, GameEvent};
pub use table::{master_table, Achievement};
