//! Screen-Space GUI System
//!
//! Menus and overlays drawn at fixed screen positions on top of the game.
//!
//! # Architecture
//!
//! Screen-space GUI elements:
//! - Use logical screen coordinates (864x936)
//! - Render on the top layer, above the field and HUD
//! - Only draw; clicks are resolved by the game update against `Layout`
//! - Use procedural rendering (SDL2 primitives and the bitmap font)
//!
//! # Available Components
//!
//! - [`Panel`] - Titled overlay window
//! - [`Button`] - Labelled button
//! - [`PatchNotes`] - Launch-time notes with a continue button
//! - [`StartMenu`] - Start prompt and achievements button
//! - [`AchievementsMenu`] - Achievement list with a back button
//! - [`GameOverScreen`] - Final score, high score and restart button

pub mod achievements_menu;
pub mod button;
pub mod game_over;
pub mod menu;
pub mod patch_notes;
pub mod start_menu;

pub use achievements_menu::AchievementsMenu;
pub use button::Button;
pub use game_over::GameOverScreen;
pub use menu::{draw_overlay, Panel, PanelStyle};
pub use patch_notes::PatchNotes;
pub use start_menu::StartMenu;
