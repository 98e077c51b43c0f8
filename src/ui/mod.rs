//! In-Game HUD Components
//!
//! Stateless renderers drawn over the playing field, below any menu.
//!
//! # Architecture
//!
//! HUD components:
//! - Hold only a style, never game state
//! - Are created once and handed their data every frame
//! - Use procedural rendering (SDL2 primitives and the bitmap font)
//!
//! # Available Components
//!
//! - [`ScoreDisplay`] - Current score, top center
//! - [`NotificationBanner`] - Achievement unlock banner
//!
//! # Example Usage
//!
//! ```rust
//! let score_display = ScoreDisplay::new();
//! score_display.render(&mut canvas, session.score)?;
//! ```

pub mod hud;
pub mod notification;

pub use hud::ScoreDisplay;
pub use notification::NotificationBanner;
