//! Game tuning configuration
//!
//! Every gameplay constant lives here so it can be tweaked from
//! `assets/config/game.json` without recompiling. Sections missing from the
//! file fall back to the built-in defaults, which reproduce the classic game.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the tuning file, relative to the working directory
pub const CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    pub physics: PhysicsConfig,
    pub pipes: PipeConfig,
    pub rules: RuleConfig,
    pub effects: EffectsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
    /// Y coordinate of the top of the ground strip
    pub ground_y: i32,
    pub fps: u32,
    /// Ground strip offset wraps back to zero past this many pixels
    pub ground_wrap: i32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            width: 864,
            height: 936,
            ground_y: 768,
            fps: 60,
            ground_wrap: 35,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub jump_impulse: f32,
    pub bird_start_x: i32,
    /// Ticks each animation frame stays on screen
    pub ticks_per_frame: u32,
    pub scroll_speed: i32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            gravity: 0.5,
            max_fall_speed: 8.0,
            jump_impulse: -10.0,
            bird_start_x: 100,
            ticks_per_frame: 6,
            scroll_speed: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeConfig {
    pub gap: i32,
    pub frequency_ms: u64,
    /// Inclusive range of the gap center offset from mid-screen
    pub offset_min: i32,
    pub offset_max: i32,
}

impl Default for PipeConfig {
    fn default() -> Self {
        PipeConfig {
            gap: 200,
            frequency_ms: 1500,
            offset_min: -300,
            offset_max: 100,
        }
    }
}

/// Thresholds for state timing, achievements and skin promotion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub game_over_cooldown_ms: u64,
    pub notification_ms: u64,
    pub close_shave_px: i32,
    pub zen_score: u32,
    pub zen_max_flaps: u32,
    pub idle_timeout_ms: u64,
    /// Score needed for skin tier 1, 2 and 3
    pub skin_thresholds: [u32; 3],
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            game_over_cooldown_ms: 1000,
            notification_ms: 3000,
            close_shave_px: 10,
            zen_score: 3,
            zen_max_flaps: 10,
            idle_timeout_ms: 1500,
            skin_thresholds: [10, 25, 50],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub tile_size: u32,
    pub shard_gravity: f32,
    pub burst_count: usize,
    pub burst_gravity: f32,
    /// Alpha lost per tick by power-up sparks
    pub burst_fade: f32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        EffectsConfig {
            tile_size: 16,
            shard_gravity: 0.3,
            burst_count: 35,
            burst_gravity: 0.1,
            burst_fade: 5.0,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Loads the tuning file, using defaults when it does not exist.
    /// A file that fails to parse or holds unusable values is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("No config at {}, using defaults", path.display());
            return Ok(GameConfig::default());
        }
        let config = GameConfig::load_from_file(path)
            .map_err(|e| format!("Failed to load config {}: {}", path.display(), e))?;
        config
            .validate()
            .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Rejects values the game loop cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.screen.fps == 0 {
            return Err("screen.fps must be greater than 0".to_string());
        }
        if self.pipes.offset_min > self.pipes.offset_max {
            return Err(format!(
                "pipes.offset_min ({}) is greater than pipes.offset_max ({})",
                self.pipes.offset_min, self.pipes.offset_max
            ));
        }
        if self.pipes.gap <= 0 {
            return Err("pipes.gap must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn mid_height(&self) -> i32 {
        self.screen.height as i32 / 2
    }
}
