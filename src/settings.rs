//! Session settings
//!
//! Every construction parameter of a session. Scene size is passed explicitly
//! rather than read from globals so several sessions can coexist.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, require_positive};

/// Construction parameters for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Scene ===
    pub scene_width: f32,
    pub scene_height: f32,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,
    /// Chance (0.0 - 1.0) that a whole row or column is left empty
    #[serde(alias = "blocked_row_or_col_frequency")]
    pub blocked_frequency: f64,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the bottom of the scene to the paddle's top edge
    pub paddle_offset: f32,
    /// Units moved per move command
    pub paddle_speed: f32,
    /// Frames the paddle is ignored after a hit (0 = every frame)
    pub paddle_cooldown_ticks: u32,

    // === Ball ===
    pub ball_radius: f32,
    /// Distance from the bottom of the scene to the spawn point
    pub ball_spawn_offset: f32,
    /// Fixed speed magnitude (units per second)
    #[serde(alias = "ball_speed_magnitude")]
    pub ball_speed: f32,

    // === Session ===
    pub initial_lives: u8,
    /// Seed for brick layout, tints and launch angles
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scene_width: SCENE_SIZE,
            scene_height: SCENE_SIZE,

            brick_width: BRICK_SIZE,
            brick_height: BRICK_SIZE,
            blocked_frequency: BLOCKED_FREQUENCY,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_offset: PADDLE_OFFSET,
            paddle_speed: PADDLE_SPEED,
            paddle_cooldown_ticks: PADDLE_COOLDOWN_TICKS,

            ball_radius: BALL_RADIUS,
            ball_spawn_offset: BALL_SPAWN_OFFSET,
            ball_speed: BALL_SPEED,

            initial_lives: INITIAL_LIVES,
            seed: 0,
        }
    }
}

impl Settings {
    /// Default settings with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Check every parameter the simulation relies on.
    ///
    /// A frequency of 1.0 or more is accepted: it produces an empty brick
    /// field and the session is won on its first step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("scene_width", self.scene_width)?;
        require_positive("scene_height", self.scene_height)?;
        require_positive("brick_width", self.brick_width)?;
        require_positive("brick_height", self.brick_height)?;
        require_positive("paddle_width", self.paddle_width)?;
        require_positive("paddle_height", self.paddle_height)?;
        require_positive("ball_radius", self.ball_radius)?;
        require_positive("ball_speed", self.ball_speed)?;
        if self.initial_lives == 0 {
            return Err(ConfigError::NonPositive {
                field: "initial_lives",
                value: 0.0,
            });
        }

        if self.paddle_width > self.scene_width {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.paddle_width,
                scene_width: self.scene_width,
            });
        }
        if self.blocked_frequency.is_nan() {
            return Err(ConfigError::InvalidFrequency(self.blocked_frequency));
        }
        Ok(())
    }

    /// Initial top-left corner of the paddle (centered horizontally)
    pub fn paddle_start(&self) -> Vec2 {
        Vec2::new(
            self.scene_width / 2.0 - self.paddle_width / 2.0,
            self.scene_height - self.paddle_offset,
        )
    }

    /// Ball spawn point (centered horizontally)
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.scene_width / 2.0,
            self.scene_height - self.ball_spawn_offset,
        )
    }

    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is unusable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
