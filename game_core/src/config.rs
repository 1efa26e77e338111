use serde::Deserialize;
use thiserror::Error;

use crate::params::Params;

/// Reasons a [`Config`] cannot drive a game session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("play field must be positive, got {width}x{height}")]
    EmptyField { width: f32, height: f32 },
    #[error("player ({player_width} wide) does not fit a field {field_width} wide")]
    PlayerTooWide { player_width: f32, field_width: f32 },
    #[error("player speed must be positive, got {0}")]
    PlayerSpeed(f32),
    #[error("obstacle {what} range is empty or negative: [{min}, {max})")]
    ObstacleRange {
        what: &'static str,
        min: f32,
        max: f32,
    },
    #[error("obstacles up to {max_width} wide do not fit a field {field_width} wide")]
    ObstacleTooWide { max_width: f32, field_width: f32 },
    #[error("spawn interval floor must be non-zero and at most the initial interval ({min} > {initial})")]
    SpawnInterval { initial: u32, min: u32 },
    #[error("survival bonus period must be non-zero")]
    SurvivalPeriod,
}

/// Game configuration
///
/// Every field falls back to its [`Params`] value when absent, so a partial
/// JSON object is a valid override.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_bottom_offset: f32,
    pub player_speed: f32,
    pub obstacle_min_width: f32,
    pub obstacle_max_width: f32,
    pub obstacle_min_height: f32,
    pub obstacle_max_height: f32,
    pub obstacle_min_speed: f32,
    pub obstacle_max_speed: f32,
    pub spawn_interval_initial: u32,
    pub spawn_interval_min: u32,
    pub dodge_score: u32,
    pub survival_bonus: u32,
    pub survival_bonus_frames: u64,
    pub score_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            player_width: Params::PLAYER_WIDTH,
            player_height: Params::PLAYER_HEIGHT,
            player_bottom_offset: Params::PLAYER_BOTTOM_OFFSET,
            player_speed: Params::PLAYER_SPEED,
            obstacle_min_width: Params::OBSTACLE_MIN_WIDTH,
            obstacle_max_width: Params::OBSTACLE_MAX_WIDTH,
            obstacle_min_height: Params::OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: Params::OBSTACLE_MAX_HEIGHT,
            obstacle_min_speed: Params::OBSTACLE_MIN_SPEED,
            obstacle_max_speed: Params::OBSTACLE_MAX_SPEED,
            spawn_interval_initial: Params::SPAWN_INTERVAL_INITIAL,
            spawn_interval_min: Params::SPAWN_INTERVAL_MIN,
            dodge_score: Params::DODGE_SCORE,
            survival_bonus: Params::SURVIVAL_BONUS,
            survival_bonus_frames: Params::SURVIVAL_BONUS_FRAMES,
            score_label: "Score".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same tuning, different play field size (e.g. the real canvas size)
    pub fn with_field(mut self, width: f32, height: f32) -> Self {
        self.field_width = width;
        self.field_height = height;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::EmptyField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if !(self.player_width > 0.0 && self.player_width <= self.field_width) {
            return Err(ConfigError::PlayerTooWide {
                player_width: self.player_width,
                field_width: self.field_width,
            });
        }
        if !(self.player_speed > 0.0) {
            return Err(ConfigError::PlayerSpeed(self.player_speed));
        }

        let ranges = [
            ("width", self.obstacle_min_width, self.obstacle_max_width),
            ("height", self.obstacle_min_height, self.obstacle_max_height),
            ("speed", self.obstacle_min_speed, self.obstacle_max_speed),
        ];
        for (what, min, max) in ranges {
            // gen_range on a half-open range needs min < max
            if !(min > 0.0 && min < max) {
                return Err(ConfigError::ObstacleRange { what, min, max });
            }
        }
        if self.obstacle_max_width > self.field_width {
            return Err(ConfigError::ObstacleTooWide {
                max_width: self.obstacle_max_width,
                field_width: self.field_width,
            });
        }

        if self.spawn_interval_min == 0 || self.spawn_interval_min > self.spawn_interval_initial {
            return Err(ConfigError::SpawnInterval {
                initial: self.spawn_interval_initial,
                min: self.spawn_interval_min,
            });
        }
        if self.survival_bonus_frames == 0 {
            return Err(ConfigError::SurvivalPeriod);
        }
        Ok(())
    }

    /// Rightmost x the player car may occupy
    pub fn player_max_x(&self) -> f32 {
        self.field_width - self.player_width
    }

    /// Clamp player X to the play field
    pub fn clamp_player_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.player_max_x())
    }

    /// Horizontally centered player X
    pub fn player_start_x(&self) -> f32 {
        self.field_width / 2.0 - self.player_width / 2.0
    }

    pub fn player_y(&self) -> f32 {
        self.field_height - self.player_bottom_offset
    }

    pub fn score_text(&self, score: u32) -> String {
        format!("{}: {}", self.score_label, score)
    }
}
