//! Configuration errors
//!
//! The simulation itself never fails; everything that could make it degrade
//! silently is rejected up front when a config is validated.

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    /// Config JSON could not be parsed
    Parse(serde_json::Error),
    /// Spawner was given no obstacles to recycle
    EmptyObstaclePool,
    /// More concurrent obstacles requested than the pool holds
    MaxActiveExceedsPool { max_active: usize, pool_size: usize },
    /// Player has no animation frames
    NoSprites,
    /// A size, speed or gap that must be non-negative (or positive) isn't
    InvalidValue { field: &'static str, value: f32 },
    /// Jump apex would sit inside the ground
    JumpHeightTooLow { jump_height: f32, player_height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid config JSON: {}", e),
            ConfigError::EmptyObstaclePool => write!(f, "obstacle pool is empty"),
            ConfigError::MaxActiveExceedsPool {
                max_active,
                pool_size,
            } => write!(
                f,
                "max_active ({}) exceeds obstacle pool size ({})",
                max_active, pool_size
            ),
            ConfigError::NoSprites => write!(f, "player needs at least one image source"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "invalid value for {}: {}", field, value)
            }
            ConfigError::JumpHeightTooLow {
                jump_height,
                player_height,
            } => write!(
                f,
                "jump_height ({}) must be greater than player height ({})",
                jump_height, player_height
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
