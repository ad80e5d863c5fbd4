//! Game options
//!
//! Every tunable number lives here so a session can be rebuilt from scratch
//! on restart. Loadable from JSON; `validate` rejects configs the simulation
//! would otherwise quietly misbehave on.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Player options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerOptions {
    /// Fixed horizontal position
    pub start_x: f32,
    pub width: f32,
    pub height: f32,
    /// Animation timer increment per grounded tick
    pub play_speed: f32,
    /// Timer value at which the next frame is shown
    pub show_time: f32,
    /// Sprite references, one per animation frame
    pub image_sources: Vec<String>,
    /// Upward step per tick while ascending
    pub jump_power: f32,
    /// Apex height measured up from the ground line
    pub jump_height: f32,
    /// Downward step per tick while falling
    pub gravity: f32,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            start_x: 50.0,
            width: 40.0,
            height: 50.0,
            play_speed: 1.0,
            show_time: 8.0,
            image_sources: vec![
                "assets/runner_0.png".to_string(),
                "assets/runner_1.png".to_string(),
                "assets/runner_2.png".to_string(),
                "assets/runner_3.png".to_string(),
            ],
            jump_power: 4.0,
            jump_height: 150.0,
            gravity: 3.0,
        }
    }
}

/// Shape of a pooled obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObstacleDescriptor {
    Tree {
        trunk_width: f32,
        trunk_height: f32,
        crown_radius: f32,
    },
    Rock {
        width: f32,
        height: f32,
        /// Slab parameter, stepped through in 0.3 increments
        parts: f64,
    },
}

/// Spawner options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerOptions {
    /// Obstacle pool, allocated once per session
    pub obstacles: Vec<ObstacleDescriptor>,
    /// Maximum obstacles on screen at once
    pub max_active: usize,
    /// Leftward scroll per tick
    pub speed: f32,
    /// Smallest gap between consecutive spawns
    pub min_length: f32,
    /// Width of the random range added on top of `min_length`
    pub max_length: f32,
}

impl Default for SpawnerOptions {
    fn default() -> Self {
        Self {
            obstacles: vec![
                ObstacleDescriptor::Tree {
                    trunk_width: 8.0,
                    trunk_height: 25.0,
                    crown_radius: 12.0,
                },
                ObstacleDescriptor::Tree {
                    trunk_width: 10.0,
                    trunk_height: 30.0,
                    crown_radius: 16.0,
                },
                ObstacleDescriptor::Tree {
                    trunk_width: 6.0,
                    trunk_height: 15.0,
                    crown_radius: 10.0,
                },
                ObstacleDescriptor::Rock {
                    width: 30.0,
                    height: 25.0,
                    parts: 2.0,
                },
                ObstacleDescriptor::Rock {
                    width: 45.0,
                    height: 30.0,
                    parts: 3.0,
                },
                ObstacleDescriptor::Rock {
                    width: 20.0,
                    height: 20.0,
                    parts: 1.0,
                },
            ],
            max_active: 3,
            speed: 4.0,
            min_length: 200.0,
            max_length: 300.0,
        }
    }
}

/// Linear difficulty ramp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyOptions {
    /// Added each tick to speed, jump power, gravity and scroll speed
    pub speed_increment: f32,
    /// Ramp stops once the accumulated speed reaches this
    pub max_speed_increase: f32,
}

impl Default for DifficultyOptions {
    fn default() -> Self {
        Self {
            speed_increment: 0.001,
            max_speed_increase: 3.0,
        }
    }
}

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tick interval in milliseconds
    pub frame_rate: u32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Ground line sits this far above the canvas bottom
    pub ground_offset: f32,
    /// Seed for the spawner RNG
    pub seed: u64,
    pub player: PlayerOptions,
    pub spawner: SpawnerOptions,
    pub difficulty: DifficultyOptions,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE_MS,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ground_offset: GROUND_OFFSET,
            seed: 0x5eed,
            player: PlayerOptions::default(),
            spawner: SpawnerOptions::default(),
            difficulty: DifficultyOptions::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Y coordinate of the ground line (y grows downward)
    pub fn ground_y(&self) -> f32 {
        self.canvas_height - self.ground_offset
    }

    /// Obstacles enter the scene at the right edge of the canvas
    pub fn spawn_origin_x(&self) -> f32 {
        self.canvas_width
    }

    /// Check the assumptions the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.player;
        let s = &self.spawner;
        let d = &self.difficulty;

        non_negative("player.width", p.width)?;
        non_negative("player.height", p.height)?;
        non_negative("player.play_speed", p.play_speed)?;
        non_negative("player.show_time", p.show_time)?;
        positive("player.jump_power", p.jump_power)?;
        positive("player.gravity", p.gravity)?;
        non_negative("spawner.speed", s.speed)?;
        non_negative("spawner.min_length", s.min_length)?;
        non_negative("spawner.max_length", s.max_length)?;
        if !(s.min_length + s.max_length).is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "spawner.max_length",
                value: s.max_length,
            });
        }
        non_negative("difficulty.speed_increment", d.speed_increment)?;
        non_negative("canvas_width", self.canvas_width)?;
        non_negative("canvas_height", self.canvas_height)?;

        if p.image_sources.is_empty() {
            return Err(ConfigError::NoSprites);
        }
        if p.jump_height <= p.height {
            return Err(ConfigError::JumpHeightTooLow {
                jump_height: p.jump_height,
                player_height: p.height,
            });
        }
        if s.obstacles.is_empty() {
            return Err(ConfigError::EmptyObstaclePool);
        }
        if s.max_active > s.obstacles.len() {
            return Err(ConfigError::MaxActiveExceedsPool {
                max_active: s.max_active,
                pool_size: s.obstacles.len(),
            });
        }
        for obstacle in &s.obstacles {
            match *obstacle {
                ObstacleDescriptor::Tree {
                    trunk_width,
                    trunk_height,
                    crown_radius,
                } => {
                    non_negative("tree.trunk_width", trunk_width)?;
                    non_negative("tree.trunk_height", trunk_height)?;
                    non_negative("tree.crown_radius", crown_radius)?;
                }
                ObstacleDescriptor::Rock {
                    width,
                    height,
                    parts,
                } => {
                    non_negative("rock.width", width)?;
                    non_negative("rock.height", height)?;
                    if !(0.0..=MAX_ROCK_PARTS).contains(&parts) {
                        return Err(ConfigError::InvalidValue {
                            field: "rock.parts",
                            value: parts as f32,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_ground_and_origin() {
        let config = GameConfig::default();
        assert_eq!(config.ground_y(), CANVAS_HEIGHT - GROUND_OFFSET);
        assert_eq!(config.spawn_origin_x(), CANVAS_WIDTH);
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{
            "seed": 7,
            "spawner": {
                "obstacles": [
                    { "kind": "rock", "width": 10, "height": 10, "parts": 1 },
                    { "kind": "tree", "trunk_width": 4, "trunk_height": 10, "crown_radius": 5 }
                ],
                "max_active": 2
            }
        }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.spawner.obstacles.len(), 2);
        assert_eq!(config.spawner.max_active, 2);
        // Unspecified sections keep their defaults
        assert_eq!(config.player, PlayerOptions::default());
        assert_eq!(config.spawner.speed, SpawnerOptions::default().speed);
    }

    #[test]
    fn test_from_json_bad_syntax() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_empty_pool() {
        let mut config = GameConfig::default();
        config.spawner.obstacles.clear();
        config.spawner.max_active = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyObstaclePool)
        ));
    }

    #[test]
    fn test_rejects_max_active_over_pool() {
        let mut config = GameConfig::default();
        config.spawner.max_active = config.spawner.obstacles.len() + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MaxActiveExceedsPool { .. })
        ));
    }

    #[test]
    fn test_rejects_low_jump_height() {
        let mut config = GameConfig::default();
        config.player.jump_height = config.player.height;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::JumpHeightTooLow { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let mut config = GameConfig::default();
        config.spawner.speed = -1.0;
        match config.validate() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "spawner.speed"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_too_many_rock_parts() {
        let mut config = GameConfig::default();
        config.spawner.obstacles.push(ObstacleDescriptor::Rock {
            width: 10.0,
            height: 10.0,
            parts: 1e30,
        });
        match config.validate() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "rock.parts"),
            other => panic!("unexpected result: {:?}", other),
        }

        let mut config = GameConfig::default();
        config.spawner.obstacles[0] = ObstacleDescriptor::Rock {
            width: 10.0,
            height: 10.0,
            parts: f64::NAN,
        };
        assert!(config.validate().is_err());

        config.spawner.obstacles[0] = ObstacleDescriptor::Rock {
            width: 10.0,
            height: 10.0,
            parts: MAX_ROCK_PARTS,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_overflowing_gap_range() {
        let mut config = GameConfig::default();
        config.spawner.min_length = 2e38;
        config.spawner.max_length = 2e38;
        match config.validate() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "spawner.max_length"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_missing_sprites() {
        let mut config = GameConfig::default();
        config.player.image_sources.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoSprites)));
    }
}
