//! Game state
//!
//! One `GameState` is one run. Restarting throws the whole thing away and
//! builds a fresh one from the same config.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::background::Background;
use super::player::Player;
use super::spawner::Spawner;
use crate::config::GameConfig;
use crate::consts::BACKGROUND_MAX;
use crate::error::ConfigError;

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player left the ground
    Jumped,
    /// Pool obstacle with this index entered the scene
    ObstacleSpawned { index: usize },
    /// Player hit an obstacle
    GameOver { score: u64 },
    /// Fresh run started
    Restarted,
}

#[derive(Debug)]
pub struct GameState {
    /// Config this run was built from
    pub config: GameConfig,
    /// Seed of this run's spawner RNG
    pub seed: u64,
    pub background: Background,
    pub player: Player,
    pub spawner: Spawner,
    /// Ticks survived
    pub score: u64,
    /// Accumulated difficulty ramp
    pub speed: f32,
    pub game_over: bool,
}

impl GameState {
    /// Validate the config and build the first run
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed;
        Ok(Self::build(config, seed))
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        let ground_y = config.ground_y();
        let background = Background::new(BACKGROUND_MAX, config.canvas_width, config.canvas_height);
        let player = Player::new(&config.player, ground_y);
        let spawner = Spawner::new(
            &config.spawner,
            config.spawn_origin_x(),
            ground_y,
            Pcg32::seed_from_u64(seed),
        );

        Self {
            config,
            seed,
            background,
            player,
            spawner,
            score: 0,
            speed: 0.0,
            game_over: false,
        }
    }

    /// Replace this run with a brand new one. The next seed comes from the
    /// current RNG stream so a series of runs stays reproducible.
    pub fn restart(&mut self) {
        let seed = self.spawner.next_seed();
        let config = self.config.clone();
        *self = Self::build(config, seed);
        log::info!("Game restarted with seed: {}", seed);
    }

    pub fn ground_y(&self) -> f32 {
        self.config.ground_y()
    }

    /// Ramp speed, jump power, gravity and scroll speed by one increment,
    /// until the accumulated speed reaches the cap
    pub fn increase_difficulty(&mut self) {
        let d = &self.config.difficulty;
        if self.speed < d.max_speed_increase {
            let inc = d.speed_increment;
            self.speed += inc;
            self.player.movement.jump_power += inc;
            self.player.movement.gravity += inc;
            self.spawner.speed += inc;
        }
    }

    /// True if the player touches any on-screen obstacle
    pub fn player_collides(&self) -> bool {
        self.player.overlaps_any(self.spawner.active_colliders())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::INACTIVE_X;

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::default()).unwrap();
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 0.0);
        assert!(!state.game_over);
        assert!(state.player.movement.is_grounded());
        assert_eq!(state.spawner.active_count(), 0);
        assert!(state.spawner.pool().iter().all(|o| o.x() == INACTIVE_X));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.spawner.obstacles.clear();
        assert!(GameState::new(config).is_err());
    }

    #[test]
    fn test_difficulty_ramp_caps() {
        let mut config = GameConfig::default();
        config.difficulty.speed_increment = 0.5;
        config.difficulty.max_speed_increase = 1.0;
        let base_gravity = config.player.gravity;
        let base_scroll = config.spawner.speed;
        let mut state = GameState::new(config).unwrap();

        for _ in 0..10 {
            state.increase_difficulty();
        }
        assert_eq!(state.speed, 1.0);
        assert_eq!(state.player.movement.gravity, base_gravity + 1.0);
        assert_eq!(state.spawner.speed, base_scroll + 1.0);
    }

    #[test]
    fn test_restart_is_deterministic() {
        let mut a = GameState::new(GameConfig::default()).unwrap();
        let mut b = GameState::new(GameConfig::default()).unwrap();
        a.restart();
        b.restart();
        assert_eq!(a.seed, b.seed);
        assert_ne!(a.seed, GameConfig::default().seed);
    }
}
