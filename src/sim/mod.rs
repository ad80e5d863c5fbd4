//! Fixed-tick simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - Fixed step per tick, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (pool index, spawn order)
//! - Draws only through `DrawSurface`, never touches a real canvas

pub mod animator;
pub mod background;
pub mod collider;
pub mod movement;
pub mod obstacle;
pub mod player;
pub mod position;
pub mod spawner;
pub mod state;
pub mod tick;

pub use animator::Animator;
pub use background::Background;
pub use collider::Collider;
pub use movement::{Movement, MovementPhase};
pub use obstacle::{Obstacle, ObstacleShape};
pub use player::Player;
pub use position::SharedPosition;
pub use spawner::Spawner;
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, tick};
