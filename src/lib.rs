//! Flash Runner - an endless-runner arcade game
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (movement, collisions, spawning, game state)
//! - `renderer`: Draw-surface abstraction and scene drawing
//! - `platform`: Browser glue (canvas surface, keyboard mapping)
//! - `config`: Data-driven game options

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;

/// Game configuration constants
pub mod consts {
    /// Default tick interval in milliseconds
    pub const FRAME_RATE_MS: u32 = 10;

    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 250.0;

    /// Distance from the bottom of the canvas to the ground line
    pub const GROUND_OFFSET: f32 = 30.0;
    /// Thickness of the drawn ground strip
    pub const GROUND_THICKNESS: f32 = 3.0;

    /// Brightest background level (white)
    pub const BACKGROUND_MAX: u8 = 255;

    /// Inactive obstacles are parked here
    pub const INACTIVE_X: f32 = -1.0;

    /// Score text anchor
    pub const SCORE_TEXT_POS: (f32, f32) = (10.0, 20.0);

    /// Upper bound on a rock's slab parameter
    pub const MAX_ROCK_PARTS: f64 = 16.0;
}
