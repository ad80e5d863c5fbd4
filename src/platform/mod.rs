//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Keyboard input mapping
//! - The canvas 2D draw surface (wasm32 only)

pub mod input;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use input::map_key;
