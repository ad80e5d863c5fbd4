//! Vertical jump/gravity movement
//!
//! A discrete-step model: no velocity, just a fixed upward step while
//! ascending and a fixed downward step while falling. The apex is set by
//! `jump_height` alone, whatever `jump_power` is.

use super::position::SharedPosition;

/// Where an entity is in its jump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementPhase {
    Grounded,
    Ascending,
    Descending,
}

#[derive(Debug)]
pub struct Movement {
    pub position: SharedPosition,
    /// Ground line
    pub ground_y: f32,
    /// Height of the moving entity
    pub height: f32,
    /// Upward step per ascending tick
    pub jump_power: f32,
    /// Apex distance above the ground line
    pub jump_height: f32,
    /// Downward step per falling tick
    pub gravity: f32,
    is_jumping: bool,
}

impl Movement {
    pub fn new(
        position: SharedPosition,
        ground_y: f32,
        height: f32,
        jump_power: f32,
        jump_height: f32,
        gravity: f32,
    ) -> Self {
        Self {
            position,
            ground_y,
            height,
            jump_power,
            jump_height,
            gravity,
            is_jumping: false,
        }
    }

    /// Resting y coordinate
    #[inline]
    pub fn rest_y(&self) -> f32 {
        self.ground_y - self.height
    }

    /// y at or above which the jump stops ascending
    #[inline]
    pub fn apex_y(&self) -> f32 {
        self.ground_y - self.jump_height
    }

    /// Advance one tick. The four steps run in this order and later steps
    /// may override earlier ones within the same tick.
    pub fn update(&mut self) {
        if self.is_jumping {
            self.position.offset(0.0, -self.jump_power);
        }

        if self.position.y() <= self.apex_y() {
            self.is_jumping = false;
        }

        if !self.is_jumping && !self.is_grounded() {
            self.position.offset(0.0, self.gravity);
        }

        if self.position.y() >= self.rest_y() {
            self.position.set_y(self.rest_y());
        }
    }

    /// Start a jump. Returns false (and does nothing) when airborne.
    pub fn jump(&mut self) -> bool {
        if self.is_grounded() {
            self.is_jumping = true;
            true
        } else {
            false
        }
    }

    /// Exact comparison with the resting y; landing always snaps to it
    pub fn is_grounded(&self) -> bool {
        self.position.y() == self.rest_y()
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn phase(&self) -> MovementPhase {
        if self.is_jumping {
            MovementPhase::Ascending
        } else if self.is_grounded() {
            MovementPhase::Grounded
        } else {
            MovementPhase::Descending
        }
    }
}
