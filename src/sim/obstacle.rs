//! Pooled obstacles (trees and rocks)
//!
//! Each shape carries its own drawing parameters but exposes the same
//! bounding box to the spawner and collision checks.

use super::collider::Collider;
use super::position::SharedPosition;
use crate::config::ObstacleDescriptor;
use crate::consts::INACTIVE_X;
use crate::renderer::DrawSurface;

/// Rock slabs are drawn at this step through `0..parts`
const ROCK_PART_STEP: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleShape {
    /// Trunk with a round crown on top
    Tree {
        trunk_width: f32,
        trunk_height: f32,
        crown_radius: f32,
    },
    /// Stack of progressively narrower slabs
    Rock { parts: f64 },
}

#[derive(Debug)]
pub struct Obstacle {
    pub shape: ObstacleShape,
    pub collider: Collider,
}

impl Obstacle {
    pub fn tree(position: SharedPosition, trunk_width: f32, trunk_height: f32, crown_radius: f32) -> Self {
        // Width compares trunk width against the radius, not the diameter
        let width = if trunk_width > crown_radius {
            trunk_width
        } else {
            crown_radius * 2.0
        };
        let height = trunk_height + crown_radius * 2.0;
        Self {
            shape: ObstacleShape::Tree {
                trunk_width,
                trunk_height,
                crown_radius,
            },
            collider: Collider::new(position, width, height),
        }
    }

    pub fn rock(position: SharedPosition, width: f32, height: f32, parts: f64) -> Self {
        Self {
            shape: ObstacleShape::Rock { parts },
            collider: Collider::new(position, width, height),
        }
    }

    /// Build an inactive obstacle resting on `ground_y`
    pub fn from_descriptor(desc: &ObstacleDescriptor, ground_y: f32) -> Self {
        let position = SharedPosition::new(INACTIVE_X, 0.0);
        let obstacle = match *desc {
            ObstacleDescriptor::Tree {
                trunk_width,
                trunk_height,
                crown_radius,
            } => Self::tree(position, trunk_width, trunk_height, crown_radius),
            ObstacleDescriptor::Rock {
                width,
                height,
                parts,
            } => Self::rock(position, width, height, parts),
        };
        obstacle.park(ground_y);
        obstacle
    }

    /// Move to the inactive sentinel, sitting on the ground
    pub fn park(&self, ground_y: f32) {
        self.collider.position.set_x(INACTIVE_X);
        self.collider.position.set_y(ground_y - self.height());
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.collider.position.x()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.collider.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.collider.height
    }

    /// Draw with the surface's current fill colour
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let pos = self.collider.position.get();
        let w = self.width();
        let h = self.height();

        match self.shape {
            ObstacleShape::Tree {
                trunk_width,
                trunk_height,
                crown_radius,
            } => {
                let trunk_x = pos.x + w / 2.0 - trunk_width / 2.0;
                let trunk_y = pos.y + crown_radius * 2.0 - 1.0;
                surface.fill_rect(trunk_x, trunk_y, trunk_width, trunk_height);
                surface.fill_circle(pos.x + w / 2.0, pos.y + crown_radius, crown_radius);
            }
            ObstacleShape::Rock { parts } => {
                // Stepped in f64 so 0.9 parts still gives four slabs
                let mut i: f64 = 0.0;
                while i < parts {
                    let step = i as f32;
                    let part_w = w / (step + 1.0);
                    let part_h = h / (step + 2.0);
                    surface.fill_rect(pos.x + (w - part_w) / 2.0, pos.y + part_h, part_w, part_h);
                    i += ROCK_PART_STEP;
                }
            }
        }
    }
}
