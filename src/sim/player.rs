//! The runner

use super::animator::Animator;
use super::collider::Collider;
use super::movement::Movement;
use super::position::SharedPosition;
use crate::config::PlayerOptions;
use crate::renderer::DrawSurface;

#[derive(Debug)]
pub struct Player {
    pub position: SharedPosition,
    pub movement: Movement,
    /// Shares `position` with `movement`
    pub collider: Collider,
    /// Indexes the configured sprite list
    pub animator: Animator,
}

impl Player {
    /// Create a player standing on the ground
    pub fn new(options: &PlayerOptions, ground_y: f32) -> Self {
        let position = SharedPosition::new(options.start_x, ground_y - options.height);
        let movement = Movement::new(
            position.clone(),
            ground_y,
            options.height,
            options.jump_power,
            options.jump_height,
            options.gravity,
        );
        let collider = Collider::new(position.clone(), options.width, options.height);
        let animator = Animator::new(
            options.play_speed,
            options.show_time,
            options.image_sources.len(),
        );

        Self {
            position,
            movement,
            collider,
            animator,
        }
    }

    /// Move, and run the animation only while on the ground
    pub fn update(&mut self) {
        self.movement.update();
        if self.movement.is_grounded() {
            self.animator.update();
        }
    }

    /// Jump if grounded, restarting the run cycle. Returns whether a jump began.
    pub fn jump(&mut self) -> bool {
        let started = self.movement.jump();
        if started {
            self.animator.reset();
        }
        started
    }

    pub fn overlaps_any<'a, I>(&self, others: I) -> bool
    where
        I: IntoIterator<Item = &'a Collider>,
    {
        self.collider.overlaps_any(others)
    }

    /// Sprite for the current animation frame, picked from the list the
    /// player was built with
    pub fn current_sprite<'a>(&self, sprites: &'a [String]) -> Option<&'a str> {
        sprites.get(self.animator.current_frame()).map(String::as_str)
    }

    pub fn draw(&self, sprites: &[String], surface: &mut dyn DrawSurface) {
        if let Some(sprite) = self.current_sprite(sprites) {
            let pos = self.position.get();
            surface.draw_sprite(sprite, pos.x, pos.y, self.collider.width, self.collider.height);
        }
    }
}
