//! Day/night grey oscillator
//!
//! The background level sweeps between black and white one step per tick;
//! everything else is drawn in the inverse shade so it stays visible.

use crate::renderer::{Color, DrawSurface};

#[derive(Debug, Clone)]
pub struct Background {
    pub max: u8,
    pub width: f32,
    pub height: f32,
    level: u8,
    decreasing: bool,
}

impl Background {
    pub fn new(max: u8, width: f32, height: f32) -> Self {
        Self {
            max,
            width,
            height,
            level: max,
            decreasing: true,
        }
    }

    pub fn update(&mut self) {
        self.level = if self.decreasing {
            self.level.saturating_sub(1)
        } else {
            self.level.saturating_add(1).min(self.max)
        };

        if self.level == self.max {
            self.decreasing = true;
        } else if self.level == 0 {
            self.decreasing = false;
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn color(&self) -> Color {
        Color::grey(self.level)
    }

    /// Foreground shade for everything drawn on top
    pub fn inverse_color(&self) -> Color {
        Color::grey(self.max - self.level)
    }

    /// Fill the canvas, then leave the inverse shade as the active colours
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_fill_color(self.color());
        surface.fill_rect(0.0, 0.0, self.width, self.height);

        let inverse = self.inverse_color();
        surface.set_fill_color(inverse);
        surface.set_stroke_color(inverse);
    }
}
