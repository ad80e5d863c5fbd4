//! Shared entity position
//!
//! An entity's movement and collider must see the same coordinates, so the
//! position lives in one reference-counted cell and both hold a handle to it.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

/// Handle to a mutable 2D position shared by the components of one entity.
/// Cloning the handle shares the cell; it never copies the position.
#[derive(Debug, Clone, Default)]
pub struct SharedPosition(Rc<Cell<Vec2>>);

impl SharedPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Rc::new(Cell::new(Vec2::new(x, y))))
    }

    #[inline]
    pub fn get(&self) -> Vec2 {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, pos: Vec2) {
        self.0.set(pos);
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0.get().x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0.get().y
    }

    pub fn set_x(&self, x: f32) {
        let mut pos = self.0.get();
        pos.x = x;
        self.0.set(pos);
    }

    pub fn set_y(&self, y: f32) {
        let mut pos = self.0.get();
        pos.y = y;
        self.0.set(pos);
    }

    /// Move in place by (dx, dy)
    pub fn offset(&self, dx: f32, dy: f32) {
        self.0.set(self.0.get() + Vec2::new(dx, dy));
    }

    /// True if both handles point at the same cell
    pub fn ptr_eq(&self, other: &SharedPosition) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_visible_through_clone() {
        let a = SharedPosition::new(1.0, 2.0);
        let b = a.clone();
        a.offset(3.0, -1.0);
        assert_eq!(b.get(), Vec2::new(4.0, 1.0));
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_independent_positions() {
        let a = SharedPosition::new(0.0, 0.0);
        let b = SharedPosition::new(0.0, 0.0);
        b.set_x(5.0);
        assert_eq!(a.x(), 0.0);
        assert!(!a.ptr_eq(&b));
    }
}
