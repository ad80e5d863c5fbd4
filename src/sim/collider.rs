//! Axis-aligned bounding boxes
//!
//! Boxes are anchored at their top-left corner with y growing downward.
//! Intervals are open: two boxes that only share an edge do not overlap.

use super::position::SharedPosition;

#[derive(Debug)]
pub struct Collider {
    pub position: SharedPosition,
    pub width: f32,
    pub height: f32,
}

impl Collider {
    pub fn new(position: SharedPosition, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0);
        Self {
            position,
            width,
            height,
        }
    }

    /// Check if this box overlaps another
    pub fn overlaps(&self, other: &Collider) -> bool {
        let a = self.position.get();
        let b = other.position.get();
        a.x < b.x + other.width
            && a.x + self.width > b.x
            && a.y < b.y + other.height
            && a.y + self.height > b.y
    }

    /// Check against a list of boxes, stopping at the first hit
    pub fn overlaps_any<'a, I>(&self, others: I) -> bool
    where
        I: IntoIterator<Item = &'a Collider>,
    {
        others.into_iter().any(|other| self.overlaps(other))
    }
}
