//! Collision detection for the play field
//!
//! Everything in the field is an axis-aligned rectangle. Coordinates are in
//! pixels with the origin at the top-left corner and y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Overlap test, half-open on every edge.
    ///
    /// Two boxes overlap iff both their x-intervals and y-intervals intersect
    /// with nonzero measure, so boxes that merely touch do not collide and a
    /// degenerate (zero-area) box never collides with anything.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        if self.size.x <= 0.0 || self.size.y <= 0.0 || other.size.x <= 0.0 || other.size.y <= 0.0
        {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// A projectile has left the field once its bottom edge is above y = 0
pub fn exited_top(aabb: &Aabb) -> bool {
    aabb.bottom() < 0.0
}

/// A falling object has left the field once its top edge passes the bottom
pub fn exited_bottom(aabb: &Aabb, field_height: f32) -> bool {
    aabb.top() > field_height
}
