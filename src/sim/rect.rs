//! Axis-aligned rectangles in stage space
//!
//! Stage space is screen-like: x grows to the right, y grows downward, so a
//! rectangle's `min` is its top-left corner and `max` its bottom-right.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner (left, top)
    pub min: Vec2,
    /// Bottom-right corner (right, bottom)
    pub max: Vec2,
}

impl Rect {
    /// Build from a top-left corner and a (width, height) extent
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Build from explicit edges
    pub fn from_edges(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            max: Vec2::new(right, bottom),
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    /// Inclusive overlap test (see [`overlaps`])
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

/// Two rectangles overlap unless one lies strictly beyond the other on
/// some axis. Coincident edges count as a collision.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    !(a.right() < b.left()
        || a.left() > b.right()
        || a.bottom() < b.top()
        || a.top() > b.bottom())
}
