//! Axis-aligned geometry for hitboxes and sprites
//!
//! Positions are `glam::Vec2` (top-left corner, y grows downward).
//! Extents get their own `Size` type so a width/height pair can never be
//! mistaken for a position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Width and height of a sprite or hitbox, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Shorter of the two sides
    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// True when both sides are strictly positive
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// An axis-aligned rectangle: top-left position plus size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Size,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Size) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.height
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            pos: self.pos + Vec2::splat(amount),
            size: Size::new(
                self.size.width - 2.0 * amount,
                self.size.height - 2.0 * amount,
            ),
        }
    }

    /// Overlap test with half-open edges
    ///
    /// Rectangles that merely touch do not overlap, and a rectangle with a
    /// non-positive side never overlaps anything. Symmetric in its arguments.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if !self.size.is_positive() || !other.size.is_positive() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
