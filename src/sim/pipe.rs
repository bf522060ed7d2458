//! A single rectangular obstacle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Rect, Size};

/// One pipe sprite's hitbox. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pos: Vec2,
    size: Size,
}

impl Pipe {
    pub fn new(pos: Vec2, size: Size) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.pos.x = x;
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Translate horizontally by `velocity` pixels
    #[inline]
    pub fn advance(&mut self, velocity: f32) {
        self.pos.x += velocity;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}
