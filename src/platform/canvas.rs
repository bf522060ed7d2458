//! Write-only drawing surface

use glam::Vec2;

use super::assets::Sprite;

/// Where frames go. The simulation never reads anything back.
pub trait Canvas {
    /// Place a sprite with its top-left corner at `pos`
    fn draw(&mut self, sprite: Sprite, pos: Vec2);
    /// Rotate a sprite by `degrees` (counter-clockwise) before placing it
    fn draw_rotated(&mut self, sprite: Sprite, pos: Vec2, degrees: f32);
    /// Make the finished frame visible
    fn present(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite { sprite: Sprite, pos: Vec2 },
    Rotated { sprite: Sprite, pos: Vec2, degrees: f32 },
}

/// Keeps the draw calls of the last presented frame
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pending: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl Canvas for RecordingCanvas {
    fn draw(&mut self, sprite: Sprite, pos: Vec2) {
        self.pending.push(DrawCommand::Sprite { sprite, pos });
    }

    fn draw_rotated(&mut self, sprite: Sprite, pos: Vec2, degrees: f32) {
        self.pending.push(DrawCommand::Rotated {
            sprite,
            pos,
            degrees,
        });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames += 1;
    }
}
