//! Rolling set of pipe pairs
//!
//! A fixed number of pairs scroll left at constant speed. When a pair has
//! fully left the screen it is respawned in place at the right edge with a
//! fresh random gap, so the set never grows or shrinks.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Size;
use super::pipe::Pipe;
use crate::error::ConfigError;
use crate::settings::{PipesConfig, WindowConfig};

/// Upper and lower pipe sharing one x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipePair {
    pub upper: Pipe,
    pub lower: Pipe,
    /// Set once the bird has cleared this pair; reset on respawn
    pub passed: bool,
}

impl PipePair {
    #[inline]
    pub fn x(&self) -> f32 {
        self.upper.x()
    }

    /// Right edge of both pipes
    #[inline]
    pub fn right(&self) -> f32 {
        self.upper.x() + self.upper.width()
    }

    /// Vertical centre of the opening
    pub fn gap_center(&self) -> f32 {
        (self.upper.y() + self.upper.height() + self.lower.y()) / 2.0
    }

    fn advance(&mut self, velocity: f32) {
        self.upper.advance(velocity);
        self.lower.advance(velocity);
    }
}

/// The obstacle manager
#[derive(Debug, Clone)]
pub struct Pipes<R = Pcg32> {
    pairs: Vec<PipePair>,
    pipe_size: Size,
    gap: f32,
    interval: f32,
    velocity: f32,
    gap_low: i32,
    gap_high: i32,
    viewport_width: f32,
    rng: R,
}

impl<R: Rng> Pipes<R> {
    /// Build `config.quantity` staggered pairs starting at the right edge
    pub fn new(
        config: &PipesConfig,
        window: &WindowConfig,
        pipe_size: Size,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate(window, pipe_size)?;
        let (gap_low, gap_high) = config.gap_range(window);

        let mut pipes = Self {
            pairs: Vec::with_capacity(config.quantity),
            pipe_size,
            gap: config.gap,
            interval: config.interval(window, pipe_size),
            velocity: config.velocity,
            gap_low,
            gap_high,
            viewport_width: window.width,
            rng,
        };
        for index in 0..config.quantity {
            let pair = pipes.spawn_pair(index);
            pipes.pairs.push(pair);
        }
        Ok(pipes)
    }

    /// Scroll every pair and respawn those that have left the screen
    pub fn update(&mut self) {
        for slot in 0..self.pairs.len() {
            self.pairs[slot].advance(self.velocity);
            if self.pairs[slot].x() < -self.pipe_size.width {
                let pair = self.spawn_pair(0);
                self.pairs[slot] = pair;
                log::debug!(
                    "Recycled pipe pair {slot} (gap top {:.0})",
                    self.pairs[slot].upper.y() + self.pipe_size.height
                );
            }
        }
    }

    /// Fresh pair at stagger `index` (0 = flush with the right edge)
    fn spawn_pair(&mut self, index: usize) -> PipePair {
        let x = index as f32 * (self.pipe_size.width + self.interval) + self.viewport_width;
        let draw = self.rng.random_range(self.gap_low..=self.gap_high);
        let upper_y = draw as f32 - self.pipe_size.height;
        let lower_y = upper_y + self.pipe_size.height + self.gap;
        PipePair {
            upper: Pipe::new(Vec2::new(x, upper_y), self.pipe_size),
            lower: Pipe::new(Vec2::new(x, lower_y), self.pipe_size),
            passed: false,
        }
    }
}

impl<R> Pipes<R> {
    pub fn pairs(&self) -> &[PipePair] {
        &self.pairs
    }

    /// Pairs that start within the viewport
    pub fn visible(&self) -> impl Iterator<Item = &PipePair> {
        self.pairs
            .iter()
            .filter(move |pair| pair.x() <= self.viewport_width)
    }

    /// Nearest pair whose right edge is still ahead of `x`
    pub fn next_ahead(&self, x: f32) -> Option<&PipePair> {
        self.pairs
            .iter()
            .filter(|pair| pair.right() >= x)
            .min_by(|a, b| a.x().total_cmp(&b.x()))
    }

    /// Mark pairs whose right edge is behind `x`; returns how many were newly passed
    pub fn mark_passed(&mut self, x: f32) -> u32 {
        let mut count = 0;
        for pair in self.pairs.iter_mut().filter(|p| !p.passed && p.right() < x) {
            pair.passed = true;
            count += 1;
        }
        count
    }

    pub fn pipe_size(&self) -> Size {
        self.pipe_size
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Inclusive range of the raw gap draw
    pub fn gap_range(&self) -> (i32, i32) {
        (self.gap_low, self.gap_high)
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Mutable access for tests that need to position a pair exactly
    #[cfg(test)]
    pub(crate) fn pairs_mut(&mut self) -> &mut [PipePair] {
        &mut self.pairs
    }
}
