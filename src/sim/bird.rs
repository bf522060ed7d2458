//! The player-controlled bird
//!
//! Discrete-time physics: one tick is one frame, velocity is in pixels per
//! tick and position is integrated with explicit Euler.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Rect, Size};
use super::pipes::PipePair;
use crate::consts::ANIMATION_STRIDE;
use crate::error::ConfigError;
use crate::settings::BirdConfig;

/// Wing position of an animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wing {
    Up,
    Mid,
    Down,
}

impl Wing {
    pub const ALL: [Wing; 3] = [Wing::Up, Wing::Mid, Wing::Down];

    #[inline]
    fn index(self) -> usize {
        match self {
            Wing::Up => 0,
            Wing::Mid => 1,
            Wing::Down => 2,
        }
    }
}

/// Flap cycle, sampled once every `ANIMATION_STRIDE` ticks
const WING_CYCLE: [Wing; 4] = [Wing::Mid, Wing::Down, Wing::Mid, Wing::Up];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pos: Vec2,
    velocity: f32,
    /// Degrees, positive = nose up
    angle: f32,
    alive: bool,
    /// Index into `WING_CYCLE`; starts on the last entry so the first advance wraps to 0
    cursor: usize,
    flap_pending: bool,
    /// Sizes of the Up, Mid and Down frames
    frames: [Size; 3],
    floor: f32,
    config: BirdConfig,
}

impl Bird {
    /// Bird at the configured start position. `frames` are the Up, Mid and
    /// Down sprite sizes; `floor` is the y at which the bird hits the ground.
    pub fn new(config: &BirdConfig, frames: [Size; 3], floor: f32) -> Result<Self, ConfigError> {
        config.validate(&frames)?;
        Ok(Self {
            pos: Vec2::new(config.start_x, config.start_y),
            velocity: config.start_velocity,
            angle: config.start_angle,
            alive: true,
            cursor: WING_CYCLE.len() - 1,
            flap_pending: false,
            frames,
            floor,
            config: config.clone(),
        })
    }

    /// Queue an upward impulse for the next `update`. Repeated calls before
    /// that update still give a single impulse.
    pub fn flap(&mut self) {
        self.flap_pending = true;
    }

    /// Advance one tick. The caller stops calling this once the bird is dead.
    pub fn update(&mut self, tick: u32, obstacles: &[PipePair]) {
        let flapped = self.flap_pending;
        if flapped {
            self.flap_pending = false;
            self.velocity = self.config.flap_impulse;
            self.angle = -self.config.max_rotation / 2.0;
            log::debug!("Flap at y={:.1}", self.pos.y);
        } else if self.velocity < self.config.max_velocity {
            self.velocity = (self.velocity + self.config.gravity).min(self.config.max_velocity);
        }
        self.pos.y += self.velocity;

        if tick % ANIMATION_STRIDE == 0 {
            self.cursor = (self.cursor + 1) % WING_CYCLE.len();
        }

        if self.collides(obstacles) {
            self.alive = false;
        }

        // The flap tick keeps its fresh nose-up angle
        if !flapped && self.angle > self.config.max_rotation {
            self.angle -= self.config.angular_velocity;
        }
    }

    fn collides(&self, obstacles: &[PipePair]) -> bool {
        let hitbox = self.hitbox();
        self.pos.y >= self.floor
            || obstacles.iter().any(|pair| {
                hitbox.overlaps(&pair.upper.rect()) || hitbox.overlaps(&pair.lower.rect())
            })
    }

    /// Current frame's bounds shrunk by the feather offset
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos, self.frame_size()).inset(self.config.feather_offset)
    }

    pub fn wing(&self) -> Wing {
        WING_CYCLE[self.cursor]
    }

    pub fn frame_size(&self) -> Size {
        self.frames[self.wing().index()]
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn floor(&self) -> f32 {
        self.floor
    }

    /// Overwrite kinematic state, for scripted setups and tests
    pub fn set_motion(&mut self, pos: Vec2, velocity: f32, angle: f32) {
        self.pos = pos;
        self.velocity = velocity;
        self.angle = angle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::pipe::Pipe;

    const FRAME: Size = Size::new(34.0, 24.0);
    const FLOOR: f32 = 409.6;

    fn bird() -> Bird {
        Bird::new(&BirdConfig::default(), [FRAME; 3], FLOOR).unwrap()
    }

    fn pair_at(x: f32, gap_top: f32) -> PipePair {
        let size = Size::new(52.0, 320.0);
        PipePair {
            upper: Pipe::new(Vec2::new(x, gap_top - size.height), size),
            lower: Pipe::new(Vec2::new(x, gap_top + 100.0), size),
            passed: false,
        }
    }

    #[test]
    fn test_free_fall_from_flap_velocity() {
        let mut bird = bird();
        bird.set_motion(Vec2::new(50.0, 256.0), -9.0, 20.0);
        bird.update(1, &[]);
        assert_eq!(bird.velocity(), -8.0);
        assert_eq!(bird.position().y, 248.0);
        assert_eq!(bird.angle(), 17.0);
        assert!(bird.is_alive());
    }

    #[test]
    fn test_flap_sets_impulse_and_angle() {
        let mut bird = bird();
        bird.set_motion(Vec2::new(50.0, 200.0), 7.0, -60.0);
        bird.flap();
        bird.flap();
        bird.update(1, &[]);
        assert_eq!(bird.velocity(), -9.0);
        assert_eq!(bird.angle(), 45.0);
        assert_eq!(bird.position().y, 191.0);

        // Only one impulse: next tick falls again and pitches down
        bird.update(2, &[]);
        assert_eq!(bird.velocity(), -8.0);
        assert_eq!(bird.angle(), 42.0);
    }

    #[test]
    fn test_flap_waits_for_update() {
        let mut bird = bird();
        let before = bird.velocity();
        bird.flap();
        assert_eq!(bird.velocity(), before);
    }

    #[test]
    fn test_velocity_caps_at_max() {
        let mut bird = bird();
        bird.set_motion(Vec2::new(50.0, -5000.0), 0.0, 0.0);
        for tick in 0..30 {
            bird.update(tick, &[]);
            assert!(bird.velocity() <= 10.0);
        }
        assert_eq!(bird.velocity(), 10.0);
    }

    #[test]
    fn test_rotation_stops_at_limit() {
        let mut bird = bird();
        bird.set_motion(Vec2::new(50.0, -5000.0), 0.0, -88.0);
        bird.update(1, &[]);
        assert_eq!(bird.angle(), -91.0);
        bird.update(2, &[]);
        assert_eq!(bird.angle(), -91.0);
    }

    #[test]
    fn test_wing_cycle() {
        let mut bird = bird();
        assert_eq!(bird.wing(), Wing::Up);
        bird.set_motion(Vec2::new(50.0, -5000.0), 0.0, 0.0);

        let mut seen = Vec::new();
        for tick in 0..20 {
            bird.update(tick, &[]);
            if tick % ANIMATION_STRIDE == 0 {
                seen.push(bird.wing());
            }
        }
        assert_eq!(seen, vec![Wing::Mid, Wing::Down, Wing::Mid, Wing::Up]);
    }

    #[test]
    fn test_wing_holds_between_strides() {
        let mut bird = bird();
        bird.set_motion(Vec2::new(50.0, -5000.0), 0.0, 0.0);
        bird.update(0, &[]);
        assert_eq!(bird.wing(), Wing::Mid);
        for tick in 1..5 {
            bird.update(tick, &[]);
            assert_eq!(bird.wing(), Wing::Mid);
        }
    }

    #[test]
    fn test_floor_kills_without_obstacles() {
        let mut bird = bird();
        bird.set_motion(Vec2::new(50.0, bird.floor()), -1.0, 0.0);
        assert_eq!(bird.floor(), FLOOR);
        // -1 + 1 = 0 velocity, stays exactly on the floor
        bird.update(1, &[]);
        assert_eq!(bird.position().y, FLOOR);
        assert!(!bird.is_alive());
    }

    #[test]
    fn test_pipe_collision_kills() {
        let mut bird = bird();
        // Gap at 300..400 while the bird flies at ~248
        bird.update(1, &[pair_at(40.0, 300.0)]);
        assert!(!bird.is_alive());
    }

    #[test]
    fn test_clear_gap_survives() {
        let mut bird = bird();
        bird.update(1, &[pair_at(40.0, 200.0)]);
        assert!(bird.is_alive());
    }

    #[test]
    fn test_feather_forgives_near_miss() {
        let mut bird = bird();
        // Bird spans y 248..272 after the update; lower pipe top at 270 grazes the sprite
        bird.update(1, &[pair_at(40.0, 170.0)]);
        assert!(bird.is_alive());
    }

    #[test]
    fn test_death_is_terminal() {
        let mut bird = bird();
        bird.set_motion(Vec2::new(50.0, 500.0), 0.0, 0.0);
        bird.update(1, &[]);
        assert!(!bird.is_alive());
        bird.set_motion(Vec2::new(50.0, 100.0), 0.0, 0.0);
        bird.flap();
        bird.update(2, &[]);
        assert!(!bird.is_alive());
    }

    #[test]
    fn test_oversized_feather_rejected() {
        let config = BirdConfig {
            feather_offset: 12.0,
            ..Default::default()
        };
        assert!(matches!(
            Bird::new(&config, [FRAME; 3], FLOOR),
            Err(ConfigError::FeatherTooLarge { .. })
        ));
    }
}
