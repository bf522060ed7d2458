//! Session state
//!
//! Everything the frame loop owns for one play session lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pipes::Pipes;
use crate::error::ConfigError;
use crate::platform::assets::{Sprite, SpriteSheet};
use crate::settings::{GameConfig, WindowConfig};

/// Two copies of the ground sprite leapfrogging each other
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ground {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
    speed: f32,
    wrap: f32,
}

impl Ground {
    pub fn new(window: &WindowConfig, speed: f32) -> Self {
        Self {
            x1: 0.0,
            x2: window.width,
            y: window.base_y(),
            speed,
            wrap: window.width,
        }
    }

    /// Scroll both segments; one that runs off the left jumps back to the right
    pub fn advance(&mut self) {
        let (speed, wrap) = (self.speed, self.wrap);
        for x in [&mut self.x1, &mut self.x2] {
            *x -= speed;
            if *x <= -wrap {
                *x = wrap;
            }
        }
    }
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Seed of the pipe gap generator
    pub seed: u64,
    pub window: WindowConfig,
    pub bird: Bird,
    pub pipes: Pipes<Pcg32>,
    pub ground: Ground,
    /// Loop counter, wraps at `TICK_PERIOD`
    pub tick: u32,
    /// Ticks simulated while the bird was alive
    pub ticks_alive: u64,
    /// Pipe pairs cleared
    pub score: u32,
}

impl SessionState {
    pub fn new(config: &GameConfig, sprites: &SpriteSheet, seed: u64) -> Result<Self, ConfigError> {
        config.validate(sprites)?;
        let bird = Bird::new(
            &config.bird,
            sprites.bird_frames(),
            config.window.floor_height(),
        )?;
        let pipes = Pipes::new(
            &config.pipes,
            &config.window,
            sprites.size(Sprite::PipeUpper),
            Pcg32::seed_from_u64(seed),
        )?;

        Ok(Self {
            seed,
            window: config.window.clone(),
            bird,
            pipes,
            ground: Ground::new(&config.window, config.ground.speed),
            tick: 0,
            ticks_alive: 0,
            score: 0,
        })
    }

    pub fn is_over(&self) -> bool {
        !self.bird.is_alive()
    }
}
