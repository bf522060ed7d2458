//! Game settings and tuning
//!
//! Loaded from an optional JSON file; anything missing falls back to the
//! stock values in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, SetupError};
use crate::platform::assets::{Sprite, SpriteSheet};
use crate::sim::geom::Size;

/// Window and world layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    /// Floor height as a fraction of window height
    pub base_offset_ratio: f32,
    /// Ground sprite y as a fraction of window height
    pub base_y_ratio: f32,
    pub ticks_per_second: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            base_offset_ratio: BASE_OFFSET_RATIO,
            base_y_ratio: BASE_Y_RATIO,
            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}

impl WindowConfig {
    /// Y coordinate at which the bird hits the ground
    pub fn floor_height(&self) -> f32 {
        self.height * self.base_offset_ratio
    }

    /// Y coordinate where the ground sprite is drawn
    pub fn base_y(&self) -> f32 {
        self.height * self.base_y_ratio
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("window.width", self.width)?;
        positive("window.height", self.height)?;
        positive("window.base_offset_ratio", self.base_offset_ratio)?;
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }
}

/// Bird physics tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdConfig {
    pub start_x: f32,
    pub start_y: f32,
    pub gravity: f32,
    pub start_velocity: f32,
    /// Free-fall acceleration stops at this velocity
    pub max_velocity: f32,
    /// Velocity set by a flap (negative = upward)
    pub flap_impulse: f32,
    /// Nose-down rotation limit in degrees
    pub max_rotation: f32,
    /// Degrees the nose pitches down per tick
    pub angular_velocity: f32,
    pub start_angle: f32,
    pub feather_offset: f32,
}

impl Default for BirdConfig {
    fn default() -> Self {
        Self {
            start_x: BIRD_START_X,
            start_y: BIRD_START_Y,
            gravity: GRAVITY,
            start_velocity: START_VELOCITY,
            max_velocity: MAX_VELOCITY,
            flap_impulse: FLAP_IMPULSE,
            max_rotation: MAX_ROTATION,
            angular_velocity: ANGULAR_VELOCITY,
            start_angle: START_ANGLE,
            feather_offset: FEATHER_OFFSET,
        }
    }
}

impl BirdConfig {
    /// Gravity pulls down, a flap kicks up, the nose pitches down after it,
    /// and the feather inset leaves every animation frame a non-empty hitbox
    pub fn validate(&self, frames: &[Size]) -> Result<(), ConfigError> {
        positive("bird.gravity", self.gravity)?;
        positive("bird.max_velocity", self.max_velocity)?;
        positive("bird.angular_velocity", self.angular_velocity)?;
        negative("bird.flap_impulse", self.flap_impulse)?;
        for frame in frames {
            positive("bird frame width", frame.width)?;
            positive("bird frame height", frame.height)?;
            let limit = frame.min_side() / 2.0;
            if self.feather_offset >= limit {
                return Err(ConfigError::FeatherTooLarge {
                    feather: self.feather_offset,
                    limit,
                });
            }
        }
        Ok(())
    }
}

/// Pipe stream tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipesConfig {
    /// Vertical opening between the upper and lower pipe
    pub gap: f32,
    /// Number of pipe pairs in the rolling set
    pub quantity: usize,
    /// Smallest value of the gap placement draw
    pub boundary: i32,
    /// Horizontal velocity per tick (negative = leftward)
    pub velocity: f32,
}

impl Default for PipesConfig {
    fn default() -> Self {
        Self {
            gap: PIPE_GAP,
            quantity: PIPE_QUANTITY,
            boundary: PIPE_BOUNDARY,
            velocity: PIPE_VELOCITY,
        }
    }
}

impl PipesConfig {
    /// Horizontal space between one pair's right edge and the next pair's left edge
    pub fn interval(&self, window: &WindowConfig, pipe: Size) -> f32 {
        (window.width + pipe.width) / self.quantity as f32 - pipe.width
    }

    /// Inclusive range of the gap placement draw
    pub fn gap_range(&self, window: &WindowConfig) -> (i32, i32) {
        let high = ((window.floor_height() + self.gap) / 2.0).floor() as i32;
        (self.boundary, high)
    }

    pub fn validate(&self, window: &WindowConfig, pipe: Size) -> Result<(), ConfigError> {
        if self.quantity == 0 {
            return Err(ConfigError::ZeroQuantity);
        }
        positive("pipe width", pipe.width)?;
        positive("pipe height", pipe.height)?;
        positive("pipes.gap", self.gap)?;
        negative("pipes.velocity", self.velocity)?;

        let band = window.floor_height();
        if self.gap >= band {
            return Err(ConfigError::GapTooLarge {
                gap: self.gap,
                band,
            });
        }

        let interval = self.interval(window, pipe);
        if interval < 0.0 {
            return Err(ConfigError::NegativeInterval { interval });
        }

        let (low, high) = self.gap_range(window);
        if low > high {
            return Err(ConfigError::EmptyGapRange { low, high });
        }
        Ok(())
    }
}

/// Scrolling ground tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Pixels per tick
    pub speed: f32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self { speed: BASE_SPEED }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub bird: BirdConfig,
    pub pipes: PipesConfig,
    pub ground: GroundConfig,
}

impl GameConfig {
    /// Load from a JSON file. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, SetupError> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let config = serde_json::from_str(&json).map_err(|source| SetupError::Settings {
                    path: path.to_path_buf(),
                    source,
                })?;
                log::info!("Loaded settings from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                log::warn!(
                    "Cannot read settings {} ({e}), using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
        }
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Check every tunable against the sprite sizes it will be used with
    pub fn validate(&self, sprites: &SpriteSheet) -> Result<(), ConfigError> {
        self.window.validate()?;
        self.bird.validate(&sprites.bird_frames())?;
        self.pipes
            .validate(&self.window, sprites.size(Sprite::PipeUpper))?;
        positive("ground.speed", self.ground.speed)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value < 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonNegative { field, value })
    }
}
