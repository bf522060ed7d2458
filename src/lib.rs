//! Floppy Bird - A side-scrolling flappy bird arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipes, collisions, session state)
//! - `renderer`: Read-only projection of the session onto a canvas
//! - `platform`: Input, pacing, asset and canvas collaborators
//! - `game`: The frame loop tying the collaborators to the simulation
//! - `settings`: Data-driven game tuning

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{AssetError, ConfigError, SetupError};
pub use game::{Game, Outcome, QuitReason};
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (one tick per rendered frame)
    pub const TICKS_PER_SECOND: u32 = 30;
    /// The loop tick counter wraps at this value
    pub const TICK_PERIOD: u32 = 30;
    /// Bird animation advances every this many ticks
    pub const ANIMATION_STRIDE: u32 = 5;

    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 288.0;
    pub const WINDOW_HEIGHT: f32 = 512.0;
    /// Floor sits at this fraction of the window height
    pub const BASE_OFFSET_RATIO: f32 = 0.8;
    /// Ground sprite is drawn at this fraction of the window height
    pub const BASE_Y_RATIO: f32 = 0.9;
    /// Ground scroll speed (pixels/tick)
    pub const BASE_SPEED: f32 = 2.0;

    /// Bird defaults
    pub const BIRD_START_X: f32 = 50.0;
    pub const BIRD_START_Y: f32 = 256.0;
    pub const GRAVITY: f32 = 1.0;
    pub const START_VELOCITY: f32 = -9.0;
    pub const MAX_VELOCITY: f32 = 10.0;
    pub const FLAP_IMPULSE: f32 = -9.0;
    /// Nose-down limit (degrees); a flap tilts the nose up to -MAX_ROTATION / 2
    pub const MAX_ROTATION: f32 = -90.0;
    pub const ANGULAR_VELOCITY: f32 = 3.0;
    pub const START_ANGLE: f32 = 20.0;
    /// Inset applied to the bird's hitbox on every side
    pub const FEATHER_OFFSET: f32 = 3.0;

    /// Pipe defaults
    pub const PIPE_GAP: f32 = 100.0;
    pub const PIPE_QUANTITY: usize = 2;
    pub const PIPE_BOUNDARY: i32 = 50;
    /// Pipe scroll velocity (pixels/tick, negative = leftward)
    pub const PIPE_VELOCITY: f32 = -4.0;
}
