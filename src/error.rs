//! Setup-time error types
//!
//! Once a session is running nothing can fail: death and quitting are
//! ordinary outcomes. Everything here is raised before the first tick.

use std::fmt;
use std::path::PathBuf;

use crate::platform::assets::Sprite;

/// Configuration that would produce degenerate geometry
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A pipe stream needs at least one pair
    ZeroQuantity,
    /// Too many pairs to fit across the viewport without overlapping
    NegativeInterval { interval: f32 },
    /// Gap placement range `[low, high]` is empty
    EmptyGapRange { low: i32, high: i32 },
    /// Gap does not fit inside the playable band above the floor
    GapTooLarge { gap: f32, band: f32 },
    /// Feather inset would collapse the bird's hitbox
    FeatherTooLarge { feather: f32, limit: f32 },
    /// A size or ratio that must be strictly positive is not
    NonPositive { field: &'static str, value: f32 },
    /// A velocity that must point up or left (strictly negative) does not
    NonNegative { field: &'static str, value: f32 },
    /// Simulation rate must be at least one tick per second
    ZeroTickRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroQuantity => write!(f, "pipe quantity must be at least 1"),
            ConfigError::NegativeInterval { interval } => write!(
                f,
                "pipe interval is negative ({interval}); too many pipe pairs for the viewport width"
            ),
            ConfigError::EmptyGapRange { low, high } => write!(
                f,
                "gap placement range [{low}, {high}] is empty; boundary is below the playable midline"
            ),
            ConfigError::GapTooLarge { gap, band } => {
                write!(f, "pipe gap {gap} does not fit in playable band {band}")
            }
            ConfigError::FeatherTooLarge { feather, limit } => write!(
                f,
                "feather offset {feather} must be less than {limit} (half the smallest bird frame side)"
            ),
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            ConfigError::NonNegative { field, value } => {
                write!(f, "{field} must be negative, got {value}")
            }
            ConfigError::ZeroTickRate => write!(f, "ticks per second must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure to load the sprites a session needs
#[derive(Debug)]
pub enum AssetError {
    /// Manifest or image file could not be read
    Io { path: PathBuf, source: std::io::Error },
    /// Manifest is not valid JSON for a sprite catalogue
    Manifest { path: PathBuf, source: serde_json::Error },
    /// Image file exists but cannot be decoded
    Malformed { path: PathBuf, source: image::ImageError },
    /// Manifest has no entry for a required sprite
    MissingSprite(Sprite),
    /// Sprite declares a zero-sized image
    EmptySprite(Sprite),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io { path, source } => {
                write!(f, "cannot load {}: {source}", path.display())
            }
            AssetError::Manifest { path, source } => {
                write!(f, "malformed asset manifest {}: {source}", path.display())
            }
            AssetError::Malformed { path, source } => {
                write!(f, "cannot decode image {}: {source}", path.display())
            }
            AssetError::MissingSprite(sprite) => {
                write!(f, "asset manifest has no entry for {}", sprite.key())
            }
            AssetError::EmptySprite(sprite) => write!(f, "sprite {} has zero size", sprite.key()),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            AssetError::Manifest { source, .. } => Some(source),
            AssetError::Malformed { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Anything that aborts a session before the loop starts
#[derive(Debug)]
pub enum SetupError {
    Config(ConfigError),
    Asset(AssetError),
    /// Settings file exists but could not be parsed
    Settings { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Config(e) => write!(f, "invalid configuration: {e}"),
            SetupError::Asset(e) => write!(f, "asset load failed: {e}"),
            SetupError::Settings { path, source } => {
                write!(f, "cannot parse settings {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Config(e) => Some(e),
            SetupError::Asset(e) => Some(e),
            SetupError::Settings { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        SetupError::Config(e)
    }
}

impl From<AssetError> for SetupError {
    fn from(e: AssetError) -> Self {
        SetupError::Asset(e)
    }
}
