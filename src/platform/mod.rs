//! Platform abstraction layer
//!
//! The simulation never touches the outside world directly. These are the
//! collaborators the frame loop drives it through:
//! - Sprite assets (loaded once at startup)
//! - Canvas (write-only draw calls + present)
//! - Input events
//! - Frame pacing

pub mod assets;
pub mod canvas;
pub mod input;
pub mod pacer;

pub use assets::{AssetLoader, ManifestLoader, Sprite, SpriteInfo, SpriteSheet, StockAssets};
pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use input::{Autopilot, InputEvent, InputSource, Key, ScriptedInput};
pub use pacer::{FixedRatePacer, Pacer, Unpaced};
