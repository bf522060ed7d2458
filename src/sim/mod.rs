//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame)
//! - Seeded RNG only
//! - Stable iteration order (pipe pairs keep their slots)
//! - No rendering or platform dependencies beyond sprite sizes

pub mod bird;
pub mod geom;
pub mod pipe;
pub mod pipes;
pub mod state;
pub mod tick;

pub use bird::{Bird, Wing};
pub use geom::{Rect, Size};
pub use pipe::Pipe;
pub use pipes::{PipePair, Pipes};
pub use state::{Ground, SessionState};
pub use tick::{TickInput, tick};
