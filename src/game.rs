//! The frame loop
//!
//! One thread, one frame per tick: pace, drain input, tick the simulation,
//! render. The world freezes once the bird dies but frames keep coming
//! until the player quits.

use crate::error::SetupError;
use crate::platform::assets::{AssetLoader, SpriteSheet};
use crate::platform::canvas::Canvas;
use crate::platform::input::{InputEvent, InputSource, Key};
use crate::platform::pacer::Pacer;
use crate::renderer::render;
use crate::settings::GameConfig;
use crate::sim::state::SessionState;
use crate::sim::tick::{TickInput, tick};

/// Why the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitReason {
    /// Window closed
    Closed,
    /// Escape pressed
    Escape,
}

/// Summary of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Frames rendered
    pub frames: u64,
    pub ticks_alive: u64,
    pub score: u32,
    /// Bird was still alive when the player quit
    pub survived: bool,
    pub reason: QuitReason,
}

pub struct Game<C, I, P> {
    state: SessionState,
    canvas: C,
    input: I,
    pacer: P,
    frames: u64,
}

impl<C: Canvas, I: InputSource, P: Pacer> Game<C, I, P> {
    pub fn new(state: SessionState, canvas: C, input: I, pacer: P) -> Self {
        Self {
            state,
            canvas,
            input,
            pacer,
            frames: 0,
        }
    }

    /// Load sprites, validate the configuration and build the session.
    /// Any error here is fatal: the loop never starts.
    pub fn setup(
        config: &GameConfig,
        loader: &mut impl AssetLoader,
        seed: u64,
        canvas: C,
        input: I,
        pacer: P,
    ) -> Result<Self, SetupError> {
        let sprites = SpriteSheet::load(loader)?;
        let state = SessionState::new(config, &sprites, seed)?;
        log::info!(
            "Session ready: {}x{} @ {} ticks/s, {} pipe pairs, seed {}",
            config.window.width,
            config.window.height,
            config.window.ticks_per_second,
            config.pipes.quantity,
            seed
        );
        Ok(Self::new(state, canvas, input, pacer))
    }

    /// Run one frame. Returns the quit reason once the player leaves.
    pub fn step(&mut self) -> Option<QuitReason> {
        self.pacer.wait_next_tick();

        let mut input = TickInput::default();
        for event in self.input.poll(&self.state) {
            match event {
                InputEvent::Quit => return Some(QuitReason::Closed),
                InputEvent::KeyDown(Key::Escape) => return Some(QuitReason::Escape),
                InputEvent::KeyDown(Key::Space) => input.flap = true,
                InputEvent::KeyDown(Key::Other) => {}
            }
        }

        tick(&mut self.state, &input);
        render(&self.state, &mut self.canvas);
        self.frames += 1;
        None
    }

    /// Loop until the player quits
    pub fn run(mut self) -> Outcome {
        let reason = loop {
            if let Some(reason) = self.step() {
                break reason;
            }
        };
        log::info!("Quit ({reason:?}) after {} frames", self.frames);
        Outcome {
            frames: self.frames,
            ticks_alive: self.state.ticks_alive,
            score: self.state.score,
            survived: !self.state.is_over(),
            reason,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
