//! Input events and sources

use std::collections::BTreeMap;

use crate::sim::state::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Window closed
    Quit,
    KeyDown(Key),
}

/// Produces the events that arrived since the last poll
///
/// Sources get a read-only view of the session so scripted and automated
/// players can react to it; hardware-backed sources ignore it.
pub trait InputSource {
    fn poll(&mut self, state: &SessionState) -> Vec<InputEvent>;
}

/// Replays events keyed by frame number
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: BTreeMap<u64, Vec<InputEvent>>,
    frame: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` for delivery on `frame` (0-based)
    pub fn at(mut self, frame: u64, event: InputEvent) -> Self {
        self.script.entry(frame).or_default().push(event);
        self
    }

    /// Press space on `frame`
    pub fn flap_at(self, frame: u64) -> Self {
        self.at(frame, InputEvent::KeyDown(Key::Space))
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &SessionState) -> Vec<InputEvent> {
        let events = self.script.remove(&self.frame).unwrap_or_default();
        self.frame += 1;
        events
    }
}

/// A flap lifts the bird about 45px before it falls again, so the
/// autopilot waits until it is this far below the gap centre
const AIM_BELOW_CENTER: f32 = 15.0;

/// Plays by itself: flaps whenever the bird sinks below the next gap's
/// aim point while falling, and quits after a frame limit or a short pause
/// once the bird has died.
#[derive(Debug, Clone)]
pub struct Autopilot {
    max_frames: u64,
    linger_frames: u64,
    frame: u64,
    dead_for: u64,
}

impl Autopilot {
    pub fn new(max_frames: u64, linger_frames: u64) -> Self {
        Self {
            max_frames,
            linger_frames,
            frame: 0,
            dead_for: 0,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &SessionState) -> Vec<InputEvent> {
        self.frame += 1;
        if state.is_over() {
            self.dead_for += 1;
        }
        if self.frame > self.max_frames || self.dead_for > self.linger_frames {
            return vec![InputEvent::Quit];
        }

        let bird = &state.bird;
        let target = state
            .pipes
            .next_ahead(bird.hitbox().left())
            .map(|pair| pair.gap_center() + AIM_BELOW_CENTER)
            .unwrap_or(state.window.floor_height() / 2.0);
        let bird_center = bird.position().y + bird.frame_size().height / 2.0;

        if !state.is_over() && bird.velocity() >= 0.0 && bird_center > target {
            vec![InputEvent::KeyDown(Key::Space)]
        } else {
            Vec::new()
        }
    }
}
