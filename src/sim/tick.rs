//! Fixed timestep simulation tick
//!
//! Advances the session by one frame in a fixed order: bird, pipes, ground.

use super::state::SessionState;
use crate::consts::TICK_PERIOD;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap requested this frame (space)
    pub flap: bool,
}

/// Advance the session by one tick. Does nothing to the world once the bird is dead.
pub fn tick(state: &mut SessionState, input: &TickInput) {
    if input.flap {
        state.bird.flap();
    }

    if state.is_over() {
        return;
    }

    // Bird reads the pipes before they move this tick
    state.bird.update(state.tick, state.pipes.pairs());
    state.pipes.update();
    state.ground.advance();
    state.tick = (state.tick + 1) % TICK_PERIOD;
    state.ticks_alive += 1;

    if state.bird.is_alive() {
        state.score += state.pipes.mark_passed(state.bird.hitbox().left());
    } else {
        log::info!(
            "Game over after {} ticks, score {}",
            state.ticks_alive,
            state.score
        );
    }
}
