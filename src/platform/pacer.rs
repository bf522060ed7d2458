//! Frame pacing

use std::time::{Duration, Instant};

/// Blocks until the next tick is due
pub trait Pacer {
    fn wait_next_tick(&mut self);
}

/// Sleeps so ticks land on a fixed rate. A late frame is not made up for;
/// the next deadline starts from when it actually ran.
#[derive(Debug, Clone)]
pub struct FixedRatePacer {
    period: Duration,
    last: Option<Instant>,
}

impl FixedRatePacer {
    /// `ticks_per_second` is clamped to at least 1
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / ticks_per_second.max(1),
            last: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Pacer for FixedRatePacer {
    fn wait_next_tick(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.period {
                std::thread::sleep(self.period - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Never waits (tests, fast headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl Pacer for Unpaced {
    fn wait_next_tick(&mut self) {}
}
