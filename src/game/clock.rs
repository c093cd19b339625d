//! Fixed-timestep driver
//!
//! Frame callbacks arrive at whatever rate the display manages; the simulation
//! must advance at a fixed rate regardless. Elapsed time is banked in an
//! accumulator and paid out in whole ticks.

use std::time::Duration;

/// Fold one frame's elapsed time into the accumulator.
///
/// Returns the new accumulator and the number of whole ticks it paid for. The
/// leftover is always strictly less than `tick`. A timestamp that runs backwards
/// contributes nothing.
pub fn accumulate(
    previous: Duration,
    current: Duration,
    accumulator: Duration,
    tick: Duration,
) -> (Duration, u32) {
    let mut accumulator = accumulator + current.saturating_sub(previous);
    if tick.is_zero() {
        return (accumulator, 0);
    }

    let mut ticks = 0;
    while accumulator >= tick {
        accumulator -= tick;
        ticks += 1;
    }
    (accumulator, ticks)
}

/// Accumulator state carried between frames
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    tick: Duration,
    accumulator: Duration,
    last: Option<Duration>,
}

impl FixedTimestep {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            accumulator: Duration::ZERO,
            last: None,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick
    }

    pub fn accumulator(&self) -> Duration {
        self.accumulator
    }

    /// Record a frame at `now` and return how many ticks are due.
    ///
    /// The first frame only establishes the baseline.
    pub fn advance(&mut self, now: Duration) -> u32 {
        let previous = self.last.replace(now).unwrap_or(now);
        let (accumulator, ticks) = accumulate(previous, now, self.accumulator, self.tick);
        self.accumulator = accumulator;
        ticks
    }

    /// Drop banked time and restart the baseline at `now`.
    ///
    /// Called while the simulation is idle so resuming never bursts.
    pub fn resync(&mut self, now: Duration) {
        self.accumulator = Duration::ZERO;
        self.last = Some(now);
    }
}
