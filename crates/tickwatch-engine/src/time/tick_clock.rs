/// Tick snapshot handed to the loop callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TickTime {
    /// Monotonic tick counter, starting at zero.
    pub tick_index: u64,
}

/// Counter producing `TickTime` snapshots.
///
/// Unlike a frame clock this never reads the wall clock; one call to `tick()`
/// is one fixed-rate update step.
#[derive(Debug, Clone, Default)]
pub struct TickClock {
    tick_index: u64,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewinds the counter to zero.
    pub fn reset(&mut self) {
        self.tick_index = 0;
    }

    /// Number of ticks produced so far.
    pub fn ticks(&self) -> u64 {
        self.tick_index
    }

    /// Advances the clock and returns the snapshot for the current tick.
    pub fn tick(&mut self) -> TickTime {
        let tt = TickTime {
            tick_index: self.tick_index,
        };

        self.tick_index = self
            .tick_index
            .wrapping_add(1);

        tt
    }
}
