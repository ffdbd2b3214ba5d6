use std::time::Duration;

use crate::time::{TickTime, TickTimer};

/// Context passed to `core::App::on_start`.
#[derive(Debug, Copy, Clone)]
pub struct StartCtx {
    pub ticks_per_second: u32,
}

impl StartCtx {
    /// Builds a stopped timer at the loop's tick rate.
    pub fn timer(&self, duration: Duration) -> TickTimer {
        TickTimer::new(duration, self.ticks_per_second)
    }
}

/// Per-tick context passed to `core::App::on_tick`.
#[derive(Debug, Copy, Clone)]
pub struct TickCtx {
    pub time: TickTime,
    pub ticks_per_second: u32,
}

impl TickCtx {
    /// Builds a stopped timer at the loop's tick rate.
    pub fn timer(&self, duration: Duration) -> TickTimer {
        TickTimer::new(duration, self.ticks_per_second)
    }
}
