//! Time subsystem.
//!
//! Tick-based timing utilities that never touch the wall clock.
//! Intended usage:
//! - one `TickClock` per update loop, ticked once per fixed step
//! - any number of `TickTimer`s owned by game code, advanced once per step

mod tick_clock;
mod tick_timer;

pub use tick_clock::{TickClock, TickTime};
pub use tick_timer::TickTimer;
