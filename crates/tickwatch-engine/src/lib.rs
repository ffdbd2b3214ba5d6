//! Tickwatch engine crate.
//!
//! Tick-counted countdown timers for fixed-step game loops, plus the small
//! loop runtime and logging setup used to drive them.

pub mod core;
pub mod logging;
pub mod runtime;
pub mod time;
