//! Fixed-step update loop.
//!
//! Owns the tick clock and the loop configuration, and drives a `core::App`
//! once per tick.

mod config;
mod runner;

pub use config::{ConfigError, LoopConfig, MAX_TICKS_VAR, TPS_VAR};
pub use runner::{ExitReason, RunSummary, Runtime};
