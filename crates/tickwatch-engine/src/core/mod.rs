//! Core loop-facing contracts.
//!
//! This module defines the interface between the update loop and game code.
//! Game code only sees the tick rate and a tick snapshot, never loop internals.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{StartCtx, TickCtx};
