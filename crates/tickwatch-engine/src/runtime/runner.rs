use anyhow::{Context, Result};

use crate::core::{App, AppControl, StartCtx, TickCtx};
use crate::time::{TickClock, TickTime};

use super::config::LoopConfig;

/// Why a run ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ExitReason {
    /// The app returned `AppControl::Exit`.
    AppExit,
    /// `LoopConfig::max_ticks` was reached.
    TickLimit,
}

/// Outcome of `Runtime::run`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RunSummary {
    /// Number of ticks delivered to the app.
    pub ticks: u64,
    pub exit: ExitReason,
}

/// Entry point for the fixed-step loop.
///
/// The runtime is headless and unpaced: it delivers ticks back to back.
/// Sleeping between steps is left to the embedder.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: LoopConfig, mut app: A) -> Result<RunSummary>
    where
        A: App,
    {
        config
            .validate()
            .context("invalid loop configuration")?;

        log::info!(
            "starting tick loop at {} tps (limit: {:?})",
            config.ticks_per_second,
            config.max_ticks
        );

        app.on_start(&StartCtx {
            ticks_per_second: config.ticks_per_second,
        });

        let mut clock = TickClock::new();

        let exit = loop {
            if config.max_ticks.is_some_and(|max| clock.ticks() >= max) {
                break ExitReason::TickLimit;
            }

            let tt: TickTime = clock.tick();
            let mut ctx = TickCtx {
                time: tt,
                ticks_per_second: config.ticks_per_second,
            };

            if app.on_tick(&mut ctx) == AppControl::Exit {
                break ExitReason::AppExit;
            }
        };

        let summary = RunSummary {
            ticks: clock.ticks(),
            exit,
        };
        log::debug!("tick loop finished: {summary:?}");

        Ok(summary)
    }
}
