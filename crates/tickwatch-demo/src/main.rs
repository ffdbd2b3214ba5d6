use std::time::Duration;

use anyhow::{Context, Result};
use tickwatch_engine::core::{App, AppControl, StartCtx, TickCtx};
use tickwatch_engine::logging::{init_logging, LoggingConfig};
use tickwatch_engine::runtime::{LoopConfig, Runtime};
use tickwatch_engine::time::TickTimer;

const COUNTDOWN: Duration = Duration::from_secs(3);
const ROUND: Duration = Duration::from_secs(10);
/// The round is paused for this many ticks halfway through.
const PAUSE_TICKS: u64 = 30;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Phase {
    Countdown,
    Playing,
    Paused { resume_at: u64 },
    GameOver,
}

struct Game {
    phase: Phase,
    countdown: TickTimer,
    round: TickTimer,
    paused_once: bool,
}

impl Game {
    fn new(ticks_per_second: u32) -> Self {
        Self {
            phase: Phase::Countdown,
            countdown: TickTimer::new(COUNTDOWN, ticks_per_second),
            round: TickTimer::new(ROUND, ticks_per_second),
            paused_once: false,
        }
    }

    fn enter(&mut self, phase: Phase, tick: u64) {
        println!("  [tick {tick:>5}] {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}

impl App for Game {
    fn on_start(&mut self, ctx: &StartCtx) {
        *self = Game::new(ctx.ticks_per_second);
        self.countdown.start();
        log::info!(
            "countdown {} ticks, round {} ticks",
            self.countdown.target_ticks(),
            self.round.target_ticks()
        );
    }

    fn on_tick(&mut self, ctx: &mut TickCtx) -> AppControl {
        let tick = ctx.time.tick_index;

        self.countdown.advance();
        self.round.advance();

        match self.phase {
            Phase::Countdown => {
                if self.countdown.is_done() {
                    self.countdown.stop();
                    self.round.start();
                    self.enter(Phase::Playing, tick);
                }
            }
            Phase::Playing => {
                if self.round.is_done() {
                    self.round.stop();
                    self.enter(Phase::GameOver, tick);
                } else if !self.paused_once && self.round.progress() >= 0.5 {
                    self.round.stop();
                    self.paused_once = true;
                    self.enter(Phase::Paused { resume_at: tick + PAUSE_TICKS }, tick);
                }
            }
            Phase::Paused { resume_at } => {
                if tick >= resume_at {
                    self.round.start();
                    self.enter(Phase::Playing, tick);
                }
            }
            Phase::GameOver => return AppControl::Exit,
        }

        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = LoopConfig::from_env().context("failed to read loop configuration")?;

    println!();
    println!("  tickwatch demo  ·  {} tps", config.ticks_per_second);
    println!();

    let game = Game::new(config.ticks_per_second);
    let summary = Runtime::run(config, game).context("tick loop failed")?;

    println!();
    println!("  finished after {} ticks ({:?})", summary.ticks, summary.exit);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickwatch_engine::runtime::ExitReason;

    #[test]
    fn game_runs_to_completion() {
        let mut game = Game::new(60);
        let summary = Runtime::run(LoopConfig::default(), &mut game).unwrap();

        assert_eq!(summary.exit, ExitReason::AppExit);
        assert_eq!(game.phase, Phase::GameOver);
        assert!(game.countdown.is_done());
        assert!(game.round.is_done());
        assert!(!game.round.is_running());
        // countdown + round + pause, plus the GameOver exit tick
        assert_eq!(summary.ticks, 180 + 600 + PAUSE_TICKS + 1);
    }

    #[test]
    fn round_does_not_advance_while_paused() {
        let mut game = Game::new(10);
        let config = LoopConfig::default().with_ticks_per_second(10).with_max_ticks(100);
        Runtime::run(config, &mut game).unwrap();

        assert!(matches!(game.phase, Phase::Paused { .. }));
        assert_eq!(game.round.elapsed_ticks(), 50);
    }
}
