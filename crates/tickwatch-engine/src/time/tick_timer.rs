use std::time::Duration;

/// Countdown timer measured in loop ticks.
///
/// The target is fixed at construction from a duration and the loop's tick
/// rate. The owner calls [`advance`](Self::advance) once per tick; the timer
/// only counts while started and stops counting at the target.
///
/// `started` and [`is_running`](Self::is_running) are deliberately distinct:
/// a timer that reached its target stays started until stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickTimer {
    elapsed_ticks: u64,
    target_ticks: u64,
    started: bool,
}

impl TickTimer {
    /// Creates a stopped timer whose target is `duration` at `ticks_per_second`.
    ///
    /// Target is `floor(duration_ms * ticks_per_second / 1000)`; sub-tick
    /// remainders are discarded. Saturates at `u64::MAX` on overflow.
    pub fn new(duration: Duration, ticks_per_second: u32) -> Self {
        Self::with_target(target_from_millis(duration.as_millis(), ticks_per_second))
    }

    /// Creates a stopped timer from a signed millisecond count.
    ///
    /// Zero and negative durations produce a timer that is done immediately.
    pub fn from_millis(millis: i64, ticks_per_second: u32) -> Self {
        let millis = u128::try_from(millis).unwrap_or(0);
        Self::with_target(target_from_millis(millis, ticks_per_second))
    }

    fn with_target(target_ticks: u64) -> Self {
        Self {
            elapsed_ticks: 0,
            target_ticks,
            started: false,
        }
    }

    /// Begins counting, or resumes a stopped timer.
    pub fn start(&mut self) {
        if !self.started {
            log::trace!("tick timer started at {}/{}", self.elapsed_ticks, self.target_ticks);
        }
        self.started = true;
    }

    /// Pauses counting. Progress is kept.
    pub fn stop(&mut self) {
        if self.started {
            log::trace!("tick timer stopped at {}/{}", self.elapsed_ticks, self.target_ticks);
        }
        self.started = false;
    }

    /// Advances the timer by one tick.
    ///
    /// No-op when stopped or when the target has been reached.
    pub fn advance(&mut self) {
        if self.started && self.elapsed_ticks < self.target_ticks {
            self.elapsed_ticks += 1;

            if self.elapsed_ticks == self.target_ticks {
                log::trace!("tick timer reached target of {} ticks", self.target_ticks);
            }
        }
    }

    /// Clears progress. The started flag is left as is.
    pub fn reset(&mut self) {
        log::trace!("tick timer reset (started: {})", self.started);
        self.elapsed_ticks = 0;
    }

    /// Returns `true` once the elapsed count has met the target.
    ///
    /// Independent of the started flag; a zero-tick timer is done before it
    /// is ever started.
    pub fn is_done(&self) -> bool {
        self.target_ticks <= self.elapsed_ticks
    }

    /// Returns `true` while started and still short of the target.
    pub fn is_running(&self) -> bool {
        self.started && !self.is_done()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    pub fn target_ticks(&self) -> u64 {
        self.target_ticks
    }

    /// Ticks left until the target. Zero once done.
    pub fn remaining_ticks(&self) -> u64 {
        self.target_ticks.saturating_sub(self.elapsed_ticks)
    }

    /// Completion ratio in `[0.0, 1.0]`.
    ///
    /// A zero-tick timer reports `1.0`.
    pub fn progress(&self) -> f32 {
        if self.target_ticks == 0 {
            return 1.0;
        }
        let ratio = self.elapsed_ticks as f64 / self.target_ticks as f64;
        ratio.clamp(0.0, 1.0) as f32
    }
}

fn target_from_millis(millis: u128, ticks_per_second: u32) -> u64 {
    let ticks = millis.saturating_mul(u128::from(ticks_per_second)) / 1000;
    u64::try_from(ticks).unwrap_or(u64::MAX)
}
