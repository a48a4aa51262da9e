//! Round clock.
//!
//! The engine owns no timers. The host calls `advance()` once per tick
//! period and the clock counts whole seconds while it is running.

use serde::{Deserialize, Serialize};

/// Elapsed-time counter driven by host ticks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundClock {
    elapsed_seconds: u32,
    paused: bool,
    stopped: bool,
}

impl RoundClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one tick. Returns false if the clock is paused or stopped.
    pub fn advance(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        true
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.paused && !self.stopped
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Stop permanently. Used when the round completes; `resume` does not
    /// restart a stopped clock.
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}
