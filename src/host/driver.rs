//! Virtual-time round driver.
//!
//! Plays the host's part for a `GameEngine`: a recurring clock tick and the
//! deferred release of each display hold, expressed as scheduled tasks on
//! a virtual timeline. Real hosts can run it off a wall clock by feeding it
//! the time between frames; tests feed it exact durations.

use std::time::Duration;

use tracing::debug;

use crate::cards::CardId;
use crate::core::{GameRng, ShuffleSource};
use crate::engine::GameEngine;
use crate::round::{HoldTicket, RoundEvent, RoundSnapshot, RoundSummary, SelectOutcome};

/// A hold release waiting for its deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ScheduledRelease {
    due: Duration,
    ticket: HoldTicket,
}

/// Drives an engine along a virtual timeline.
///
/// ## Usage
///
/// ```
/// use std::time::Duration;
/// use memory_match::{GameEngine, RoundConfig, RoundDriver, Vocabulary};
///
/// let engine = GameEngine::new(Vocabulary::sample(), RoundConfig::default()).unwrap();
/// let mut driver = RoundDriver::new(engine);
///
/// driver.advance_by(Duration::from_millis(2500));
/// assert_eq!(driver.snapshot().elapsed_seconds, 2);
/// ```
#[derive(Debug)]
pub struct RoundDriver<S: ShuffleSource = GameRng> {
    engine: GameEngine<S>,
    now: Duration,
    next_tick: Duration,
    pending: Option<ScheduledRelease>,
    completed_at: Option<Duration>,
}

impl<S: ShuffleSource> RoundDriver<S> {
    /// Start driving at virtual time zero. The first tick lands one tick
    /// period in.
    pub fn new(engine: GameEngine<S>) -> Self {
        let next_tick = engine.config().tick_period;
        Self {
            engine,
            now: Duration::ZERO,
            next_tick,
            pending: None,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.engine.snapshot()
    }

    /// When the pending hold will be released, if one is running.
    #[must_use]
    pub fn hold_deadline(&self) -> Option<Duration> {
        self.pending.map(|p| p.due)
    }

    /// Forward a card selection and schedule the hold it starts, if any.
    pub fn select(&mut self, id: &CardId) -> SelectOutcome {
        let outcome = self.engine.select(id);

        if let SelectOutcome::Evaluated { ticket, summary, .. } = &outcome {
            let due = self.now + ticket.kind().duration(self.engine.config());
            self.pending = Some(ScheduledRelease {
                due,
                ticket: *ticket,
            });
            if summary.is_some() {
                self.completed_at = Some(self.now);
            }
        }

        outcome
    }

    /// Move virtual time forward, firing every tick and hold release that
    /// falls due, in time order.
    pub fn advance_by(&mut self, dt: Duration) {
        let target = self.now + dt;

        loop {
            let tick_due = self.tick_scheduled().then_some(self.next_tick);
            let release_due = self.pending.map(|p| p.due);

            let fire_release = match (release_due, tick_due) {
                (Some(r), Some(t)) => r <= t,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };

            if fire_release {
                let Some(release) = self.pending.filter(|p| p.due <= target) else {
                    break;
                };
                self.now = release.due;
                self.pending = None;
                self.engine.release_hold(release.ticket);
            } else {
                if self.next_tick > target {
                    break;
                }
                self.now = self.next_tick;
                self.next_tick += self.engine.config().tick_period;
                self.engine.advance();
            }
        }

        self.now = target;
    }

    /// Ticks only run while the clock can advance.
    fn tick_scheduled(&self) -> bool {
        !self.engine.round().is_completed() && self.engine.round().clock().is_running()
    }

    /// Stop the clock. Pending hold releases still fire.
    pub fn pause(&mut self) {
        self.engine.pause();
    }

    /// Restart a paused clock; the next tick lands one full period from
    /// now. Does nothing unless the clock is paused.
    pub fn resume(&mut self) {
        if !self.engine.round().clock().is_paused() {
            return;
        }
        self.engine.resume();
        self.next_tick = self.now + self.engine.config().tick_period;
    }

    /// Start a fresh round, dropping any scheduled release.
    pub fn reset(&mut self) {
        if let Some(stale) = self.pending.take() {
            debug!(generation = stale.ticket.generation(), "dropping scheduled release");
        }
        self.engine.reset();
        self.completed_at = None;
        self.next_tick = self.now + self.engine.config().tick_period;
    }

    /// True once the round has completed and the results delay has passed.
    #[must_use]
    pub fn results_ready(&self) -> bool {
        self.completed_at
            .is_some_and(|at| self.now >= at + self.engine.config().results_delay)
    }

    /// Hand over the summary once results are ready. Yields it once.
    pub fn take_summary(&mut self) -> Option<RoundSummary> {
        if !self.results_ready() {
            return None;
        }
        self.engine.take_summary()
    }

    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        self.engine.drain_events()
    }
}
