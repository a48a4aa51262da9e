//! Round logic: clock, selection and evaluation, state, events.
//!
//! `RoundState` aggregates everything one round needs. The engine wraps it
//! and replaces it wholesale on reset.

pub mod clock;
pub mod event;
pub mod selection;
pub mod state;

pub use clock::RoundClock;
pub use event::RoundEvent;
pub use selection::{
    pairs_match, Evaluation, HoldKind, HoldTicket, IgnoreReason, SelectOutcome, Selection,
};
pub use state::{Phase, RoundSnapshot, RoundState, RoundStatus, RoundSummary};
