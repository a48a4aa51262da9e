//! # memory-match
//!
//! A match-the-pairs game engine for term/definition vocabularies.
//!
//! Players flip two cards at a time looking for a term and its definition.
//! The engine tracks moves, score and elapsed time, and hands back a summary
//! when every pair has been matched.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The engine owns no timers. Hosts call `advance()` on
//!    their own cadence and release display holds when they elapse.
//!
//! 2. **Deterministic**: Deck shuffles come from an injectable
//!    `ShuffleSource`; the default `GameRng` reproduces the same decks from
//!    the same seed.
//!
//! 3. **Quiet Rejections**: Fast or repeated clicks are ordinary input.
//!    Rejected selections are reported as ignored outcomes, never errors.
//!    Only malformed setup data fails.
//!
//! ## Round Lifecycle
//!
//! - Selecting a first card turns it face-up.
//! - Selecting a second card evaluates the pair immediately (one move; a
//!   match scores the bonus) and locks the board for a display hold.
//! - Releasing the hold clears the face-up cards.
//! - Matching the last pair completes the round, stops the clock and
//!   produces the `RoundSummary` exactly once.
//! - `reset()` replaces the round wholesale with a freshly shuffled one.
//!
//! ## Modules
//!
//! - `core`: RNG and shuffle sources, configuration, errors
//! - `cards`: Cards, vocabulary, deck building
//! - `round`: Clock, selection and evaluation, round state, events
//! - `engine`: The `GameEngine` state machine
//! - `host`: Virtual-time driver scheduling ticks and holds

pub mod cards;
pub mod core;
pub mod engine;
pub mod host;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    ConfigurationError, GameRng, Result, RoundConfig, ShuffleSource, Unshuffled,
};

pub use crate::cards::{
    build_deck, Card, CardId, CardKind, Deck, PairKey, Vocabulary, VocabularyPair,
};

pub use crate::round::{
    Evaluation, HoldKind, HoldTicket, IgnoreReason, Phase, RoundEvent, RoundSnapshot, RoundState,
    RoundStatus, RoundSummary, SelectOutcome,
};

pub use crate::engine::GameEngine;
pub use crate::host::RoundDriver;
