//! Selection and match evaluation.
//!
//! A selection holds at most two face-up cards. When the second card lands
//! the pair is evaluated on the spot; the cards then stay face-up for a
//! display hold, during which the board is locked. The host ends the hold
//! by presenting the `HoldTicket` it was given.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::state::RoundSummary;
use crate::cards::{Card, CardId, PairKey};
use crate::core::config::RoundConfig;

/// Cards currently face-up and pending (or under) evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    cards: SmallVec<[Card; 2]>,
}

impl Selection {
    /// Capacity of a selection.
    pub const CAPACITY: usize = 2;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Two cards are up; nothing more can be selected.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= Self::CAPACITY
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.iter().any(|c| c.id() == id)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Both cards, once the selection is full.
    #[must_use]
    pub fn pair(&self) -> Option<(&Card, &Card)> {
        match self.cards.as_slice() {
            [a, b] => Some((a, b)),
            _ => None,
        }
    }

    pub(crate) fn push(&mut self, card: Card) {
        debug_assert!(!self.is_full());
        self.cards.push(card);
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}

/// Whether two cards form a pair.
///
/// Requires the same pair key and opposite faces: term/term or
/// definition/definition never match, even with equal keys.
#[must_use]
pub fn pairs_match(a: &Card, b: &Card) -> bool {
    a.pair_key() == b.pair_key() && a.kind() != b.kind()
}

/// Outcome of evaluating a full selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    Match(PairKey),
    Mismatch,
}

impl Evaluation {
    #[must_use]
    pub fn is_match(self) -> bool {
        matches!(self, Evaluation::Match(_))
    }

    #[must_use]
    pub fn hold_kind(self) -> HoldKind {
        match self {
            Evaluation::Match(_) => HoldKind::Match,
            Evaluation::Mismatch => HoldKind::Mismatch,
        }
    }
}

/// Which display hold is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoldKind {
    Match,
    Mismatch,
}

impl HoldKind {
    /// Hold length for this kind under the given config.
    #[must_use]
    pub fn duration(self, config: &RoundConfig) -> Duration {
        match self {
            HoldKind::Match => config.match_hold,
            HoldKind::Mismatch => config.mismatch_hold,
        }
    }
}

/// Handle for a pending hold release.
///
/// Tickets are bound to the round they were issued in. After a reset, or
/// once the hold has been released, presenting the ticket does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoldTicket {
    pub(crate) generation: u64,
    pub(crate) sequence: u64,
    kind: HoldKind,
}

impl HoldTicket {
    pub(crate) fn new(generation: u64, sequence: u64, kind: HoldKind) -> Self {
        Self {
            generation,
            sequence,
            kind,
        }
    }

    #[must_use]
    pub fn kind(&self) -> HoldKind {
        self.kind
    }

    /// Round generation the ticket was issued in.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No card with that id is on the board.
    UnknownCard,
    /// The card's pair has already been matched.
    AlreadyMatched,
    /// The card is already face-up in the current selection.
    AlreadySelected,
    /// Two cards are up and their hold has not been released.
    BoardLocked,
}

/// Result of a `select` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a pair turned face-up.
    Flipped,
    /// Second card turned face-up and the pair was evaluated.
    ///
    /// The host must call `release_hold(ticket)` after `ticket.kind()`'s hold
    /// duration. `summary` is present on the evaluation that completes the
    /// round and on no other.
    Evaluated {
        evaluation: Evaluation,
        ticket: HoldTicket,
        summary: Option<RoundSummary>,
    },
}

impl SelectOutcome {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }

    /// The hold ticket, if this selection started a hold.
    #[must_use]
    pub fn ticket(&self) -> Option<HoldTicket> {
        match self {
            SelectOutcome::Evaluated { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }
}
