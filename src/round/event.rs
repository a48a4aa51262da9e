//! Round events.
//!
//! The engine records an event for every state change the host may want to
//! render. Hosts drain the queue after each call instead of diffing
//! snapshots.

use serde::{Deserialize, Serialize};

use super::selection::HoldTicket;
use super::state::RoundSummary;
use crate::cards::{CardId, PairKey};

/// Something that happened during a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A card turned face-up.
    CardFlipped(CardId),
    /// Two cards formed a pair. A hold follows.
    PairMatched { pair_key: PairKey, ticket: HoldTicket },
    /// Two cards did not form a pair. A hold follows.
    PairMismatched { first: CardId, second: CardId, ticket: HoldTicket },
    /// A hold ended and the face-up cards were cleared.
    SelectionCleared(HoldTicket),
    /// The clock advanced to the given second.
    Ticked(u32),
    /// The last pair was matched. Emitted once per completed round.
    RoundCompleted(RoundSummary),
    /// The round was replaced by a fresh one.
    RoundReset { generation: u64 },
}
