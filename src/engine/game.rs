//! The game engine: one match-the-pairs round at a time.

use tracing::info;

use crate::cards::{build_deck, Card, CardId, Deck, Vocabulary, VocabularyPair};
use crate::core::{GameRng, Result, RoundConfig, ShuffleSource};
use crate::round::{
    Evaluation, HoldTicket, RoundEvent, RoundSnapshot, RoundState, RoundSummary, SelectOutcome,
};

/// Stream name the deck shuffle draws from.
const DECK_STREAM: &str = "deck";

/// Host-facing state machine for a round.
///
/// The host calls `select` on card clicks, `advance` once per tick period,
/// `release_hold` when a hold has elapsed, and `reset` to start over. The
/// engine never schedules anything itself.
///
/// Every state change is also queued as a `RoundEvent`. Hosts that render
/// from events should call `drain_events` after each call; `reset` discards
/// whatever the previous round left undrained.
///
/// ## Example
///
/// ```
/// use memory_match::{GameEngine, RoundConfig, RoundStatus, Vocabulary};
/// use memory_match::cards::{CardKind, PairKey};
///
/// let mut engine = GameEngine::new(Vocabulary::sample(), RoundConfig::default()).unwrap();
///
/// let term = engine.deck().face(PairKey::new(1), CardKind::Term).unwrap().id().clone();
/// let def = engine.deck().face(PairKey::new(1), CardKind::Definition).unwrap().id().clone();
///
/// engine.select(&term);
/// let ticket = engine.select(&def).ticket().unwrap();
/// engine.release_hold(ticket);
///
/// let snap = engine.snapshot();
/// assert_eq!((snap.moves, snap.score), (1, 20));
/// assert_eq!(snap.status, RoundStatus::Running);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<S: ShuffleSource = GameRng> {
    vocabulary: Vocabulary,
    config: RoundConfig,
    shuffle: S,
    round: RoundState,
    generation: u64,
    events: Vec<RoundEvent>,
    summary: Option<RoundSummary>,
}

impl GameEngine<GameRng> {
    /// Create an engine that shuffles with a `GameRng` seeded from the config.
    pub fn new(vocabulary: Vocabulary, config: RoundConfig) -> Result<Self> {
        let rng = GameRng::new(config.seed).for_context(DECK_STREAM);
        Self::with_shuffle(vocabulary, config, rng)
    }

    /// Validate raw pairs and create an engine.
    pub fn from_pairs(pairs: Vec<VocabularyPair>, config: RoundConfig) -> Result<Self> {
        Self::new(Vocabulary::new(pairs)?, config)
    }
}

impl<S: ShuffleSource> GameEngine<S> {
    /// Create an engine with an injected shuffle source.
    pub fn with_shuffle(vocabulary: Vocabulary, config: RoundConfig, mut shuffle: S) -> Result<Self> {
        config.validate()?;

        let deck = build_deck(&vocabulary, &mut shuffle);
        info!(pairs = vocabulary.len(), seed = config.seed, "round started");

        Ok(Self {
            vocabulary,
            config,
            shuffle,
            round: RoundState::new(deck, 0),
            generation: 0,
            events: Vec::new(),
            summary: None,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The current round.
    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        self.round.deck()
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.round.snapshot()
    }

    /// Number of resets so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // === Operations ===

    /// Turn a card face-up. See `RoundState::select` for the rules.
    pub fn select(&mut self, id: &CardId) -> SelectOutcome {
        let outcome = self.round.select(id, self.config.match_bonus);

        match &outcome {
            SelectOutcome::Ignored(_) => {}
            SelectOutcome::Flipped => self.events.push(RoundEvent::CardFlipped(id.clone())),
            SelectOutcome::Evaluated {
                evaluation,
                ticket,
                summary,
            } => {
                self.events.push(RoundEvent::CardFlipped(id.clone()));
                if let Some(event) = self.evaluation_event(*evaluation, *ticket) {
                    self.events.push(event);
                }
                if let Some(summary) = summary {
                    self.events.push(RoundEvent::RoundCompleted(summary.clone()));
                    self.summary = Some(summary.clone());
                }
            }
        }

        outcome
    }

    /// Convenience for hosts holding the card itself.
    pub fn select_card(&mut self, card: &Card) -> SelectOutcome {
        self.select(card.id())
    }

    fn evaluation_event(&self, evaluation: Evaluation, ticket: HoldTicket) -> Option<RoundEvent> {
        match evaluation {
            Evaluation::Match(pair_key) => Some(RoundEvent::PairMatched { pair_key, ticket }),
            Evaluation::Mismatch => {
                let (first, second) = self.round.selected().pair()?;
                Some(RoundEvent::PairMismatched {
                    first: first.id().clone(),
                    second: second.id().clone(),
                    ticket,
                })
            }
        }
    }

    /// End a display hold. Returns false for stale or already used tickets.
    pub fn release_hold(&mut self, ticket: HoldTicket) -> bool {
        let released = self.round.release_hold(ticket);
        if released {
            self.events.push(RoundEvent::SelectionCleared(ticket));
        }
        released
    }

    /// Clock tick. Returns false if the round is completed or paused.
    pub fn advance(&mut self) -> bool {
        let advanced = self.round.tick();
        if advanced {
            self.events.push(RoundEvent::Ticked(self.round.elapsed_seconds()));
        }
        advanced
    }

    pub fn pause(&mut self) {
        self.round.pause();
    }

    pub fn resume(&mut self) {
        self.round.resume();
    }

    /// Abandon the current round and start a fresh one with a new shuffle.
    ///
    /// No summary is produced for the abandoned round. Hold tickets issued
    /// before the reset no longer release anything, and undrained events
    /// from the old round are dropped.
    pub fn reset(&mut self) {
        self.generation += 1;
        let deck = build_deck(&self.vocabulary, &mut self.shuffle);
        self.round = RoundState::new(deck, self.generation);
        self.summary = None;
        self.events.clear();
        self.events.push(RoundEvent::RoundReset {
            generation: self.generation,
        });
        info!(generation = self.generation, "round reset");
    }

    /// Take the events recorded since the last drain.
    ///
    /// The queue only empties here or on `reset`.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }

    /// Take the completed round's summary. Yields it once.
    pub fn take_summary(&mut self) -> Option<RoundSummary> {
        self.summary.take()
    }
}
