//! Round state: deck, selection, matched pairs, counters and clock.
//!
//! ## Phases
//!
//! A round alternates between two phases:
//! - `Open`: zero or one card face-up, selections accepted
//! - `Holding`: two cards face-up and already evaluated, board locked until
//!   the hold ticket is released
//!
//! Evaluation always finishes inside the `select` call that filled the
//! second slot. Only clearing the selection is deferred.
//!
//! ## Completion
//!
//! The round completes on the match that covers the last pair. The clock
//! stops, and the summary is produced exactly once.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::clock::RoundClock;
use super::selection::{
    pairs_match, Evaluation, HoldTicket, IgnoreReason, SelectOutcome, Selection,
};
use crate::cards::{CardId, Deck, PairKey};

/// Whether the round is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    Running,
    Completed,
}

/// Evaluation phase of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Open,
    Holding(HoldTicket),
}

/// Read-only view of the round for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub score: u32,
    pub moves: u32,
    pub elapsed_seconds: u32,
    pub matched_count: usize,
    pub total_pairs: usize,
    pub status: RoundStatus,
    /// Ids of the face-up cards, in selection order.
    pub selected: Vec<CardId>,
    /// True while a hold is running.
    pub locked: bool,
}

/// End-of-round result handed to the results store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub score: u32,
    pub moves: u32,
    #[serde(rename = "time")]
    pub elapsed_seconds: u32,
    pub matched_count: usize,
    pub total_pairs: usize,
    /// Pair keys in the order they were matched.
    pub matched_pair_keys: Vec<PairKey>,
}

/// Complete state of one round.
///
/// Created fresh for every round; a reset replaces it wholesale.
#[derive(Clone, Debug)]
pub struct RoundState {
    deck: Deck,
    selected: Selection,
    /// Matched pairs in match order.
    matched: Vec<PairKey>,
    matched_set: FxHashSet<PairKey>,
    moves: u32,
    score: u32,
    clock: RoundClock,
    status: RoundStatus,
    phase: Phase,
    generation: u64,
    holds_issued: u64,
    summary_emitted: bool,
}

impl RoundState {
    /// Start a round on the given deck.
    ///
    /// `generation` distinguishes this round from earlier ones so stale hold
    /// tickets can be recognised.
    #[must_use]
    pub fn new(deck: Deck, generation: u64) -> Self {
        Self {
            deck,
            selected: Selection::new(),
            matched: Vec::new(),
            matched_set: FxHashSet::default(),
            moves: 0,
            score: 0,
            clock: RoundClock::new(),
            status: RoundStatus::Running,
            phase: Phase::Open,
            generation,
            holds_issued: 0,
            summary_emitted: false,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn selected(&self) -> &Selection {
        &self.selected
    }

    #[must_use]
    pub fn matched_pair_keys(&self) -> &[PairKey] {
        &self.matched
    }

    #[must_use]
    pub fn is_matched(&self, pair_key: PairKey) -> bool {
        self.matched_set.contains(&pair_key)
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.clock.elapsed_seconds()
    }

    #[must_use]
    pub fn clock(&self) -> &RoundClock {
        &self.clock
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.deck.pair_count()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == RoundStatus::Completed
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            score: self.score,
            moves: self.moves,
            elapsed_seconds: self.elapsed_seconds(),
            matched_count: self.matched.len(),
            total_pairs: self.total_pairs(),
            status: self.status,
            selected: self.selected.cards().iter().map(|c| c.id().clone()).collect(),
            locked: matches!(self.phase, Phase::Holding(_)),
        }
    }

    // === Operations ===

    /// Turn a card face-up.
    ///
    /// Ignored if the card is unknown, already matched, already face-up, or
    /// if two cards are up. The second accepted card is evaluated
    /// immediately: one move is counted, a match scores `match_bonus`, and
    /// the board locks until the returned ticket is released.
    pub fn select(&mut self, id: &CardId, match_bonus: u32) -> SelectOutcome {
        let Some(card) = self.deck.get(id) else {
            debug!(card = %id, "ignoring unknown card");
            return SelectOutcome::Ignored(IgnoreReason::UnknownCard);
        };

        let reason = if self.matched_set.contains(&card.pair_key()) {
            Some(IgnoreReason::AlreadyMatched)
        } else if self.selected.contains(id) {
            Some(IgnoreReason::AlreadySelected)
        } else if self.selected.is_full() {
            Some(IgnoreReason::BoardLocked)
        } else {
            None
        };
        if let Some(reason) = reason {
            debug!(card = %id, ?reason, "selection ignored");
            return SelectOutcome::Ignored(reason);
        }

        self.selected.push(card.clone());
        if !self.selected.is_full() {
            debug!(card = %id, "card flipped");
            return SelectOutcome::Flipped;
        }

        let evaluation = self.evaluate(match_bonus);
        self.holds_issued += 1;
        let ticket = HoldTicket::new(self.generation, self.holds_issued, evaluation.hold_kind());
        self.phase = Phase::Holding(ticket);

        let summary = if self.is_completed() { self.emit_summary() } else { None };

        SelectOutcome::Evaluated {
            evaluation,
            ticket,
            summary,
        }
    }

    /// Score the full selection. Called exactly once per move.
    fn evaluate(&mut self, match_bonus: u32) -> Evaluation {
        self.moves += 1;

        let matched_key = match self.selected.pair() {
            Some((a, b)) if pairs_match(a, b) => Some(a.pair_key()),
            _ => None,
        };

        let Some(pair_key) = matched_key else {
            debug!(moves = self.moves, "pair mismatched");
            return Evaluation::Mismatch;
        };

        self.score = self.score.saturating_add(match_bonus);
        if self.matched_set.insert(pair_key) {
            self.matched.push(pair_key);
        }
        debug!(%pair_key, moves = self.moves, score = self.score, "pair matched");

        if self.matched.len() == self.total_pairs() {
            self.status = RoundStatus::Completed;
            self.clock.stop();
            info!(
                moves = self.moves,
                score = self.score,
                elapsed = self.elapsed_seconds(),
                "round completed"
            );
        }

        Evaluation::Match(pair_key)
    }

    /// Build the summary, at most once per round.
    fn emit_summary(&mut self) -> Option<RoundSummary> {
        if self.summary_emitted {
            return None;
        }
        self.summary_emitted = true;
        Some(self.summary())
    }

    /// Current totals as a summary. Does not count as the emitted summary.
    #[must_use]
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            score: self.score,
            moves: self.moves,
            elapsed_seconds: self.elapsed_seconds(),
            matched_count: self.matched.len(),
            total_pairs: self.total_pairs(),
            matched_pair_keys: self.matched.clone(),
        }
    }

    /// End a hold and clear the selection.
    ///
    /// Returns false, changing nothing, if the ticket belongs to another
    /// round or its hold has already been released.
    pub fn release_hold(&mut self, ticket: HoldTicket) -> bool {
        if self.phase != Phase::Holding(ticket) {
            debug!(
                generation = ticket.generation,
                sequence = ticket.sequence,
                "stale hold ticket"
            );
            return false;
        }
        self.selected.clear();
        self.phase = Phase::Open;
        true
    }

    /// Count one clock tick. Returns false if the clock did not advance.
    pub fn tick(&mut self) -> bool {
        if self.is_completed() {
            return false;
        }
        let advanced = self.clock.advance();
        if advanced {
            trace!(elapsed = self.elapsed_seconds(), "tick");
        }
        advanced
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{build_deck, CardKind, PairKey, Vocabulary, VocabularyPair};
    use crate::core::rng::Unshuffled;

    fn state(pairs: u32) -> RoundState {
        let vocab = Vocabulary::new(
            (1..=pairs)
                .map(|k| VocabularyPair::new(PairKey::new(k), format!("T{k}"), format!("d{k}")))
                .collect(),
        )
        .unwrap();
        RoundState::new(build_deck(&vocab, &mut Unshuffled), 0)
    }

    fn id(key: u32, kind: CardKind) -> CardId {
        CardId::for_face(PairKey::new(key), kind)
    }

    #[test]
    fn test_fresh_state() {
        let s = state(3);
        let snap = s.snapshot();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.moves, 0);
        assert_eq!(snap.total_pairs, 3);
        assert_eq!(snap.status, RoundStatus::Running);
        assert!(!snap.locked);
        assert_eq!(s.phase(), Phase::Open);
    }

    #[test]
    fn test_first_card_does_not_count_a_move() {
        let mut s = state(2);
        assert_eq!(s.select(&id(1, CardKind::Term), 20), SelectOutcome::Flipped);
        assert_eq!(s.moves(), 0);
        assert_eq!(s.selected().len(), 1);
    }

    #[test]
    fn test_match_scores_and_locks() {
        let mut s = state(2);
        s.select(&id(1, CardKind::Term), 20);
        let outcome = s.select(&id(1, CardKind::Definition), 20);

        let ticket = outcome.ticket().unwrap();
        assert!(matches!(
            outcome,
            SelectOutcome::Evaluated { evaluation: Evaluation::Match(k), summary: None, .. }
                if k == PairKey::new(1)
        ));
        assert_eq!(s.moves(), 1);
        assert_eq!(s.score(), 20);
        assert!(s.is_matched(PairKey::new(1)));
        assert_eq!(s.phase(), Phase::Holding(ticket));

        assert_eq!(
            s.select(&id(2, CardKind::Term), 20),
            SelectOutcome::Ignored(IgnoreReason::BoardLocked)
        );

        assert!(s.release_hold(ticket));
        assert!(s.selected().is_empty());
        assert!(!s.release_hold(ticket));
    }

    #[test]
    fn test_same_face_pair_is_mismatch() {
        let mut s = state(2);
        s.select(&id(1, CardKind::Term), 20);
        let outcome = s.select(&id(2, CardKind::Term), 20);

        assert!(matches!(
            outcome,
            SelectOutcome::Evaluated { evaluation: Evaluation::Mismatch, .. }
        ));
        assert_eq!(s.moves(), 1);
        assert_eq!(s.score(), 0);
        assert!(s.matched_pair_keys().is_empty());
    }

    #[test]
    fn test_ignore_reasons() {
        let mut s = state(2);
        let unknown = CardId::for_face(PairKey::new(99), CardKind::Term);
        assert_eq!(s.select(&unknown, 20), SelectOutcome::Ignored(IgnoreReason::UnknownCard));

        s.select(&id(1, CardKind::Term), 20);
        assert_eq!(
            s.select(&id(1, CardKind::Term), 20),
            SelectOutcome::Ignored(IgnoreReason::AlreadySelected)
        );

        let ticket = s.select(&id(1, CardKind::Definition), 20).ticket().unwrap();
        s.release_hold(ticket);
        assert_eq!(
            s.select(&id(1, CardKind::Definition), 20),
            SelectOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
    }

    #[test]
    fn test_completion_stops_clock_and_emits_once() {
        let mut s = state(1);
        s.tick();
        s.select(&id(1, CardKind::Definition), 20);
        let outcome = s.select(&id(1, CardKind::Term), 20);

        let summary = match outcome {
            SelectOutcome::Evaluated { summary: Some(summary), .. } => summary,
            other => panic!("expected a completing evaluation, got {other:?}"),
        };
        assert_eq!(summary.elapsed_seconds, 1);
        assert_eq!(summary.matched_pair_keys, vec![PairKey::new(1)]);
        assert!(s.is_completed());

        assert!(!s.tick());
        assert_eq!(s.elapsed_seconds(), 1);
        assert!(s.emit_summary().is_none());
    }

    #[test]
    fn test_paused_clock_does_not_tick() {
        let mut s = state(1);
        s.pause();
        assert!(!s.tick());
        s.resume();
        assert!(s.tick());
        assert_eq!(s.elapsed_seconds(), 1);
    }

    #[test]
    fn test_summary_serializes_with_result_names() {
        let summary = RoundSummary {
            score: 40,
            moves: 3,
            elapsed_seconds: 12,
            matched_count: 2,
            total_pairs: 2,
            matched_pair_keys: vec![PairKey::new(2), PairKey::new(1)],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["time"], 12);
        assert_eq!(json["matchedCount"], 2);
        assert_eq!(json["totalPairs"], 2);
        assert_eq!(json["matchedPairKeys"], serde_json::json!([2, 1]));
    }
}
