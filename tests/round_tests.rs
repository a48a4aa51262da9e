//! Round scenario tests.
//!
//! These play complete rounds through the public engine API:
//! - Single-pair and multi-pair rounds to completion
//! - Mismatch handling and the hold lock
//! - Reset mid-round and mid-hold

use memory_match::cards::{CardKind, PairKey};
use memory_match::{
    CardId, ConfigurationError, Evaluation, GameEngine, IgnoreReason, RoundConfig, RoundEvent,
    RoundStatus, SelectOutcome, ShuffleSource, Vocabulary, VocabularyPair,
};

fn vocabulary(pairs: u32) -> Vocabulary {
    Vocabulary::new(
        (1..=pairs)
            .map(|k| VocabularyPair::new(PairKey::new(k), format!("Term {k}"), format!("def {k}")))
            .collect(),
    )
    .expect("valid vocabulary")
}

fn face<S: ShuffleSource>(engine: &GameEngine<S>, key: u32, kind: CardKind) -> CardId {
    engine
        .deck()
        .face(PairKey::new(key), kind)
        .expect("card on board")
        .id()
        .clone()
}

/// Match one pair and release its hold.
fn match_pair<S: ShuffleSource>(engine: &mut GameEngine<S>, key: u32) -> SelectOutcome {
    let term = face(engine, key, CardKind::Term);
    let def = face(engine, key, CardKind::Definition);
    engine.select(&term);
    let outcome = engine.select(&def);
    if let Some(ticket) = outcome.ticket() {
        engine.release_hold(ticket);
    }
    outcome
}

// =============================================================================
// Completion
// =============================================================================

/// One pair: term then definition completes the round.
#[test]
fn test_single_pair_round() {
    let vocab = Vocabulary::new(vec![VocabularyPair::new(PairKey::new(1), "A", "a")]).unwrap();
    let mut engine = GameEngine::new(vocab, RoundConfig::default()).unwrap();
    assert_eq!(engine.deck().len(), 2);

    let term = face(&engine, 1, CardKind::Term);
    let def = face(&engine, 1, CardKind::Definition);

    assert_eq!(engine.select(&term), SelectOutcome::Flipped);
    assert_eq!(engine.snapshot().selected, vec![term.clone()]);
    assert_eq!(engine.snapshot().moves, 0);

    let outcome = engine.select(&def);
    let SelectOutcome::Evaluated { evaluation, summary, .. } = outcome else {
        panic!("second card should be evaluated");
    };
    assert_eq!(evaluation, Evaluation::Match(PairKey::new(1)));

    let snap = engine.snapshot();
    assert_eq!(snap.moves, 1);
    assert_eq!(snap.score, 20);
    assert_eq!(snap.status, RoundStatus::Completed);
    assert_eq!(engine.round().matched_pair_keys(), &[PairKey::new(1)]);

    let summary = summary.expect("completing match carries the summary");
    assert_eq!(summary.score, 20);
    assert_eq!(summary.moves, 1);
    assert_eq!(summary.matched_count, 1);
    assert_eq!(summary.total_pairs, 1);
}

/// All five sample pairs, with some misses along the way.
#[test]
fn test_sample_round_to_completion() {
    let mut engine = GameEngine::new(Vocabulary::sample(), RoundConfig::default()).unwrap();

    // Two misses first
    for (a, b) in [(1, 2), (3, 4)] {
        let first = face(&engine, a, CardKind::Term);
        let second = face(&engine, b, CardKind::Definition);
        engine.select(&first);
        let ticket = engine.select(&second).ticket().unwrap();
        assert!(engine.release_hold(ticket));
    }
    assert_eq!(engine.snapshot().moves, 2);
    assert_eq!(engine.snapshot().score, 0);

    for key in [5, 3, 1, 4] {
        let outcome = match_pair(&mut engine, key);
        assert!(matches!(outcome, SelectOutcome::Evaluated { summary: None, .. }));
    }
    assert_eq!(engine.snapshot().status, RoundStatus::Running);

    let last = match_pair(&mut engine, 2);
    assert!(matches!(last, SelectOutcome::Evaluated { summary: Some(_), .. }));

    let summary = engine.take_summary().unwrap();
    assert_eq!(summary.moves, 7);
    assert_eq!(summary.score, 100);
    assert_eq!(summary.matched_count, 5);
    assert_eq!(summary.total_pairs, 5);
    assert_eq!(
        summary.matched_pair_keys,
        [5, 3, 1, 4, 2].map(PairKey::new).to_vec()
    );

    let completions = engine
        .drain_events()
        .iter()
        .filter(|e| matches!(e, RoundEvent::RoundCompleted(_)))
        .count();
    assert_eq!(completions, 1);
}

/// Nothing can be selected once the round is over.
#[test]
fn test_completed_round_ignores_selections() {
    let mut engine = GameEngine::new(vocabulary(1), RoundConfig::default()).unwrap();
    match_pair(&mut engine, 1);

    for kind in [CardKind::Term, CardKind::Definition] {
        let id = face(&engine, 1, kind);
        assert_eq!(engine.select(&id), SelectOutcome::Ignored(IgnoreReason::AlreadyMatched));
    }
    assert_eq!(engine.snapshot().moves, 1);
    assert!(engine.take_summary().is_some());
    assert!(engine.take_summary().is_none());
}

// =============================================================================
// Mismatch and hold lock
// =============================================================================

/// Two terms from different pairs: a move, no points, cleared after the hold.
#[test]
fn test_term_term_mismatch() {
    let mut engine = GameEngine::new(vocabulary(2), RoundConfig::default()).unwrap();
    let t1 = face(&engine, 1, CardKind::Term);
    let t2 = face(&engine, 2, CardKind::Term);

    engine.select(&t1);
    let outcome = engine.select(&t2);
    assert!(matches!(
        outcome,
        SelectOutcome::Evaluated { evaluation: Evaluation::Mismatch, summary: None, .. }
    ));

    let snap = engine.snapshot();
    assert_eq!((snap.moves, snap.score), (1, 0));
    assert_eq!(snap.status, RoundStatus::Running);
    assert!(snap.locked);
    assert_eq!(snap.selected, vec![t1, t2]);

    assert!(engine.release_hold(outcome.ticket().unwrap()));
    assert!(engine.snapshot().selected.is_empty());
    assert!(engine.round().matched_pair_keys().is_empty());
}

/// A third card cannot be flipped while two are up.
#[test]
fn test_third_card_blocked_during_hold() {
    let mut engine = GameEngine::new(vocabulary(3), RoundConfig::default()).unwrap();
    let t1 = face(&engine, 1, CardKind::Term);
    let d2 = face(&engine, 2, CardKind::Definition);
    let t3 = face(&engine, 3, CardKind::Term);

    engine.select(&t1);
    let ticket = engine.select(&d2).ticket().unwrap();

    assert_eq!(engine.select(&t3), SelectOutcome::Ignored(IgnoreReason::BoardLocked));
    assert_eq!(engine.snapshot().selected.len(), 2);
    assert_eq!(engine.snapshot().moves, 1);

    engine.release_hold(ticket);
    assert_eq!(engine.select(&t3), SelectOutcome::Flipped);
}

/// The same definition card clicked twice is not a move.
#[test]
fn test_double_click_is_not_a_move() {
    let mut engine = GameEngine::new(vocabulary(2), RoundConfig::default()).unwrap();
    let d1 = face(&engine, 1, CardKind::Definition);

    engine.select(&d1);
    for _ in 0..5 {
        assert_eq!(engine.select(&d1), SelectOutcome::Ignored(IgnoreReason::AlreadySelected));
    }
    assert_eq!(engine.snapshot().moves, 0);
    assert_eq!(engine.snapshot().selected, vec![d1]);
}

// =============================================================================
// Reset
// =============================================================================

/// Reset mid-round zeroes everything and reshuffles.
#[test]
fn test_reset_mid_round() {
    let mut engine = GameEngine::new(Vocabulary::sample(), RoundConfig::default()).unwrap();
    let first_deck = engine.deck().clone();

    engine.advance();
    engine.advance();
    match_pair(&mut engine, 2);
    let t1 = face(&engine, 1, CardKind::Term);
    engine.select(&t1);

    engine.reset();

    let snap = engine.snapshot();
    assert_eq!(snap.moves, 0);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.elapsed_seconds, 0);
    assert_eq!(snap.matched_count, 0);
    assert_eq!(snap.status, RoundStatus::Running);
    assert!(snap.selected.is_empty());
    assert!(engine.round().matched_pair_keys().is_empty());
    assert!(engine.take_summary().is_none());

    // Same cards, new order
    assert_eq!(engine.deck().len(), first_deck.len());
    assert_ne!(engine.deck(), &first_deck);
}

/// Resetting a completed round discards its unclaimed summary.
#[test]
fn test_reset_after_completion() {
    let mut engine = GameEngine::new(vocabulary(1), RoundConfig::default()).unwrap();
    match_pair(&mut engine, 1);
    engine.reset();

    assert!(engine.take_summary().is_none());
    assert_eq!(engine.snapshot().status, RoundStatus::Running);
    assert!(engine.advance());
}

/// A hold released after a reset does not touch the new round.
#[test]
fn test_stale_hold_after_reset() {
    let mut engine = GameEngine::new(vocabulary(2), RoundConfig::default()).unwrap();
    let t1 = face(&engine, 1, CardKind::Term);
    let t2 = face(&engine, 2, CardKind::Term);
    engine.select(&t1);
    let stale = engine.select(&t2).ticket().unwrap();

    engine.reset();
    let d1 = face(&engine, 1, CardKind::Definition);
    engine.select(&d1);

    assert!(!engine.release_hold(stale));
    assert_eq!(engine.snapshot().selected, vec![d1]);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_custom_match_bonus() {
    let config = RoundConfig::default().with_match_bonus(5);
    let mut engine = GameEngine::new(vocabulary(2), config).unwrap();
    match_pair(&mut engine, 1);
    match_pair(&mut engine, 2);
    assert_eq!(engine.take_summary().unwrap().score, 10);
}

#[test]
fn test_malformed_vocabulary() {
    let dup = vec![
        VocabularyPair::new(PairKey::new(1), "A", "a"),
        VocabularyPair::new(PairKey::new(1), "B", "b"),
    ];
    assert_eq!(
        GameEngine::from_pairs(dup, RoundConfig::default()).unwrap_err(),
        ConfigurationError::DuplicatePairKey { pair_key: PairKey::new(1) }
    );
}

/// Same seed, same sequence of decks across resets.
#[test]
fn test_seeded_sessions_reproduce() {
    let config = RoundConfig::default().with_seed(2024);
    let mut a = GameEngine::new(Vocabulary::sample(), config.clone()).unwrap();
    let mut b = GameEngine::new(Vocabulary::sample(), config).unwrap();

    for _ in 0..3 {
        assert_eq!(a.deck(), b.deck());
        a.reset();
        b.reset();
    }
}
