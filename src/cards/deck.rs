//! Deck building.
//!
//! `build_deck` turns a vocabulary into the shuffled board: two cards per
//! pair (term and definition), then one pass of the injected shuffle.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, CardKind, PairKey};
use super::vocabulary::Vocabulary;
use crate::core::rng::ShuffleSource;

/// The cards of one round, in board order.
///
/// Invariant: every pair key appears exactly twice, once as a term and once
/// as a definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Number of cards (twice the number of pairs).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Find a card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    /// Find the card showing one face of a pair.
    #[must_use]
    pub fn face(&self, pair_key: PairKey, kind: CardKind) -> Option<&Card> {
        self.cards
            .iter()
            .find(|c| c.pair_key() == pair_key && c.kind() == kind)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Build a shuffled deck from a vocabulary.
///
/// Pure apart from advancing the shuffle source: the same source state
/// always yields the same deck.
pub fn build_deck<S: ShuffleSource>(vocabulary: &Vocabulary, shuffle: &mut S) -> Deck {
    let mut cards = Vec::with_capacity(vocabulary.len() * 2);
    for pair in vocabulary.pairs() {
        cards.push(Card::new(pair.pair_key, CardKind::Term, pair.term.as_str()));
        cards.push(Card::new(pair.pair_key, CardKind::Definition, pair.definition.as_str()));
    }

    shuffle.shuffle(&mut cards);

    Deck { cards }
}
