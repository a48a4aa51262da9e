//! Cards, vocabulary and deck building.
//!
//! - `Card`: one face (term or definition) of a vocabulary pair
//! - `Vocabulary`: validated term/definition input
//! - `build_deck`: vocabulary to shuffled board

pub mod card;
pub mod deck;
pub mod vocabulary;

pub use card::{Card, CardId, CardKind, PairKey};
pub use deck::{build_deck, Deck};
pub use vocabulary::{Vocabulary, VocabularyPair};
