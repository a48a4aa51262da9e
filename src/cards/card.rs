//! Card identity.
//!
//! A `Card` is one face of a vocabulary pair: either the term or its
//! definition. Cards are created by the deck builder and never change for
//! the rest of the round; fields are only reachable through accessors.

use serde::{Deserialize, Serialize};

/// Identifier linking a term card to its definition card.
///
/// Pair keys come from the vocabulary and are opaque to the engine beyond
/// equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairKey(pub u32);

impl PairKey {
    /// Create a new pair key.
    #[must_use]
    pub const fn new(key: u32) -> Self {
        Self(key)
    }

    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which face of a pair a card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Term,
    Definition,
}

impl CardKind {
    /// Suffix used when deriving a card id from its pair key.
    #[must_use]
    pub const fn id_suffix(self) -> &'static str {
        match self {
            CardKind::Term => "term",
            CardKind::Definition => "def",
        }
    }
}

/// Unique card identifier within a deck.
///
/// Derived from the pair key and kind, e.g. `"3-term"` or `"3-def"`, so ids
/// are stable across reshuffles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Build the id for one face of a pair.
    #[must_use]
    pub fn for_face(pair_key: PairKey, kind: CardKind) -> Self {
        Self(format!("{}-{}", pair_key, kind.id_suffix()))
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    value: String,
    pair_key: PairKey,
    kind: CardKind,
}

impl Card {
    /// Create a card for one face of a pair.
    #[must_use]
    pub fn new(pair_key: PairKey, kind: CardKind, value: impl Into<String>) -> Self {
        Self {
            id: CardId::for_face(pair_key, kind),
            value: value.into(),
            pair_key,
            kind,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.id
    }

    /// Text shown on the card face.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn pair_key(&self) -> PairKey {
        self.pair_key
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }
}
