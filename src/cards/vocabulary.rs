//! Vocabulary input.
//!
//! A `Vocabulary` is the validated list of term/definition pairs a round is
//! played with. Validation happens once, at construction, so everything
//! downstream can rely on pair keys being unique and text being present.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::PairKey;
use crate::core::error::{ConfigurationError, PairField, Result};

/// One term and its definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyPair {
    pub pair_key: PairKey,
    pub term: String,
    pub definition: String,
}

impl VocabularyPair {
    #[must_use]
    pub fn new(pair_key: PairKey, term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            pair_key,
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Validated, ordered vocabulary.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{PairKey, Vocabulary, VocabularyPair};
///
/// let vocab = Vocabulary::new(vec![
///     VocabularyPair::new(PairKey::new(1), "Ovulasi", "Pelepasan sel telur dari ovarium"),
/// ])
/// .unwrap();
///
/// assert_eq!(vocab.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    pairs: Vec<VocabularyPair>,
}

impl Vocabulary {
    /// Validate and wrap a list of pairs.
    ///
    /// Fails on an empty list, a repeated pair key, or a blank term or
    /// definition.
    pub fn new(pairs: Vec<VocabularyPair>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(ConfigurationError::EmptyVocabulary);
        }

        let mut seen = FxHashSet::default();
        for pair in &pairs {
            if !seen.insert(pair.pair_key) {
                return Err(ConfigurationError::DuplicatePairKey {
                    pair_key: pair.pair_key,
                });
            }
            if pair.term.trim().is_empty() {
                return Err(ConfigurationError::BlankText {
                    pair_key: pair.pair_key,
                    field: PairField::Term,
                });
            }
            if pair.definition.trim().is_empty() {
                return Err(ConfigurationError::BlankText {
                    pair_key: pair.pair_key,
                    field: PairField::Definition,
                });
            }
        }

        Ok(Self { pairs })
    }

    /// The built-in reproductive-health vocabulary (Indonesian).
    #[must_use]
    pub fn sample() -> Self {
        const PAIRS: [(u32, &str, &str); 5] = [
            (1, "Ovulasi", "Pelepasan sel telur dari ovarium"),
            (2, "Menstruasi", "Perdarahan bulanan dari rahim"),
            (3, "Fertilitas", "Kemampuan untuk menghasilkan keturunan"),
            (4, "Kontrasepsi", "Metode untuk mencegah kehamilan"),
            (5, "Spermatogenesis", "Proses pembentukan sperma"),
        ];

        Self {
            pairs: PAIRS
                .iter()
                .map(|&(key, term, definition)| {
                    VocabularyPair::new(PairKey::new(key), term, definition)
                })
                .collect(),
        }
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always false for a constructed vocabulary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn pairs(&self) -> &[VocabularyPair] {
        &self.pairs
    }
}

impl TryFrom<Vec<VocabularyPair>> for Vocabulary {
    type Error = ConfigurationError;

    fn try_from(pairs: Vec<VocabularyPair>) -> Result<Self> {
        Self::new(pairs)
    }
}

impl<'de> Deserialize<'de> for Vocabulary {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            pairs: Vec<VocabularyPair>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Vocabulary::new(raw.pairs).map_err(serde::de::Error::custom)
    }
}
