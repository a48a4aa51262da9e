//! Error types for round construction.
//!
//! Gameplay itself never fails: rejected selections are ordinary user input
//! and are reported as ignored outcomes. Only malformed setup data reaches
//! the caller as an error.

use thiserror::Error;

use crate::cards::PairKey;

/// Result type alias using ConfigurationError.
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Which side of a vocabulary pair a problem refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairField {
    Term,
    Definition,
}

impl std::fmt::Display for PairField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairField::Term => f.write_str("term"),
            PairField::Definition => f.write_str("definition"),
        }
    }
}

/// Errors raised when a round cannot be set up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("vocabulary must contain at least one pair")]
    EmptyVocabulary,

    #[error("duplicate pair key {pair_key}")]
    DuplicatePairKey { pair_key: PairKey },

    #[error("pair {pair_key} has a blank {field}")]
    BlankText { pair_key: PairKey, field: PairField },

    #[error("tick period must be greater than zero")]
    ZeroTickPeriod,
}
