//! Core engine types: RNG, configuration, errors.
//!
//! These are the building blocks shared by deck building and round logic.

pub mod config;
pub mod error;
pub mod rng;

pub use config::RoundConfig;
pub use error::{ConfigurationError, PairField, Result};
pub use rng::{GameRng, ShuffleSource, Unshuffled};
