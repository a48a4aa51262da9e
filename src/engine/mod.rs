//! Game engine for match-the-pairs rounds.
//!
//! `GameEngine` owns the vocabulary, configuration, shuffle source and the
//! current `RoundState`. Hosts drive it with discrete calls and read
//! snapshots, events and the end-of-round summary back out.

mod game;

pub use game::GameEngine;
