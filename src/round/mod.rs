//! Round controller: the state machine that sequences night actions,
//! the vote and the win check.

pub mod controller;

pub use controller::{Game, Phase, RoundSummary};
