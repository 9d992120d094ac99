//! Win condition evaluation.
//!
//! The controller calls into `win` after every state-changing operation.
//! The evaluator is a pure function of the roster.

pub mod win;

pub use win::{check_winner, is_game_over, is_winner};
