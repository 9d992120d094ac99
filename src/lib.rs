//! # mafia-engine
//!
//! Round engine for the Mafia social-deduction party game.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: roles, night actions, the day vote and the win check.
//!    Rendering, audio and networking belong to whatever drives the engine.
//!
//! 2. **Injectable randomness**: every random pick goes through a
//!    [`RandomSource`]. Seed a [`GameRng`] for reproducible games or script
//!    a [`ScriptedRng`] to pin every choice.
//!
//! 3. **Nothing is fatal**: an action with no eligible target returns
//!    `None`; a bad vote or an out-of-phase call returns a [`GameError`]
//!    and leaves the game untouched.
//!
//! ## Modules
//!
//! - `core`: players, roles, roster, configuration, events, RNG
//! - `actions`: Heal, Attack, Investigate, voting and elimination
//! - `rules`: win condition
//! - `round`: the round controller state machine ([`Game`])

pub mod actions;
pub mod core;
pub mod round;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameEvent, GameRng, GameRngState, Player, PlayerId, RandomSource, Role,
    RoleSeat, Roster, ScriptedRng, Side,
};

pub use crate::actions::{ActionOutcome, Elimination, NightOutcomes, RoleAction};

pub use crate::rules::check_winner;

pub use crate::round::{Game, Phase, RoundSummary};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Why a vote was not recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VoteRejection {
    #[error("voter is not seated")]
    UnknownVoter,

    #[error("target is not seated")]
    UnknownTarget,

    #[error("players cannot vote for themselves")]
    SelfVote,

    #[error("voter is dead")]
    VoterDead,

    #[error("target is dead")]
    TargetDead,
}

/// Errors produced by engine operations. None of them is fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The vote was rejected and not recorded.
    #[error("invalid vote from {voter} for {target}: {reason}")]
    InvalidVoteTarget {
        voter: PlayerId,
        target: PlayerId,
        reason: VoteRejection,
    },

    /// The operation is not allowed in the current phase.
    #[error("{operation} is not allowed during {phase}")]
    IllegalStateTransition {
        operation: &'static str,
        phase: Phase,
    },

    /// The configuration cannot deal the requested table.
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}
