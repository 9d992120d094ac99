//! Core engine types: players, roles, roster, configuration, events, RNG.
//!
//! Everything the night actions, the vote and the round controller operate
//! on lives here.

pub mod config;
pub mod event;
pub mod player;
pub mod rng;
pub mod role;
pub mod roster;

pub use config::{GameConfig, RoleSeat, MAX_PLAYERS, MIN_PLAYERS};
pub use event::GameEvent;
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
pub use role::{Role, Side};
pub use roster::{Pool, Roster};
