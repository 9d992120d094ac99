//! Operators that read and mutate the roster.
//!
//! - `night`: Heal, Attack and Investigate, dispatched by [`RoleAction`]
//! - `vote`: casting votes, tallying, eliminating the top-voted player
//!
//! These are free functions over a [`Roster`](crate::core::Roster) and a
//! random source. They do not know about rounds or phases; the round
//! controller decides when they may run.

pub mod night;
pub mod vote;

pub use night::{attack, heal, investigate, ActionOutcome, NightOutcomes, RoleAction};
pub use vote::{
    cast_vote, clear_votes, eliminate_top_voted, random_target, recount, tally_votes, top_voted,
    Elimination,
};
