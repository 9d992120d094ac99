//! Win condition.
//!
//! The game is over when no Civilian is alive or no Mafia is alive:
//!
//! - no living Civilian → Mafia wins (checked first, so an empty table
//!   reports Mafia)
//! - otherwise no living Mafia → Civilians win
//!
//! "Civilian" means the Civilian role itself. Doctor and Police seats play
//! for the civilians' side but do not keep the game going on their own.
//! Mafia does not win merely by equalling or outnumbering civilians.

use crate::core::{Player, Role, Roster, Side};

/// Evaluate the roster. `None` while the game continues.
#[must_use]
pub fn check_winner(roster: &Roster) -> Option<Side> {
    if !roster.has_alive(Role::Civilian) {
        Some(Side::Mafia)
    } else if !roster.has_alive(Role::Mafia) {
        Some(Side::Civilians)
    } else {
        None
    }
}

/// Whether the roster satisfies the termination predicate.
#[must_use]
pub fn is_game_over(roster: &Roster) -> bool {
    check_winner(roster).is_some()
}

/// Whether `player` is on the winning side.
#[must_use]
pub fn is_winner(winner: Side, player: &Player) -> bool {
    player.role.side() == winner
}
