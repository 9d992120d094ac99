//! Game events.
//!
//! Every state change the engine makes is appended to the game's event log
//! as a [`GameEvent`]. The presentation layer reads the log to show death,
//! save and investigation messages; tests read it to check what happened.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::role::Side;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A roster was dealt.
    GameStarted {
        player_count: usize,
        mafia_seat: Option<PlayerId>,
    },

    /// The Doctor revived a dead player.
    Saved { round: u32, player: PlayerId },

    /// The Doctor found nobody to save.
    NothingToSave { round: u32 },

    /// The Mafia killed a player.
    Killed { round: u32, player: PlayerId },

    /// The Mafia had nobody left to attack.
    NoKill { round: u32 },

    /// The Police identified a Mafia player (or failed to).
    Investigated {
        round: u32,
        found_mafia: Option<PlayerId>,
    },

    /// A vote was recorded.
    VoteCast {
        round: u32,
        voter: PlayerId,
        target: PlayerId,
    },

    /// A vote count removed a player.
    Eliminated {
        round: u32,
        player: PlayerId,
        votes: u32,
    },

    /// A vote count removed nobody.
    NoElimination { round: u32 },

    /// A new round began.
    RoundStarted { round: u32 },

    /// The game ended.
    GameOver { round: u32, winner: Side },
}

impl GameEvent {
    /// The player this event is about, if any.
    #[must_use]
    pub fn subject(&self) -> Option<PlayerId> {
        match self {
            GameEvent::Saved { player, .. }
            | GameEvent::Killed { player, .. }
            | GameEvent::Eliminated { player, .. } => Some(*player),
            GameEvent::Investigated { found_mafia, .. } => *found_mafia,
            GameEvent::VoteCast { voter, .. } => Some(*voter),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { player_count, .. } => {
                write!(f, "Game started with {player_count} players")
            }
            GameEvent::Saved { player, .. } => write!(f, "{player} was saved by Doctor!"),
            GameEvent::NothingToSave { .. } => {
                write!(f, "Doctor tried to save a life but there was no one to save.")
            }
            GameEvent::Killed { player, .. } => write!(f, "{player} was killed by Mafia!"),
            GameEvent::NoKill { .. } => write!(f, "Mafia found no one to attack."),
            GameEvent::Investigated { found_mafia: Some(player), .. } => {
                write!(f, "Police found Mafia: {player}")
            }
            GameEvent::Investigated { found_mafia: None, .. } => {
                write!(f, "Police couldn't find Mafia.")
            }
            GameEvent::VoteCast { voter, target, .. } => write!(f, "{voter} voted for {target}"),
            GameEvent::Eliminated { player, votes, .. } => {
                write!(f, "{player} has been eliminated with {votes} votes!")
            }
            GameEvent::NoElimination { .. } => write!(f, "Nobody was eliminated."),
            GameEvent::RoundStarted { round } => write!(f, "Round {round} begins"),
            GameEvent::GameOver { winner, .. } => write!(f, "Game over! The {winner} win."),
        }
    }
}
