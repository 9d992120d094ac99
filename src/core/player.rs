//! Player identification and per-player round state.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Seats are numbered from 1, so a six player
//! game has `PlayerId(1)` through `PlayerId(6)`.
//!
//! ## Player
//!
//! The mutable record the engine keeps for each seat: role, alive flag and
//! the vote bookkeeping for the current round.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Seat identifier supporting 1-255 players.
///
/// Ids are 1-based: the first seat is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the 0-based storage index for this seat.
    ///
    /// Returns `None` for the invalid id 0.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self.0 {
            0 => None,
            n => Some(n as usize - 1),
        }
    }

    /// Iterate over all seat IDs for a game with `player_count` players.
    ///
    /// ```
    /// use mafia_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(6).collect();
    /// assert_eq!(seats.len(), 6);
    /// assert_eq!(seats[0], PlayerId::new(1));
    /// assert_eq!(seats[5], PlayerId::new(6));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        let count = player_count.min(u8::MAX as usize) as u8;
        (1..=count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Mutable state of a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,

    /// Role dealt at game start.
    pub role: Role,

    /// False once eliminated or killed. Only a heal flips it back.
    pub alive: bool,

    /// Who this player voted for in the current round.
    pub vote: Option<PlayerId>,

    /// Votes received in the current round.
    pub vote_count: u32,
}

impl Player {
    /// Create a living player with no vote recorded.
    #[must_use]
    pub fn new(id: PlayerId, role: Role) -> Self {
        Self {
            id,
            role,
            alive: true,
            vote: None,
            vote_count: 0,
        }
    }

    /// Seat id. Immutable after creation.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Alive and holding `role`.
    #[must_use]
    pub fn is_alive_with(&self, role: Role) -> bool {
        self.alive && self.role == role
    }

    /// Record one more vote against this player.
    pub fn receive_vote(&mut self) {
        self.vote_count += 1;
    }

    /// Take back a vote previously recorded against this player.
    pub fn withdraw_vote(&mut self) {
        self.vote_count = self.vote_count.saturating_sub(1);
    }

    /// Forget this round's vote bookkeeping.
    pub fn clear_votes(&mut self) {
        self.vote = None;
        self.vote_count = 0;
    }
}
