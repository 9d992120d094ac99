//! Game configuration.
//!
//! `GameConfig` decides how roles are dealt when a game starts:
//! - `mafia_seat`: the seat forced to Mafia (seat 3 by default), or `None`
//!   to pick it with the game's random source
//! - `role_seats`: optional extra seats dealt Doctor or Police
//! - `max_rounds`: cap for autoplay so a heal/kill stalemate still ends
//!
//! Every other seat is a Civilian. The default deals one Mafia at seat 3
//! and Civilians everywhere else.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::rng::RandomSource;
use super::role::Role;
use super::roster::Roster;
use crate::GameError;

/// Smallest table that can hold a Mafia and a Civilian.
pub const MIN_PLAYERS: usize = 2;

/// `PlayerId` is a `u8`.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// A seat dealt a specific role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSeat {
    pub seat: PlayerId,
    pub role: Role,
}

/// Role dealing and autoplay settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seat forced to Mafia. `None` picks one at random.
    pub mafia_seat: Option<PlayerId>,

    /// Additional non-Civilian seats (Doctor, Police).
    pub role_seats: Vec<RoleSeat>,

    /// Rounds `play_to_completion` runs before giving up.
    pub max_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mafia_seat: Some(PlayerId::new(3)),
            role_seats: Vec::new(),
            max_rounds: 100,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Force Mafia onto `seat`.
    #[must_use]
    pub fn with_mafia_seat(mut self, seat: PlayerId) -> Self {
        self.mafia_seat = Some(seat);
        self
    }

    /// Pick the Mafia seat at random when the game starts.
    #[must_use]
    pub fn random_mafia_seat(mut self) -> Self {
        self.mafia_seat = None;
        self
    }

    /// Deal `role` to `seat`.
    #[must_use]
    pub fn with_role(mut self, seat: PlayerId, role: Role) -> Self {
        self.role_seats.push(RoleSeat { seat, role });
        self
    }

    /// Set the autoplay round cap.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Check that this configuration can deal a table of `player_count`.
    pub fn validate(&self, player_count: usize) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(GameError::InvalidConfig(format!(
                "player count must be {MIN_PLAYERS}-{MAX_PLAYERS}, got {player_count}"
            )));
        }

        let in_range = |seat: PlayerId| seat.index().is_some_and(|i| i < player_count);

        if let Some(seat) = self.mafia_seat {
            if !in_range(seat) {
                return Err(GameError::InvalidConfig(format!(
                    "mafia seat {} outside a table of {player_count}",
                    seat.0
                )));
            }
        }

        for (i, entry) in self.role_seats.iter().enumerate() {
            if !in_range(entry.seat) {
                return Err(GameError::InvalidConfig(format!(
                    "{} seat {} outside a table of {player_count}",
                    entry.role, entry.seat.0
                )));
            }
            if matches!(entry.role, Role::Mafia | Role::Civilian) {
                return Err(GameError::InvalidConfig(format!(
                    "seat {} cannot be dealt {}; only doctor and police seats are configurable",
                    entry.seat.0, entry.role
                )));
            }
            if self.mafia_seat == Some(entry.seat)
                || self.role_seats[..i].iter().any(|other| other.seat == entry.seat)
            {
                return Err(GameError::InvalidConfig(format!(
                    "seat {} dealt more than one role",
                    entry.seat.0
                )));
            }
        }

        // A random Mafia seat still needs a Civilian-or-better seat to land on.
        if self.mafia_seat.is_none() && self.role_seats.len() >= player_count {
            return Err(GameError::InvalidConfig(
                "no free seat left for the mafia".to_string(),
            ));
        }

        Ok(())
    }

    /// Deal a fresh roster of `player_count` seats.
    ///
    /// Uses `rng` only when the Mafia seat is unassigned.
    pub fn deal(
        &self,
        player_count: usize,
        rng: &mut impl RandomSource,
    ) -> Result<Roster, GameError> {
        self.validate(player_count)?;

        let mut roster = Roster::civilians(player_count);
        for entry in &self.role_seats {
            if let Some(player) = roster.by_id_mut(entry.seat) {
                player.role = entry.role;
            }
        }

        let mafia_seat = match self.mafia_seat {
            Some(seat) => Some(seat),
            None => {
                let free = roster.pool(|p| p.role == Role::Civilian);
                rng.pick(&free)
            }
        };
        if let Some(player) = mafia_seat.and_then(|seat| roster.by_id_mut(seat)) {
            player.role = Role::Mafia;
        }

        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, Player, ScriptedRng};

    fn roles(roster: &Roster) -> Vec<Role> {
        roster.iter().map(|p| p.role).collect()
    }

    #[test]
    fn test_default_deals_mafia_at_seat_three() {
        let roster = GameConfig::default().deal(6, &mut GameRng::new(1)).unwrap();

        assert_eq!(
            roles(&roster),
            vec![
                Role::Civilian,
                Role::Civilian,
                Role::Mafia,
                Role::Civilian,
                Role::Civilian,
                Role::Civilian,
            ]
        );
    }

    #[test]
    fn test_special_roles() {
        let config = GameConfig::new()
            .with_role(PlayerId::new(1), Role::Doctor)
            .with_role(PlayerId::new(5), Role::Police);
        let roster = config.deal(5, &mut GameRng::new(1)).unwrap();

        assert_eq!(
            roles(&roster),
            vec![Role::Doctor, Role::Civilian, Role::Mafia, Role::Civilian, Role::Police]
        );
    }

    #[test]
    fn test_random_mafia_seat_uses_rng() {
        let config = GameConfig::new()
            .random_mafia_seat()
            .with_role(PlayerId::new(1), Role::Doctor);
        // Free seats are 2..=4; index 2 lands on seat 4.
        let roster = config.deal(4, &mut ScriptedRng::new([2])).unwrap();

        let mafia: Vec<_> = roster.alive_with_role(Role::Mafia).map(Player::id).collect();
        assert_eq!(mafia, vec![PlayerId::new(4)]);
    }

    #[test]
    fn test_rejects_bad_player_count() {
        let config = GameConfig::default();
        assert!(matches!(config.validate(1), Err(GameError::InvalidConfig(_))));
        assert!(matches!(config.validate(256), Err(GameError::InvalidConfig(_))));
        // Seat 3 does not exist at a table of two.
        assert!(matches!(config.validate(2), Err(GameError::InvalidConfig(_))));
        assert!(config.validate(3).is_ok());
    }

    #[test]
    fn test_rejects_conflicting_seats() {
        let clash = GameConfig::new().with_role(PlayerId::new(3), Role::Doctor);
        assert!(matches!(clash.validate(6), Err(GameError::InvalidConfig(_))));

        let twice = GameConfig::new()
            .with_role(PlayerId::new(1), Role::Doctor)
            .with_role(PlayerId::new(1), Role::Police);
        assert!(matches!(twice.validate(6), Err(GameError::InvalidConfig(_))));

        let extra_mafia = GameConfig::new().with_role(PlayerId::new(4), Role::Mafia);
        assert!(matches!(extra_mafia.validate(6), Err(GameError::InvalidConfig(_))));

        let off_table = GameConfig::new().with_role(PlayerId::new(9), Role::Police);
        assert!(matches!(off_table.validate(6), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{ "mafia_seat": 2, "role_seats": [{ "seat": 4, "role": "Police" }] }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.mafia_seat, Some(PlayerId::new(2)));
        assert_eq!(
            config.role_seats,
            vec![RoleSeat {
                seat: PlayerId::new(4),
                role: Role::Police,
            }]
        );
        // Missing fields fall back to defaults
        assert_eq!(config.max_rounds, 100);
    }
}
