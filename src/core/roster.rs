//! Player registry.
//!
//! A [`Roster`] is created once at game start and never grows or shrinks.
//! Players are stored in seat order, so iteration is always by ascending
//! [`PlayerId`] and lookups are O(1). Eliminating a player flips its
//! `alive` flag; entries are never removed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Player, PlayerId};
use super::role::Role;

/// Candidate seats for a random pick. Rosters are small, so pools stay
/// on the stack.
pub type Pool = SmallVec<[PlayerId; 8]>;

/// Fixed roster of players for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster dealing `roles` to seats 1, 2, 3, ... in order.
    ///
    /// Roles past seat 255 are ignored.
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        let players = roles
            .into_iter()
            .zip(1..=u8::MAX)
            .map(|(role, id)| Player::new(PlayerId::new(id), role))
            .collect();

        Self { players }
    }

    /// Roster of `player_count` civilians.
    #[must_use]
    pub fn civilians(player_count: usize) -> Self {
        Self::new(std::iter::repeat(Role::Civilian).take(player_count))
    }

    /// Number of seats, dead or alive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True for a roster with no seats.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn by_id(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index()?)
    }

    /// Look up a player by id for mutation.
    pub fn by_id_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index()?)
    }

    /// Iterate over every player in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate mutably over every player in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Living players in seat order.
    pub fn all_alive(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.alive)
    }

    /// Living players holding `role`, in seat order.
    pub fn alive_with_role(&self, role: Role) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.is_alive_with(role))
    }

    /// Dead players in seat order.
    pub fn all_dead(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.alive)
    }

    /// Number of living players.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.all_alive().count()
    }

    /// Whether anyone holding `role` is still alive.
    #[must_use]
    pub fn has_alive(&self, role: Role) -> bool {
        self.players.iter().any(|p| p.is_alive_with(role))
    }

    /// Ids of the players matching `filter`, in seat order.
    pub fn pool(&self, filter: impl Fn(&Player) -> bool) -> Pool {
        self.players
            .iter()
            .filter(|p| filter(*p))
            .map(Player::id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Roster {
        Roster::new([Role::Civilian, Role::Doctor, Role::Mafia, Role::Police, Role::Civilian])
    }

    #[test]
    fn test_ids_are_sequential() {
        let roster = sample();

        let ids: Vec<_> = roster.iter().map(Player::id).collect();
        assert_eq!(ids, PlayerId::all(5).collect::<Vec<_>>());
        assert_eq!(roster.len(), 5);
        assert!(!roster.is_empty());
    }

    #[test]
    fn test_by_id() {
        let roster = sample();

        assert_eq!(roster.by_id(PlayerId::new(3)).map(|p| p.role), Some(Role::Mafia));
        assert!(roster.by_id(PlayerId::new(0)).is_none());
        assert!(roster.by_id(PlayerId::new(6)).is_none());
    }

    #[test]
    fn test_alive_filters() {
        let mut roster = sample();
        roster.by_id_mut(PlayerId::new(1)).unwrap().alive = false;

        let alive: Vec<_> = roster.all_alive().map(Player::id).collect();
        assert_eq!(
            alive,
            vec![PlayerId::new(2), PlayerId::new(3), PlayerId::new(4), PlayerId::new(5)]
        );
        assert_eq!(roster.alive_count(), 4);

        let civilians: Vec<_> = roster.alive_with_role(Role::Civilian).map(Player::id).collect();
        assert_eq!(civilians, vec![PlayerId::new(5)]);

        let dead: Vec<_> = roster.all_dead().map(Player::id).collect();
        assert_eq!(dead, vec![PlayerId::new(1)]);
    }

    #[test]
    fn test_has_alive() {
        let mut roster = sample();
        assert!(roster.has_alive(Role::Mafia));

        roster.by_id_mut(PlayerId::new(3)).unwrap().alive = false;
        assert!(!roster.has_alive(Role::Mafia));
        assert!(roster.has_alive(Role::Police));
    }

    #[test]
    fn test_pool() {
        let roster = sample();
        let pool = roster.pool(|p| p.role != Role::Civilian);
        assert_eq!(pool.as_slice(), &[PlayerId::new(2), PlayerId::new(3), PlayerId::new(4)]);
    }

    #[test]
    fn test_civilians() {
        let roster = Roster::civilians(6);
        assert_eq!(roster.len(), 6);
        assert!(roster.iter().all(|p| p.role == Role::Civilian && p.alive));
    }

    #[test]
    fn test_roster_serialization() {
        let roster = sample();
        let json = serde_json::to_string(&roster).unwrap();
        let deserialized: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, deserialized);
    }
}
