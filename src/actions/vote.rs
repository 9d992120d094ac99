//! Day vote: casting, tallying and elimination.
//!
//! ## Elimination rule
//!
//! Living players are scanned in seat order against a running maximum that
//! starts at zero. A player replaces the current candidate only with a
//! count *strictly* greater than the maximum so far, so on a tie the
//! earliest seat wins and with no votes nobody is eliminated.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Player, PlayerId, RandomSource, Roster};
use crate::VoteRejection;

/// A player removed by the vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elimination {
    pub player: PlayerId,
    /// Votes the player held when removed.
    pub votes: u32,
}

/// Record `voter`'s vote against `target`.
///
/// A voter who already voted this round moves their vote: the previous
/// target loses one vote. Returns the previous target, if any.
pub fn cast_vote(
    roster: &mut Roster,
    voter: PlayerId,
    target: PlayerId,
) -> Result<Option<PlayerId>, VoteRejection> {
    let voter_alive = roster.by_id(voter).ok_or(VoteRejection::UnknownVoter)?.alive;
    let target_alive = roster.by_id(target).ok_or(VoteRejection::UnknownTarget)?.alive;

    if voter == target {
        return Err(VoteRejection::SelfVote);
    }
    if !voter_alive {
        return Err(VoteRejection::VoterDead);
    }
    if !target_alive {
        return Err(VoteRejection::TargetDead);
    }

    let previous = roster
        .by_id_mut(voter)
        .and_then(|p| p.vote.replace(target));
    if let Some(player) = previous.and_then(|prev| roster.by_id_mut(prev)) {
        player.withdraw_vote();
    }
    if let Some(player) = roster.by_id_mut(target) {
        player.receive_vote();
    }

    debug!(voter = %voter, target = %target, previous = ?previous, "vote cast");
    Ok(previous)
}

/// Pick a random living target other than `voter`.
pub fn random_target(
    roster: &Roster,
    voter: PlayerId,
    rng: &mut impl RandomSource,
) -> Option<PlayerId> {
    let targets = roster.pool(|p| p.alive && p.id() != voter);
    rng.pick(&targets)
}

/// Count the recorded votes per target.
#[must_use]
pub fn tally_votes(roster: &Roster) -> FxHashMap<PlayerId, u32> {
    let mut tally = FxHashMap::default();
    for target in roster.iter().filter_map(|p| p.vote) {
        *tally.entry(target).or_insert(0) += 1;
    }
    tally
}

/// Reset every `vote_count` to the number of votes actually recorded.
pub fn recount(roster: &mut Roster) {
    let tally = tally_votes(roster);
    for player in roster.iter_mut() {
        player.vote_count = tally.get(&player.id()).copied().unwrap_or(0);
    }
}

/// The living player with the first strict maximum of votes, if any.
#[must_use]
pub fn top_voted(roster: &Roster) -> Option<&Player> {
    let mut max_votes = 0;
    let mut candidate = None;

    for player in roster.all_alive() {
        if player.vote_count > max_votes {
            max_votes = player.vote_count;
            candidate = Some(player);
        }
    }

    candidate
}

/// Remove the top-voted living player.
///
/// At most one player is eliminated per call. The eliminated player's
/// `vote_count` is reset to zero.
pub fn eliminate_top_voted(roster: &mut Roster) -> Option<Elimination> {
    let (id, votes) = top_voted(roster).map(|p| (p.id(), p.vote_count))?;

    let player = roster.by_id_mut(id)?;
    player.alive = false;
    player.vote_count = 0;

    Some(Elimination { player: id, votes })
}

/// Forget every vote, ready for a new round.
pub fn clear_votes(roster: &mut Roster) {
    for player in roster.iter_mut() {
        player.clear_votes();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Role, ScriptedRng};

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id)
    }

    fn table() -> Roster {
        Roster::new([
            Role::Civilian,
            Role::Civilian,
            Role::Mafia,
            Role::Civilian,
            Role::Civilian,
            Role::Civilian,
        ])
    }

    fn counts(roster: &Roster) -> Vec<u32> {
        roster.iter().map(|p| p.vote_count).collect()
    }

    #[test]
    fn test_cast_vote_records_and_counts() {
        let mut roster = table();

        assert_eq!(cast_vote(&mut roster, p(1), p(3)), Ok(None));
        assert_eq!(cast_vote(&mut roster, p(2), p(3)), Ok(None));

        assert_eq!(roster.by_id(p(1)).unwrap().vote, Some(p(3)));
        assert_eq!(counts(&roster), vec![0, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn test_revote_moves_vote() {
        let mut roster = table();

        cast_vote(&mut roster, p(1), p(3)).unwrap();
        assert_eq!(cast_vote(&mut roster, p(1), p(4)), Ok(Some(p(3))));

        assert_eq!(counts(&roster), vec![0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_cast_vote_rejections() {
        let mut roster = table();
        roster.by_id_mut(p(5)).unwrap().alive = false;

        assert_eq!(cast_vote(&mut roster, p(9), p(1)), Err(VoteRejection::UnknownVoter));
        assert_eq!(cast_vote(&mut roster, p(1), p(0)), Err(VoteRejection::UnknownTarget));
        assert_eq!(cast_vote(&mut roster, p(2), p(2)), Err(VoteRejection::SelfVote));
        assert_eq!(cast_vote(&mut roster, p(5), p(1)), Err(VoteRejection::VoterDead));
        assert_eq!(cast_vote(&mut roster, p(1), p(5)), Err(VoteRejection::TargetDead));

        // Nothing was recorded
        assert!(roster.iter().all(|p| p.vote.is_none() && p.vote_count == 0));
    }

    #[test]
    fn test_random_target_excludes_self_and_dead() {
        let mut roster = table();
        roster.by_id_mut(p(1)).unwrap().alive = false;

        // Pool for voter 2 is [3, 4, 5, 6]
        let target = random_target(&roster, p(2), &mut ScriptedRng::new([0]));
        assert_eq!(target, Some(p(3)));

        let mut duo = Roster::new([Role::Mafia, Role::Civilian]);
        duo.by_id_mut(p(2)).unwrap().alive = false;
        assert_eq!(random_target(&duo, p(1), &mut ScriptedRng::default()), None);
    }

    #[test]
    fn test_tally_and_recount() {
        let mut roster = table();
        cast_vote(&mut roster, p(1), p(3)).unwrap();
        cast_vote(&mut roster, p(2), p(3)).unwrap();
        cast_vote(&mut roster, p(3), p(1)).unwrap();

        let tally = tally_votes(&roster);
        assert_eq!(tally.get(&p(3)), Some(&2));
        assert_eq!(tally.get(&p(1)), Some(&1));
        assert_eq!(tally.get(&p(2)), None);

        roster.by_id_mut(p(6)).unwrap().vote_count = 9;
        recount(&mut roster);
        assert_eq!(counts(&roster), vec![1, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn test_no_votes_no_elimination() {
        let mut roster = table();
        assert_eq!(eliminate_top_voted(&mut roster), None);
        assert_eq!(roster.alive_count(), 6);
    }

    #[test]
    fn test_eliminates_strict_maximum() {
        let mut roster = table();
        cast_vote(&mut roster, p(1), p(4)).unwrap();
        cast_vote(&mut roster, p(2), p(3)).unwrap();
        cast_vote(&mut roster, p(5), p(3)).unwrap();

        let elimination = eliminate_top_voted(&mut roster);

        assert_eq!(elimination, Some(Elimination { player: p(3), votes: 2 }));
        let eliminated = roster.by_id(p(3)).unwrap();
        assert!(!eliminated.alive);
        assert_eq!(eliminated.vote_count, 0);
        assert_eq!(roster.alive_count(), 5);
    }

    #[test]
    fn test_tie_goes_to_earliest_seat() {
        let mut roster = table();
        cast_vote(&mut roster, p(1), p(5)).unwrap();
        cast_vote(&mut roster, p(2), p(4)).unwrap();

        let elimination = eliminate_top_voted(&mut roster).unwrap();
        assert_eq!(elimination.player, p(4));
        assert!(roster.by_id(p(5)).unwrap().alive);
    }

    #[test]
    fn test_dead_players_are_not_candidates() {
        let mut roster = table();
        cast_vote(&mut roster, p(1), p(2)).unwrap();
        cast_vote(&mut roster, p(3), p(2)).unwrap();
        cast_vote(&mut roster, p(4), p(6)).unwrap();
        roster.by_id_mut(p(2)).unwrap().alive = false;

        let elimination = eliminate_top_voted(&mut roster).unwrap();
        assert_eq!(elimination.player, p(6));
    }

    #[test]
    fn test_clear_votes() {
        let mut roster = table();
        cast_vote(&mut roster, p(1), p(2)).unwrap();

        clear_votes(&mut roster);

        assert!(roster.iter().all(|p| p.vote.is_none() && p.vote_count == 0));
    }
}
