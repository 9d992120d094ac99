//! Round controller.
//!
//! [`Game`] owns the roster, the random source and the event log, and
//! gates every operation on the current [`Phase`]:
//!
//! ```text
//! AwaitingStart ──start_game──▶ InRound ──resolve_votes_and_eliminate──▶ RoundResolved
//!                                  ▲                                          │
//!                                  └──────────── advance_round ───────────────┤
//!                                                                             ▼
//!                                                                         GameOver
//! ```
//!
//! Heal and Attack also re-check the win condition, so a kill that ends
//! the game moves straight to `GameOver`. An operation called in the wrong
//! phase fails with [`GameError::IllegalStateTransition`] and changes
//! nothing.
//!
//! ## Example
//!
//! ```
//! use mafia_engine::{Game, GameConfig, Phase};
//!
//! let mut game = Game::with_seed(GameConfig::default(), 7);
//! game.start_game(6).unwrap();
//!
//! let killed = game.attack().unwrap();
//! assert!(killed.is_some());
//!
//! game.resolve_votes_and_eliminate().unwrap();
//! let phase = game.advance_round().unwrap();
//! assert!(matches!(phase, Phase::InRound { round: 2 } | Phase::GameOver { .. }));
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::actions::{self, ActionOutcome, Elimination, NightOutcomes, RoleAction};
use crate::core::{GameConfig, GameEvent, GameRng, PlayerId, RandomSource, Role, Roster, Side};
use crate::rules;
use crate::GameError;

/// Controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No roster yet.
    AwaitingStart,
    /// Night actions and votes are open.
    InRound { round: u32 },
    /// Votes were counted; waiting for `advance_round`.
    RoundResolved {
        round: u32,
        eliminated: Option<PlayerId>,
    },
    /// Terminal.
    GameOver { winner: Side },
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingStart => f.write_str("awaiting start"),
            Phase::InRound { round } => write!(f, "round {round}"),
            Phase::RoundResolved { round, .. } => write!(f, "round {round} resolved"),
            Phase::GameOver { winner } => write!(f, "game over ({winner} won)"),
        }
    }
}

/// What happened during one autoplayed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub night: NightOutcomes,
    pub eliminated: Option<PlayerId>,
    /// Set when the round ended the game.
    pub winner: Option<Side>,
}

/// One game of Mafia.
///
/// Generic over the random source so tests can script every choice.
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    config: GameConfig,
    rng: R,
    phase: Phase,
    roster: Option<Roster>,
    night: NightOutcomes,
    events: Vector<GameEvent>,
    /// Latest round opened, for the event log.
    last_round: u32,
}

impl Game<GameRng> {
    /// Create a game driven by a seeded [`GameRng`].
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game awaiting its first `start_game`.
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            phase: Phase::AwaitingStart,
            roster: None,
            night: NightOutcomes::default(),
            events: Vector::new(),
            last_round: 0,
        }
    }

    // === Queries ===

    /// Current controller state.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round number, if a round is open or just resolved.
    #[must_use]
    pub fn round(&self) -> Option<u32> {
        match self.phase {
            Phase::InRound { round } | Phase::RoundResolved { round, .. } => Some(round),
            Phase::AwaitingStart | Phase::GameOver { .. } => None,
        }
    }

    /// The roster, once dealt.
    #[must_use]
    pub fn roster(&self) -> Option<&Roster> {
        self.roster.as_ref()
    }

    /// The configuration this game deals from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// This round's night outcomes.
    #[must_use]
    pub fn night_outcomes(&self) -> &NightOutcomes {
        &self.night
    }

    /// Everything that happened since the last `start_game`.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    /// The random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Evaluate the win condition. Pure; `None` before the roster exists.
    #[must_use]
    pub fn check_winner(&self) -> Option<Side> {
        self.roster.as_ref().and_then(rules::check_winner)
    }

    // === Lifecycle ===

    /// Deal a new roster of `player_count` seats and open round 1.
    ///
    /// Valid before the first game and after a game is over; the previous
    /// roster and event log are discarded. A deal that already satisfies
    /// the win condition ends the game at once.
    pub fn start_game(&mut self, player_count: usize) -> Result<&Roster, GameError> {
        if !matches!(self.phase, Phase::AwaitingStart | Phase::GameOver { .. }) {
            return Err(self.illegal("start_game"));
        }

        let roster = self.config.deal(player_count, &mut self.rng)?;
        let winner = rules::check_winner(&roster);
        let mafia_seat = roster
            .alive_with_role(Role::Mafia)
            .map(|p| p.id())
            .next();

        info!(player_count, mafia_seat = ?mafia_seat, "game started");

        self.events = Vector::new();
        self.events.push_back(GameEvent::GameStarted {
            player_count,
            mafia_seat,
        });
        self.events.push_back(GameEvent::RoundStarted { round: 1 });
        self.night.clear();
        self.phase = Phase::InRound { round: 1 };
        self.last_round = 1;
        if let Some(winner) = winner {
            self.finish(winner);
        }

        Ok(&*self.roster.insert(roster))
    }

    // === Night ===

    /// Doctor: revive a random dead player.
    pub fn heal(&mut self) -> Result<Option<PlayerId>, GameError> {
        Ok(self.perform(RoleAction::Heal)?.target())
    }

    /// Mafia: kill a random living non-Mafia player.
    pub fn attack(&mut self) -> Result<Option<PlayerId>, GameError> {
        Ok(self.perform(RoleAction::Attack)?.target())
    }

    /// Police: reveal a random living Mafia player.
    pub fn investigate(&mut self) -> Result<Option<PlayerId>, GameError> {
        Ok(self.perform(RoleAction::Investigate)?.target())
    }

    /// Run a night action by tag.
    ///
    /// The outcome overwrites this round's slot for the action. After a
    /// mutating action the win condition is re-checked.
    pub fn perform(&mut self, action: RoleAction) -> Result<ActionOutcome, GameError> {
        let round = self.open_round(action.name())?;
        let roster = self
            .roster
            .as_mut()
            .ok_or_else(|| missing_roster(action.name()))?;

        let outcome = action.apply(roster, &mut self.rng);
        self.night.record(outcome);
        self.events.push_back(match outcome {
            ActionOutcome::Saved(Some(player)) => GameEvent::Saved { round, player },
            ActionOutcome::Saved(None) => GameEvent::NothingToSave { round },
            ActionOutcome::Killed(Some(player)) => GameEvent::Killed { round, player },
            ActionOutcome::Killed(None) => GameEvent::NoKill { round },
            ActionOutcome::FoundMafia(found_mafia) => {
                GameEvent::Investigated { round, found_mafia }
            }
        });

        if action.mutates() {
            if let Some(winner) = self.check_winner() {
                self.finish(winner);
            }
        }

        Ok(outcome)
    }

    // === Day ===

    /// Record `voter`'s vote against `target`.
    ///
    /// Rejected votes are not recorded.
    pub fn cast_vote(&mut self, voter: PlayerId, target: PlayerId) -> Result<(), GameError> {
        let round = self.open_round("cast_vote")?;
        let roster = self.roster.as_mut().ok_or_else(|| missing_roster("cast_vote"))?;

        actions::cast_vote(roster, voter, target).map_err(|reason| {
            debug!(voter = %voter, target = %target, %reason, "vote rejected");
            GameError::InvalidVoteTarget {
                voter,
                target,
                reason,
            }
        })?;

        self.events.push_back(GameEvent::VoteCast {
            round,
            voter,
            target,
        });
        Ok(())
    }

    /// Vote for a random eligible target on `voter`'s behalf.
    ///
    /// Returns the chosen target, or `None` if nobody else is alive.
    pub fn cast_random_vote(&mut self, voter: PlayerId) -> Result<Option<PlayerId>, GameError> {
        self.open_round("cast_random_vote")?;
        let roster = self.roster.as_ref().ok_or_else(|| missing_roster("cast_random_vote"))?;

        let Some(target) = actions::random_target(roster, voter, &mut self.rng) else {
            return Ok(None);
        };
        self.cast_vote(voter, target)?;
        Ok(Some(target))
    }

    /// Every living player votes for a random target, in seat order.
    ///
    /// Returns the number of votes recorded.
    pub fn cast_random_votes(&mut self) -> Result<usize, GameError> {
        self.open_round("cast_random_votes")?;
        let voters: Vec<PlayerId> = self
            .roster
            .as_ref()
            .map(|r| r.all_alive().map(|p| p.id()).collect())
            .unwrap_or_default();

        let mut recorded = 0;
        for voter in voters {
            if self.cast_random_vote(voter)?.is_some() {
                recorded += 1;
            }
        }
        Ok(recorded)
    }

    /// Count the votes and eliminate the first strict maximum.
    ///
    /// Moves the game to `RoundResolved`.
    pub fn resolve_votes_and_eliminate(&mut self) -> Result<Option<PlayerId>, GameError> {
        let round = self.open_round("resolve_votes_and_eliminate")?;
        let roster = self
            .roster
            .as_mut()
            .ok_or_else(|| missing_roster("resolve_votes_and_eliminate"))?;

        actions::recount(roster);
        let eliminated = actions::eliminate_top_voted(roster);

        match eliminated {
            Some(Elimination { player, votes }) => {
                info!(round, player = %player, votes, "player eliminated");
                self.events.push_back(GameEvent::Eliminated {
                    round,
                    player,
                    votes,
                });
            }
            None => {
                info!(round, "no elimination");
                self.events.push_back(GameEvent::NoElimination { round });
            }
        }

        let eliminated = eliminated.map(|e| e.player);
        self.phase = Phase::RoundResolved { round, eliminated };
        Ok(eliminated)
    }

    /// Leave `RoundResolved`: end the game or open the next round.
    pub fn advance_round(&mut self) -> Result<Phase, GameError> {
        let Phase::RoundResolved { round, .. } = self.phase else {
            return Err(self.illegal("advance_round"));
        };

        if let Some(winner) = self.check_winner() {
            self.finish(winner);
            return Ok(self.phase);
        }

        let next = round + 1;
        if let Some(roster) = self.roster.as_mut() {
            actions::clear_votes(roster);
        }
        self.night.clear();
        self.phase = Phase::InRound { round: next };
        self.last_round = next;
        self.events.push_back(GameEvent::RoundStarted { round: next });
        info!(round = next, "round started");

        Ok(self.phase)
    }

    // === Autoplay ===

    /// Play one reference round: Heal, Attack, Investigate, everyone votes
    /// at random, resolve, advance.
    ///
    /// Stops early if a night action ends the game.
    pub fn play_round(&mut self) -> Result<RoundSummary, GameError> {
        let round = self.open_round("play_round")?;

        for action in RoleAction::NIGHT_ORDER {
            self.perform(action)?;
            if let Phase::GameOver { winner } = self.phase {
                return Ok(self.summary(round, None, Some(winner)));
            }
        }

        self.cast_random_votes()?;
        let eliminated = self.resolve_votes_and_eliminate()?;
        let night = self.night;
        let winner = match self.advance_round()? {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        };

        Ok(RoundSummary {
            round,
            night,
            eliminated,
            winner,
        })
    }

    /// Autoplay rounds until the game ends or `max_rounds` have been played.
    ///
    /// Returns the winner, or `None` if the cap was reached first.
    pub fn play_to_completion(&mut self) -> Result<Option<Side>, GameError> {
        for _ in 0..self.config.max_rounds {
            if let Some(winner) = self.play_round()?.winner {
                return Ok(Some(winner));
            }
        }
        Ok(None)
    }

    // === Internals ===

    fn open_round(&self, operation: &'static str) -> Result<u32, GameError> {
        match self.phase {
            Phase::InRound { round } => Ok(round),
            _ => Err(self.illegal(operation)),
        }
    }

    fn illegal(&self, operation: &'static str) -> GameError {
        debug!(operation, phase = %self.phase, "operation rejected");
        GameError::IllegalStateTransition {
            operation,
            phase: self.phase,
        }
    }

    fn finish(&mut self, winner: Side) {
        info!(round = self.last_round, %winner, "game over");
        self.phase = Phase::GameOver { winner };
        self.events.push_back(GameEvent::GameOver {
            round: self.last_round,
            winner,
        });
    }

    fn summary(
        &self,
        round: u32,
        eliminated: Option<PlayerId>,
        winner: Option<Side>,
    ) -> RoundSummary {
        RoundSummary {
            round,
            night: self.night,
            eliminated,
            winner,
        }
    }
}

fn missing_roster(operation: &'static str) -> GameError {
    GameError::IllegalStateTransition {
        operation,
        phase: Phase::AwaitingStart,
    }
}
