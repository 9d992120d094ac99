//! Night actions: Heal (Doctor), Attack (Mafia), Investigate (Police).
//!
//! Each action draws its target uniformly from an eligible pool through the
//! injected [`RandomSource`]. An empty pool is not an error; the action
//! simply has no target and reports `None`.
//!
//! Actions observe the roster as it is when they run. Heal picks among the
//! players who are *already* dead, so a Heal run after an Attack in the
//! same round may revive the Attack's victim, while a Heal run first cannot.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PlayerId, RandomSource, Role, Roster};

/// Revive one dead player chosen at random.
///
/// Returns the revived player, or `None` when nobody is dead.
pub fn heal(roster: &mut Roster, rng: &mut impl RandomSource) -> Option<PlayerId> {
    let dead = roster.pool(|p| !p.alive);
    let saved = rng.pick(&dead)?;

    if let Some(player) = roster.by_id_mut(saved) {
        player.alive = true;
    }
    debug!(player = %saved, pool = dead.len(), "doctor revived player");
    Some(saved)
}

/// Kill one living non-Mafia player chosen at random.
///
/// Returns the victim, or `None` when no eligible target is left.
pub fn attack(roster: &mut Roster, rng: &mut impl RandomSource) -> Option<PlayerId> {
    let targets = roster.pool(|p| p.alive && p.role != Role::Mafia);
    let killed = rng.pick(&targets)?;

    if let Some(player) = roster.by_id_mut(killed) {
        player.alive = false;
    }
    debug!(player = %killed, pool = targets.len(), "mafia killed player");
    Some(killed)
}

/// Reveal one living Mafia player chosen at random.
///
/// Only living Mafia qualify, so Police never report themselves or the
/// dead. Read-only.
pub fn investigate(roster: &Roster, rng: &mut impl RandomSource) -> Option<PlayerId> {
    let suspects = roster.pool(|p| p.is_alive_with(Role::Mafia));
    let found = rng.pick(&suspects);

    debug!(found = ?found, pool = suspects.len(), "police investigated");
    found
}

/// A night action, keyed by the role that performs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleAction {
    Heal,
    Attack,
    Investigate,
}

impl RoleAction {
    /// Reference order of a night: Heal, Attack, Investigate.
    pub const NIGHT_ORDER: [RoleAction; 3] =
        [RoleAction::Heal, RoleAction::Attack, RoleAction::Investigate];

    /// Role that owns this action.
    #[must_use]
    pub const fn actor(self) -> Role {
        match self {
            RoleAction::Heal => Role::Doctor,
            RoleAction::Attack => Role::Mafia,
            RoleAction::Investigate => Role::Police,
        }
    }

    /// The action a role performs at night, if any.
    #[must_use]
    pub const fn for_role(role: Role) -> Option<RoleAction> {
        match role {
            Role::Doctor => Some(RoleAction::Heal),
            Role::Mafia => Some(RoleAction::Attack),
            Role::Police => Some(RoleAction::Investigate),
            Role::Civilian => None,
        }
    }

    /// Whether running this action can change the roster.
    #[must_use]
    pub const fn mutates(self) -> bool {
        !matches!(self, RoleAction::Investigate)
    }

    /// Operation name, as used in logs and errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RoleAction::Heal => "heal",
            RoleAction::Attack => "attack",
            RoleAction::Investigate => "investigate",
        }
    }

    /// Run the action against `roster`.
    pub fn apply(self, roster: &mut Roster, rng: &mut impl RandomSource) -> ActionOutcome {
        match self {
            RoleAction::Heal => ActionOutcome::Saved(heal(roster, rng)),
            RoleAction::Attack => ActionOutcome::Killed(attack(roster, rng)),
            RoleAction::Investigate => ActionOutcome::FoundMafia(investigate(roster, rng)),
        }
    }
}

impl std::fmt::Display for RoleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one night action. Each variant carries only its own target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Saved(Option<PlayerId>),
    Killed(Option<PlayerId>),
    FoundMafia(Option<PlayerId>),
}

impl ActionOutcome {
    /// The action that produced this outcome.
    #[must_use]
    pub const fn action(&self) -> RoleAction {
        match self {
            ActionOutcome::Saved(_) => RoleAction::Heal,
            ActionOutcome::Killed(_) => RoleAction::Attack,
            ActionOutcome::FoundMafia(_) => RoleAction::Investigate,
        }
    }

    /// The affected player, if the action found one.
    #[must_use]
    pub const fn target(&self) -> Option<PlayerId> {
        match *self {
            ActionOutcome::Saved(p) | ActionOutcome::Killed(p) | ActionOutcome::FoundMafia(p) => p,
        }
    }
}

/// This round's night results.
///
/// Each slot holds the latest outcome of its action; invoking an action
/// again overwrites it. Cleared when the next round starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightOutcomes {
    pub saved: Option<PlayerId>,
    pub killed: Option<PlayerId>,
    pub found_mafia: Option<PlayerId>,
}

impl NightOutcomes {
    /// Store `outcome` in its slot.
    pub fn record(&mut self, outcome: ActionOutcome) {
        match outcome {
            ActionOutcome::Saved(p) => self.saved = p,
            ActionOutcome::Killed(p) => self.killed = p,
            ActionOutcome::FoundMafia(p) => self.found_mafia = p,
        }
    }

    /// Forget every outcome.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
