//! Roles and the sides they play for.

use serde::{Deserialize, Serialize};

/// Role dealt to a seat at game start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// No night action.
    #[default]
    Civilian,
    /// Kills at night.
    Mafia,
    /// Revives a dead player at night.
    Doctor,
    /// Looks for Mafia at night.
    Police,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 4] = [Role::Civilian, Role::Mafia, Role::Doctor, Role::Police];

    /// Which side this role plays for.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Role::Mafia => Side::Mafia,
            Role::Civilian | Role::Doctor | Role::Police => Side::Civilians,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Civilian => "civilian",
            Role::Mafia => "mafia",
            Role::Doctor => "doctor",
            Role::Police => "police",
        };
        f.write_str(name)
    }
}

/// The two teams a game can end in favour of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Civilians,
    Mafia,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Civilians => f.write_str("civilians"),
            Side::Mafia => f.write_str("mafia"),
        }
    }
}
