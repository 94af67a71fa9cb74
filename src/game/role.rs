use super::alignment::Alignment;
use super::clock::Daypart;
use super::player::{DeathCause, Properties};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The secret role dealt to a player.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug, Default)]
pub enum Role {
    /// Placeholder held by a player before roles are dealt. Must never be queried.
    #[default]
    Unassigned,
    Civilian,
    Werewolf,
    Cupid,
    Guardian,
}

/// Something that happens as a consequence of a role's holder dying.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum DeathEffect {
    /// The dead player's role is shown to everyone.
    RevealRole,
}

impl Role {
    pub fn alignment(self) -> Alignment {
        match self {
            Role::Civilian | Role::Cupid | Role::Guardian => Alignment::Good,
            Role::Werewolf => Alignment::Evil,
            Role::Unassigned => unassigned(),
        }
    }

    /// The priority of this role's night action, if it has one.
    pub fn action_priority(self) -> Option<u32> {
        match self {
            Role::Civilian => None,
            Role::Werewolf => Some(1),
            Role::Cupid | Role::Guardian => Some(2),
            Role::Unassigned => unassigned(),
        }
    }

    /// Whether the holder of this role, with the given properties, may act right now.
    pub fn can_act(self, daypart: Daypart, _date: u32, properties: &Properties) -> bool {
        let night = daypart == Daypart::Night;
        let has_actions = properties.remaining_actions != Some(0);
        match self {
            Role::Civilian => false,
            Role::Werewolf | Role::Cupid | Role::Guardian => night && has_actions,
            Role::Unassigned => unassigned(),
        }
    }

    /// The effect triggered when the holder of this role dies.
    pub fn on_death(self, cause: DeathCause) -> Option<DeathEffect> {
        if cause == DeathCause::Natural {
            return None;
        }
        match self {
            Role::Civilian | Role::Werewolf | Role::Cupid | Role::Guardian => Some(DeathEffect::RevealRole),
            Role::Unassigned => unassigned(),
        }
    }

    /// The properties granted to a player when this role is dealt to them.
    pub fn default_properties(self) -> Properties {
        match self {
            Role::Cupid => Properties {
                remaining_actions: Some(1),
                ..Properties::default()
            },
            Role::Civilian | Role::Werewolf | Role::Guardian => Properties::default(),
            Role::Unassigned => unassigned(),
        }
    }
}

fn unassigned() -> ! {
    panic!("the unassigned role was queried after the game started")
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Unassigned => "Onbekend",
            Role::Civilian => "Burger",
            Role::Werewolf => "Weerwolf",
            Role::Cupid => "Cupido",
            Role::Guardian => "Beschermer",
        })
    }
}
