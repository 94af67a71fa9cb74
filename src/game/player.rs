use super::action::ActionType;
use super::alignment::Alignment;
use super::role::{DeathEffect, Role};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A game player.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Player {
    pub name: String,
    pub role: Role,
    pub alive: bool,
    pub can_vote: bool,
    /// Whether the player's role has been shown to everyone.
    pub revealed: bool,
    pub properties: Properties,
}

/// State tags attached to a player by their role or by night actions.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug, Default)]
pub struct Properties {
    /// How many more times the player may act; `None` means unlimited.
    pub remaining_actions: Option<u32>,
    /// The player's lover. Bonds are stored on both lovers.
    pub in_love_with: Option<usize>,
    /// Protection received during the current night.
    pub protection: Option<ProtectionGrant>,
}

/// Records that a player is shielded from one kind of action up to some priority.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct ProtectionGrant {
    pub blocks: ActionType,
    pub priority: u32,
}

/// Why a player died.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum DeathCause {
    /// Dies quietly, without triggering any death effects.
    Natural,
    Lynched,
    WerewolfAttack,
    LoverDied,
}

/// A player that died, and why.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct Death {
    pub player: usize,
    pub cause: DeathCause,
}

impl Player {
    pub fn new(name: String, role: Role) -> Self {
        let properties = match role {
            Role::Unassigned => Properties::default(),
            role => role.default_properties(),
        };
        Self {
            name,
            role,
            alive: true,
            can_vote: true,
            revealed: false,
            properties,
        }
    }

    pub fn alignment(&self) -> Alignment {
        self.role.alignment()
    }

    /// Spends one of the player's limited actions, if their actions are limited.
    pub fn spend_action(&mut self) {
        if let Some(count) = &mut self.properties.remaining_actions {
            *count = count.saturating_sub(1);
        }
    }
}

/// All players in a game, addressed by their seat index.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Seats the given players, rejecting duplicate names and undealt roles.
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        for (idx, player) in players.iter().enumerate() {
            if player.role == Role::Unassigned {
                return Err(GameError::UnassignedRole(player.name.clone()));
            }
            if players[..idx].iter().any(|p| p.name == player.name) {
                return Err(GameError::DuplicatePlayer(player.name.clone()));
            }
        }
        Ok(Self { players })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Iterates over the living players along with their indices.
    pub fn alive(&self) -> impl Iterator<Item = (usize, &Player)> {
        self.players.iter().enumerate().filter(|(_, p)| p.alive)
    }

    /// Finds the player with the given name.
    pub fn find(&self, name: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| GameError::PlayerNotFound(name.to_string()))
    }

    /// Bonds two players as lovers.
    pub fn bond(&mut self, first: usize, second: usize) {
        self.players[first].properties.in_love_with = Some(second);
        self.players[second].properties.in_love_with = Some(first);
    }

    /// Kills a player, following any cascades, and returns every death that resulted.
    ///
    /// Killing a player that is already dead does nothing.
    pub fn dies(&mut self, player: usize, cause: DeathCause) -> Vec<Death> {
        let mut deaths = vec![];
        self.dies_into(player, cause, &mut deaths);
        deaths
    }

    fn dies_into(&mut self, player: usize, cause: DeathCause, deaths: &mut Vec<Death>) {
        let victim = &mut self.players[player];
        if !victim.alive {
            return;
        }
        // Marked dead before cascading, so a pair of lovers can't loop
        victim.alive = false;
        deaths.push(Death { player, cause });
        log::info!("{} ({}) died: {:?}", victim.name, victim.role, cause);

        if cause == DeathCause::Natural {
            return;
        }

        match victim.role.on_death(cause) {
            Some(DeathEffect::RevealRole) => victim.revealed = true,
            None => {}
        }

        let lover = victim.properties.in_love_with;
        if let Some(lover) = lover {
            self.dies_into(lover, DeathCause::LoverDied, deaths);
        }
    }
}

impl Index<usize> for Roster {
    type Output = Player;

    fn index(&self, index: usize) -> &Player {
        &self.players[index]
    }
}

impl IndexMut<usize> for Roster {
    fn index_mut(&mut self, index: usize) -> &mut Player {
        &mut self.players[index]
    }
}
