use super::player::{DeathCause, ProtectionGrant, Roster};
use super::role::Role;
use serde::{Deserialize, Serialize};

/// How an action takes part in night resolution.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum ActionType {
    /// Kills its targets unless they are protected strongly enough.
    Attack,
    /// Shields its targets from attacks of lower priority.
    Protection,
    /// Never kills and is never blocked.
    Visit,
}

/// Something a player does during the night.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum Action {
    /// The werewolves attack their prey; normally a single target.
    Attack { performer: usize, targets: Vec<usize> },
    /// A player watches over others, at the priority of the performer's role.
    Protect {
        performer: usize,
        targets: Vec<usize>,
        priority: u32,
    },
    /// Cupid makes the two targets fall in love with each other.
    Couple { performer: usize, targets: Vec<usize> },
}

impl Action {
    /// Builds the night action for a role from the chosen targets.
    /// Returns `None` for roles that have no night action.
    pub fn for_role(role: Role, performer: usize, targets: Vec<usize>) -> Option<Self> {
        match role {
            Role::Werewolf => Some(Action::Attack { performer, targets }),
            Role::Cupid => Some(Action::Couple { performer, targets }),
            Role::Guardian => Some(Action::Protect {
                performer,
                targets,
                priority: role.action_priority()?,
            }),
            Role::Civilian | Role::Unassigned => None,
        }
    }

    pub fn kind(&self) -> ActionType {
        match self {
            Action::Attack { .. } => ActionType::Attack,
            Action::Protect { .. } => ActionType::Protection,
            Action::Couple { .. } => ActionType::Visit,
        }
    }

    pub fn priority(&self) -> u32 {
        match self {
            Action::Attack { .. } => 1,
            Action::Protect { priority, .. } => *priority,
            Action::Couple { .. } => 2,
        }
    }

    pub fn performer(&self) -> usize {
        match self {
            Action::Attack { performer, .. }
            | Action::Protect { performer, .. }
            | Action::Couple { performer, .. } => *performer,
        }
    }

    pub fn targets(&self) -> &[usize] {
        match self {
            Action::Attack { targets, .. }
            | Action::Protect { targets, .. }
            | Action::Couple { targets, .. } => targets,
        }
    }

    /// Rebuilds this action with a different performer and targets, keeping its kind.
    pub fn transform(&self, performer: usize, targets: Vec<usize>) -> Self {
        match self {
            Action::Attack { .. } => Action::Attack { performer, targets },
            Action::Protect { priority, .. } => Action::Protect {
                performer,
                targets,
                priority: *priority,
            },
            Action::Couple { .. } => Action::Couple { performer, targets },
        }
    }

    /// The cause of death for players killed by this action.
    ///
    /// # Panics
    ///
    /// Panics if the action is not an attack.
    pub fn death_cause(&self) -> DeathCause {
        match self {
            Action::Attack { .. } => DeathCause::WerewolfAttack,
            other => panic!("{:?} action cannot kill", other.kind()),
        }
    }

    /// Carries out the non-lethal effects of a protection or visit.
    pub(super) fn execute(&self, roster: &mut Roster) {
        match self {
            Action::Attack { .. } => {}
            Action::Protect { targets, priority, .. } => {
                for target in targets {
                    let grant = &mut roster[*target].properties.protection;
                    if grant.map_or(true, |g| g.priority < *priority) {
                        *grant = Some(ProtectionGrant {
                            blocks: ActionType::Attack,
                            priority: *priority,
                        });
                    }
                }
            }
            Action::Couple { targets, .. } => match targets[..] {
                [first, second] if first != second => roster.bond(first, second),
                _ => log::warn!("cupid needs two different lovers, got {:?}", targets),
            },
        }
    }
}
