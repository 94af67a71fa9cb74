//! Resolution of the actions taken during one night.
//!
//! Resolving happens in two steps. [resolve] is pure: it sorts the night's
//! actions, strips protected players from the attacks and decides who dies of
//! what. [Resolution::apply] then carries the outcome out on the roster.

use super::action::{Action, ActionType};
use super::player::{Death, Roster};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The outcome of resolving a night's actions, before it has been applied.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct Resolution {
    /// Attacks with their protected targets removed. Fully blocked attacks remain with no targets.
    pub attacks: Vec<Action>,
    /// How many targets each attack had before protected players were removed.
    pub submitted: Vec<usize>,
    pub protections: Vec<Action>,
    pub visits: Vec<Action>,
    /// Players the attacks will kill, in the order they were first attacked.
    pub doomed: Vec<Death>,
}

/// Works out the consequences of a night's actions.
pub fn resolve(actions: Vec<Action>) -> Resolution {
    let mut resolution = Resolution::default();
    let mut attacks = vec![];
    for action in actions {
        match action.kind() {
            ActionType::Attack => attacks.push(action),
            ActionType::Protection => resolution.protections.push(action),
            ActionType::Visit => resolution.visits.push(action),
        }
    }

    // Strongest protection offered to each player
    let mut shields = BTreeMap::<usize, u32>::new();
    for protection in &resolution.protections {
        for target in protection.targets() {
            let shield = shields.entry(*target).or_insert(0);
            *shield = (*shield).max(protection.priority());
        }
    }

    resolution.submitted = attacks.iter().map(|attack| attack.targets().len()).collect();
    resolution.attacks = attacks
        .iter()
        .map(|attack| {
            let targets = attack
                .targets()
                .iter()
                .copied()
                .filter(|target| shields.get(target).map_or(true, |shield| *shield <= attack.priority()))
                .collect();
            attack.transform(attack.performer(), targets)
        })
        .collect();

    // A player attacked more than once is killed by the strongest attack, or the earliest on a tie
    let mut doomed: Vec<(Death, u32)> = vec![];
    for attack in &resolution.attacks {
        let cause = attack.death_cause();
        for target in attack.targets() {
            match doomed.iter_mut().find(|(death, _)| death.player == *target) {
                Some((death, priority)) if attack.priority() > *priority => {
                    death.cause = cause;
                    *priority = attack.priority();
                }
                Some(_) => {}
                None => doomed.push((Death { player: *target, cause }, attack.priority())),
            }
        }
    }
    resolution.doomed = doomed.into_iter().map(|(death, _)| death).collect();

    log::debug!(
        "resolved {} attacks, {} protections, {} visits; doomed: {:?}",
        resolution.attacks.len(),
        resolution.protections.len(),
        resolution.visits.len(),
        resolution.doomed
    );
    resolution
}

impl Resolution {
    /// Applies the resolution to the roster and returns every death, including cascades.
    ///
    /// Protections and visits take effect before anyone dies, so lovers bonded
    /// tonight already die together tonight.
    pub fn apply(&self, roster: &mut Roster) -> Vec<Death> {
        for action in self.protections.iter().chain(&self.visits) {
            action.execute(roster);
        }
        for action in self.attacks.iter().chain(&self.protections).chain(&self.visits) {
            roster[action.performer()].spend_action();
        }

        let mut deaths = vec![];
        for Death { player, cause } in &self.doomed {
            deaths.extend(roster.dies(*player, *cause));
        }
        deaths
    }

    /// Whether anyone is killed directly by an attack, as opposed to a cascade.
    pub fn is_peaceful(&self) -> bool {
        self.doomed.is_empty()
    }

    /// The attacks that had targets, but lost every one of them to protection.
    pub fn blocked_attacks(&self) -> impl Iterator<Item = &Action> {
        self.attacks
            .iter()
            .zip(&self.submitted)
            .filter(|(attack, submitted)| attack.targets().is_empty() && **submitted > 0)
            .map(|(attack, _)| attack)
    }
}
