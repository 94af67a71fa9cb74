use super::player::Roster;
use super::role::Role;
use super::selector::{Candidate, Purpose, SelectionRequest};
use super::Game;

/// Narrows down which players may be chosen, starting from everyone alive.
pub struct EligiblePlayersBuilder<'a> {
    roster: &'a Roster,
    eligible: Vec<bool>,
}

impl Game {
    pub fn eligible_players(&self) -> EligiblePlayersBuilder<'_> {
        EligiblePlayersBuilder::new(&self.players)
    }
}

impl<'a> EligiblePlayersBuilder<'a> {
    pub fn new(roster: &'a Roster) -> Self {
        Self {
            roster,
            eligible: roster.iter().map(|p| p.alive).collect(),
        }
    }

    pub fn not_role(mut self, role: Role) -> Self {
        for (idx, player) in self.roster.iter().enumerate() {
            self.eligible[idx] &= player.role != role;
        }
        self
    }

    pub fn can_vote(mut self) -> Self {
        for (idx, player) in self.roster.iter().enumerate() {
            self.eligible[idx] &= player.can_vote;
        }
        self
    }

    /// The indices of the eligible players.
    pub fn indices(&self) -> Vec<usize> {
        (0..self.eligible.len()).filter(|i| self.eligible[*i]).collect()
    }

    pub fn make(self, purpose: Purpose) -> SelectionRequest {
        let candidates = self
            .indices()
            .into_iter()
            .map(|index| Candidate {
                index,
                name: self.roster[index].name.clone(),
            })
            .collect();
        SelectionRequest { purpose, candidates }
    }
}
