use serde::{Deserialize, Serialize};

/// How the day's lynch victim is decided.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug, Default)]
pub enum VotingRule {
    /// The moderator names the victim directly.
    #[default]
    Moderator,
    /// Every living player with a vote names a victim; the mayor's vote counts twice.
    Ballot,
}

/// Tracks the lynch vote of each player.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Votes {
    mayor: Option<usize>,
    votes: Vec<Option<usize>>,
}

impl Votes {
    /// Creates a new `Votes` for a game with `num_players` seats.
    pub fn new(num_players: usize, mayor: Option<usize>) -> Self {
        Self {
            mayor,
            votes: vec![None; num_players],
        }
    }

    /// Returns whether the given player has cast their vote.
    pub fn has_cast(&self, player_idx: usize) -> bool {
        self.votes[player_idx].is_some()
    }

    /// Records the vote of a player against another player.
    pub fn vote(&mut self, player_idx: usize, target: usize) {
        self.votes[player_idx] = Some(target);
    }

    /// The weighted number of votes cast against the given player.
    pub fn tally(&self, target: usize) -> usize {
        self.votes
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == Some(target))
            .map(|(voter, _)| if Some(voter) == self.mayor { 2 } else { 1 })
            .sum()
    }

    /// The player with strictly the most votes, or `None` on a tie or if nobody voted.
    pub fn outcome(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        let mut tied = false;
        for target in 0..self.votes.len() {
            let count = self.tally(target);
            if count == 0 {
                continue;
            }
            match best {
                Some((_, top)) if count == top => tied = true,
                Some((_, top)) if count < top => {}
                _ => {
                    best = Some((target, count));
                    tied = false;
                }
            }
        }
        best.filter(|_| !tied).map(|(target, _)| target)
    }
}
