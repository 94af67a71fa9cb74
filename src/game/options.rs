use super::collect::Mode;
use super::votes::VotingRule;
use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// The most players a roster can be generated for.
pub const MAX_PLAYERS: usize = 32;

/// Options for customising a game of Weerwolven.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct GameOptions {
    /// How night actions are gathered.
    pub mode: Mode,
    /// How the day's lynch victim is decided.
    pub voting: VotingRule,
    /// One werewolf is dealt for every this many players, rounding down.
    pub players_per_wolf: usize,
    /// Whether one civilian is replaced with Cupid.
    pub cupid: bool,
    /// Whether one civilian is replaced with the Guardian.
    pub guardian: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Sequential,
            voting: VotingRule::Moderator,
            players_per_wolf: 4,
            cupid: false,
            guardian: false,
        }
    }
}

impl GameOptions {
    /// The number of werewolves dealt for the given number of players.
    pub fn wolves(&self, num_players: usize) -> usize {
        num_players.checked_div(self.players_per_wolf).unwrap_or(0)
    }

    /// The number of civilians that are replaced with a special role.
    pub fn specials(&self) -> usize {
        usize::from(self.cupid) + usize::from(self.guardian)
    }

    /// Returns a `GameError` if a roster can't be generated for this many players.
    pub fn validate(&self, num_players: usize) -> Result<(), GameError> {
        if self.players_per_wolf == 0 {
            return Err(GameError::InvalidGameOptions("playersPerWolf must be positive".into()));
        }
        let wolves = self.wolves(num_players);
        if wolves == 0 || num_players - wolves < self.specials() + 1 {
            return Err(GameError::TooFewPlayers);
        }
        if num_players > MAX_PLAYERS {
            return Err(GameError::InvalidGameOptions(format!(
                "at most {} players can be dealt roles",
                MAX_PLAYERS
            )));
        }
        Ok(())
    }

    /// Returns the minimum number of players for this configuration, or `None` if the configuration is not valid.
    pub fn min_players(&self) -> Option<usize> {
        (0..=MAX_PLAYERS).find(|num_players| self.validate(*num_players).is_ok())
    }
}
