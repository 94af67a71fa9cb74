use thiserror::Error;

/// The result of attempting to set up or drive a [Game](crate::game::Game) incorrectly.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid combination of game options: {0}")]
    InvalidGameOptions(String),
    #[error("too few players in the game")]
    TooFewPlayers,
    #[error("no player exists with the name {0:?}")]
    PlayerNotFound(String),
    #[error("more than one player is named {0:?}")]
    DuplicatePlayer(String),
    #[error("{players} players were given {roles} roles")]
    RosterMismatch { players: usize, roles: usize },
    #[error("player {0:?} was never assigned a role")]
    UnassignedRole(String),
    #[error("the game is already over")]
    GameOver,
}
