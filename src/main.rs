use crate::error::GameError;
use crate::game::{ConsoleSelector, Game, GameOptions, LogAnnouncer};
use anyhow::Context;

mod error;
mod game;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::try_init().ok();

    let players = std::env::var("PLAYERS").context("PLAYERS is unspecified")?;
    let players = players
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect::<Vec<_>>();

    let seed = match std::env::var("SEED") {
        Ok(seed) => seed.parse::<u64>().context("SEED is not a valid number")?,
        Err(_) => rand::random(),
    };

    let opts = match std::env::var("GAME_OPTIONS") {
        Ok(json) => serde_json::from_str::<GameOptions>(&json).context("GAME_OPTIONS is invalid")?,
        Err(_) => GameOptions::default(),
    };

    let mut game = match Game::new(opts, &players, seed) {
        Err(GameError::TooFewPlayers) => {
            if let Some(min) = opts.min_players() {
                log::error!("{} players joined, but these options need at least {}", players.len(), min);
            }
            return Err(GameError::TooFewPlayers.into());
        }
        result => result?,
    };
    log::info!(
        "dealt roles to {} with seed {}",
        game.player_names().collect::<Vec<_>>().join(", "),
        seed
    );

    if let Ok(mayor) = std::env::var("MAYOR") {
        game.appoint_mayor(mayor.trim()).context("MAYOR is not one of the players")?;
    }

    let winners = game.run(ConsoleSelector::stdin(), &mut LogAnnouncer).await?;
    log::info!(
        "game ended on {} with {} players alive: {:?}",
        game.clock(),
        game.num_players_alive(),
        game.outcome()
    );

    let roster = game.players();
    let winners = winners
        .iter()
        .map(|i| format!("{} ({})", roster[*i].name, roster[*i].role))
        .collect::<Vec<_>>();
    println!("Winners: {}", winners.join(", "));
    Ok(())
}
