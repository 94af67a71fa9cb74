use super::clock::Clock;
use super::player::{Death, Roster};
use serde_json::json;

/// Receives the public events of a game, so they can be shown to the players.
///
/// Every method does nothing by default.
pub trait Announcer {
    /// Called once a mayor has been chosen, both at the start and after a mayor dies.
    fn mayor_elected(&mut self, _roster: &Roster, _mayor: usize) {}

    /// Called after the night's actions have been resolved.
    fn night_resolved(&mut self, _roster: &Roster, _clock: Clock, _deaths: &[Death]) {}

    /// Called after the day's vote; `deaths` is empty when nobody was lynched.
    fn lynched(&mut self, _roster: &Roster, _clock: Clock, _deaths: &[Death]) {}

    /// Called when the game is over.
    fn game_over(&mut self, _roster: &Roster, _winners: &[usize]) {}
}

/// Writes every event to the log as JSON.
#[derive(Default)]
pub struct LogAnnouncer;

impl LogAnnouncer {
    fn deaths(roster: &Roster, deaths: &[Death]) -> serde_json::Value {
        deaths
            .iter()
            .map(|d| {
                let player = &roster[d.player];
                json!({
                    "name": player.name,
                    "role": player.revealed.then_some(player.role),
                    "cause": d.cause,
                })
            })
            .collect()
    }

    fn survivors(roster: &Roster) -> Vec<&str> {
        roster.alive().map(|(_, p)| &p.name[..]).collect()
    }
}

impl Announcer for LogAnnouncer {
    fn mayor_elected(&mut self, roster: &Roster, mayor: usize) {
        log::info!("{}", json!({ "event": "mayor", "name": roster[mayor].name }));
    }

    fn night_resolved(&mut self, roster: &Roster, clock: Clock, deaths: &[Death]) {
        log::info!(
            "{}",
            json!({
                "event": "night",
                "date": clock.date,
                "deaths": Self::deaths(roster, deaths),
                "survivors": Self::survivors(roster),
            })
        );
    }

    fn lynched(&mut self, roster: &Roster, clock: Clock, deaths: &[Death]) {
        log::info!(
            "{}",
            json!({
                "event": "lynch",
                "date": clock.date,
                "deaths": Self::deaths(roster, deaths),
                "survivors": Self::survivors(roster),
            })
        );
    }

    fn game_over(&mut self, roster: &Roster, winners: &[usize]) {
        let winners = winners.iter().map(|i| &roster[*i].name).collect::<Vec<_>>();
        log::info!("{}", json!({ "event": "gameOver", "winners": winners }));
    }
}
