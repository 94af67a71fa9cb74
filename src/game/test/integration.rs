//! Full games played through the phase controller

use super::super::action::Action;
use super::super::clock::{Clock, Daypart};
use super::super::collect::{collect_concurrent, Mode};
use super::super::player::{Death, DeathCause::*};
use super::super::role::Role;
use super::super::Outcome;
use super::test_utils::*;
use crate::error::GameError;
use crate::game::GameOptions;
use std::sync::{Arc, Mutex};

fn night(date: u32) -> Clock {
    Clock {
        daypart: Daypart::Night,
        date,
    }
}

fn day(date: u32) -> Clock {
    Clock {
        daypart: Daypart::Day,
        date,
    }
}

async fn play_standard_game(mode: Mode) {
    let opts = GameOptions {
        mode,
        ..GameOptions::default()
    };
    let mut game = create_game_with_options(
        opts,
        &[
            ("A", Role::Werewolf),
            ("B", Role::Werewolf),
            ("C", Role::Civilian),
            ("D", Role::Civilian),
        ],
    );
    // Mayor C is killed on the first night and succeeded by D
    let selector = ScriptedSelector::new(&["C", "D", "B"]).night(Role::Werewolf, &["C", "D"]);
    let mut announcer = RecordingAnnouncer::default();

    let winners = game.run(selector, &mut announcer).await.unwrap();

    assert_eq!(announcer.mayors, vec![2, 3]);
    assert_eq!(
        announcer.nights,
        vec![
            (night(1), vec![Death { player: 2, cause: WerewolfAttack }]),
            (night(2), vec![Death { player: 3, cause: WerewolfAttack }]),
        ]
    );
    assert_eq!(announcer.lynches, vec![(day(1), vec![Death { player: 1, cause: Lynched }])]);

    // The game stops at night 2 without holding another vote
    assert_eq!(game.clock(), night(2));
    assert_eq!(game.outcome(), Some(Outcome { civilians: false, werewolves: true }));
    assert!(game.win_wolves());
    assert_eq!(winners, vec![0]);
    assert_eq!(announcer.winners, Some(vec![0]));
}

#[tokio::test]
async fn test_werewolves_win_sequential() {
    play_standard_game(Mode::Sequential).await;
}

#[tokio::test]
async fn test_werewolves_win_concurrent() {
    play_standard_game(Mode::Concurrent).await;
}

#[tokio::test]
async fn test_civilians_win_by_lynching() {
    let mut game = create_game(&[
        ("A", Role::Werewolf),
        ("B", Role::Civilian),
        ("C", Role::Civilian),
        ("D", Role::Civilian),
    ]);
    let selector = ScriptedSelector::new(&["D", "A"]).night(Role::Werewolf, &["C"]);
    let mut announcer = RecordingAnnouncer::default();

    let winners = game.run(selector, &mut announcer).await.unwrap();

    assert_eq!(announcer.lynches, vec![(day(1), vec![Death { player: 0, cause: Lynched }])]);
    assert_eq!(game.outcome(), Some(Outcome { civilians: true, werewolves: false }));
    // C was killed during the night, so only B and D win
    assert_eq!(winners, vec![1, 3]);
    assert!(game.players[0].revealed);
}

#[tokio::test]
async fn test_lovers_die_together() {
    let mut game = create_game(&[
        ("Amor", Role::Cupid),
        ("Wolf", Role::Werewolf),
        ("X", Role::Civilian),
        ("Y", Role::Civilian),
        ("Z", Role::Civilian),
    ]);
    // Night 1 the wolf kills Amor, who still binds X and Y; day 1 the mayor Z is lynched
    let selector = ScriptedSelector::new(&["Z", "Z", "Y"])
        .night(Role::Werewolf, &["Amor", "X"])
        .night(Role::Cupid, &["X", "Y"]);
    let mut announcer = RecordingAnnouncer::default();

    let winners = game.run(selector, &mut announcer).await.unwrap();

    assert_eq!(announcer.nights[0].1, vec![Death { player: 0, cause: WerewolfAttack }]);
    assert_eq!(announcer.mayors, vec![4, 3]);
    assert_eq!(
        announcer.nights[1].1,
        vec![Death { player: 2, cause: WerewolfAttack }, Death { player: 3, cause: LoverDied }]
    );
    assert_eq!(winners, vec![1]);
}

#[test]
fn test_cupid_pairing_then_attack() {
    let mut game = create_game(&[
        ("Amor", Role::Cupid),
        ("Wolf", Role::Werewolf),
        ("X", Role::Civilian),
        ("Y", Role::Civilian),
        ("Z", Role::Civilian),
    ]);

    advance_to_night(&mut game);
    let deaths = game.resolve_night(vec![Action::Couple {
        performer: 0,
        targets: vec![2, 3],
    }]);
    assert!(deaths.is_empty());
    assert!(game.players[2].alive && game.players[3].alive);

    advance_to_night(&mut game);
    let deaths = game.resolve_night(vec![Action::Attack {
        performer: 1,
        targets: vec![2],
    }]);
    assert_eq!(named(&game, &deaths), vec![("X".into(), WerewolfAttack), ("Y".into(), LoverDied)]);
}

#[tokio::test]
async fn test_guardian_protects_through_a_night() {
    let mut game = create_game(&[
        ("Wolf", Role::Werewolf),
        ("Guard", Role::Guardian),
        ("X", Role::Civilian),
        ("Y", Role::Civilian),
    ]);
    advance_to_night(&mut game);

    let selector = ScriptedSelector::default()
        .night(Role::Werewolf, &["X"])
        .night(Role::Guardian, &["X"]);
    let actions = collect_concurrent(game.night_requests(), Arc::new(Mutex::new(selector))).await;

    assert_eq!(actions.len(), 2);
    assert!(matches!(actions[0], Action::Attack { .. }));
    assert!(game.resolve_night(actions).is_empty());
}

#[tokio::test]
async fn test_finished_game_cannot_run_again() {
    let mut game = create_game(&[("A", Role::Civilian), ("B", Role::Civilian), ("C", Role::Civilian)]);

    let winners = game.run(ScriptedSelector::new(&["A"]), &mut Silent).await.unwrap();
    assert_eq!(winners, vec![0, 1, 2]);
    // Nobody is asked anything after the mayor election
    assert_eq!(game.clock(), day(0));

    let result = game.run(ScriptedSelector::default(), &mut Silent).await;
    assert_eq!(result, Err(GameError::GameOver));
}

#[tokio::test]
async fn test_appointed_mayor_skips_the_election() {
    let mut game = create_standard_4_player_game();
    assert_eq!(game.appoint_mayor("E"), Err(GameError::PlayerNotFound("E".into())));
    game.appoint_mayor("D").unwrap();

    // Only the moderator's lynch is asked for; no election is held
    let selector = ScriptedSelector::new(&["B"]).night(Role::Werewolf, &["C", "D"]);
    let mut announcer = RecordingAnnouncer::default();
    let winners = game.run(selector, &mut announcer).await.unwrap();

    assert_eq!(announcer.mayors, vec![3]);
    assert_eq!(game.num_players_alive(), 1);
    assert_eq!(winners, vec![0]);
    assert_eq!(game.appoint_mayor("A"), Err(GameError::GameOver));
}
