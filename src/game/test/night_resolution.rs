//! Night action resolution tests

use super::super::action::{Action, ActionType};
use super::super::night::resolve;
use super::super::player::{Death, DeathCause::*, ProtectionGrant};
use super::super::role::Role;
use super::test_utils::*;

fn attack(performer: usize, targets: &[usize]) -> Action {
    Action::Attack {
        performer,
        targets: targets.to_vec(),
    }
}

fn protect(performer: usize, targets: &[usize], priority: u32) -> Action {
    Action::Protect {
        performer,
        targets: targets.to_vec(),
        priority,
    }
}

fn couple(performer: usize, first: usize, second: usize) -> Action {
    Action::Couple {
        performer,
        targets: vec![first, second],
    }
}

/// Wolf, Guardian, Cupid and three civilians.
fn create_village() -> crate::game::Game {
    create_game(&[
        ("Wolf", Role::Werewolf),
        ("Guardian", Role::Guardian),
        ("Amor", Role::Cupid),
        ("X", Role::Civilian),
        ("Y", Role::Civilian),
        ("Z", Role::Civilian),
    ])
}

#[test]
fn test_unprotected_target_dies() {
    let resolution = resolve(vec![attack(0, &[3])]);
    assert_eq!(resolution.doomed, vec![Death { player: 3, cause: WerewolfAttack }]);
}

#[test]
fn test_equal_priority_protection_does_not_save() {
    let resolution = resolve(vec![attack(0, &[3]), protect(1, &[3], 1)]);

    assert_eq!(resolution.attacks[0].targets(), &[3]);
    assert_eq!(resolution.doomed, vec![Death { player: 3, cause: WerewolfAttack }]);
}

#[test]
fn test_higher_priority_protection_saves() {
    let resolution = resolve(vec![attack(0, &[3]), protect(1, &[3], 2)]);

    assert!(resolution.is_peaceful());
    assert!(resolution.attacks[0].targets().is_empty());
}

#[test]
fn test_strongest_protection_counts() {
    let resolution = resolve(vec![protect(1, &[3], 1), attack(0, &[3]), protect(2, &[3], 2)]);
    assert!(resolution.is_peaceful());
}

#[test]
fn test_fully_blocked_attack_is_kept() {
    let mut game = create_village();
    let deaths = game.resolve_night(vec![attack(0, &[3]), protect(1, &[3], 2)]);
    assert!(deaths.is_empty());

    let resolution = resolve(vec![attack(0, &[3]), protect(1, &[3], 2)]);
    assert_eq!(resolution.attacks.len(), 1);
    assert_eq!(resolution.attacks[0], attack(0, &[]));
    assert_eq!(resolution.blocked_attacks().count(), 1);
}

#[test]
fn test_attack_without_targets_was_not_blocked() {
    let resolution = resolve(vec![attack(0, &[]), attack(0, &[3, 4]), protect(1, &[3, 4], 2)]);

    assert_eq!(resolution.submitted, vec![0, 2]);
    assert_eq!(resolution.attacks, vec![attack(0, &[]), attack(0, &[])]);
    assert_eq!(resolution.blocked_attacks().collect::<Vec<_>>(), vec![&resolution.attacks[1]]);
}

#[test]
fn test_only_protected_targets_are_pruned() {
    let resolution = resolve(vec![attack(0, &[3, 4, 5]), protect(1, &[4], 2)]);

    assert_eq!(resolution.attacks, vec![attack(0, &[3, 5])]);
    assert_eq!(
        resolution.doomed,
        vec![
            Death { player: 3, cause: WerewolfAttack },
            Death { player: 5, cause: WerewolfAttack },
        ]
    );
}

#[test]
fn test_attack_without_targets_kills_nobody() {
    let mut game = create_village();
    let deaths = game.resolve_night(vec![attack(0, &[])]);
    assert!(deaths.is_empty());
    assert_eq!(game.num_players_alive(), 6);
}

#[test]
fn test_player_attacked_twice_dies_once() {
    let mut game = create_village();
    let deaths = game.resolve_night(vec![attack(0, &[3]), attack(0, &[3, 4])]);

    assert_eq!(named(&game, &deaths), vec![("X".into(), WerewolfAttack), ("Y".into(), WerewolfAttack)]);
}

#[test]
fn test_protection_on_other_player_does_not_help() {
    let mut game = create_village();
    let deaths = game.resolve_night(vec![attack(0, &[3]), protect(1, &[4], 5)]);
    assert_eq!(named(&game, &deaths), vec![("X".into(), WerewolfAttack)]);
}

#[test]
fn test_protection_is_recorded_on_target() {
    let mut game = create_village();
    game.resolve_night(vec![protect(1, &[4], 2)]);

    assert_eq!(
        game.players[4].properties.protection,
        Some(ProtectionGrant {
            blocks: ActionType::Attack,
            priority: 2
        })
    );

    // Protection only lasts for the night it was given
    game.resolve_night(vec![]);
    assert_eq!(game.players[4].properties.protection, None);
}

#[test]
fn test_visits_are_never_blocked() {
    let mut game = create_village();
    game.resolve_night(vec![couple(2, 3, 4), protect(1, &[3, 4], 9)]);

    assert_eq!(game.players[3].properties.in_love_with, Some(4));
    assert_eq!(game.players[4].properties.in_love_with, Some(3));
}

#[test]
fn test_visit_happens_even_if_performer_dies() {
    let mut game = create_village();
    let deaths = game.resolve_night(vec![attack(0, &[2]), couple(2, 3, 4)]);

    assert_eq!(named(&game, &deaths), vec![("Amor".into(), WerewolfAttack)]);
    assert_eq!(game.players[3].properties.in_love_with, Some(4));
}

#[test]
fn test_lovers_bonded_tonight_die_together_tonight() {
    let mut game = create_village();
    let deaths = game.resolve_night(vec![attack(0, &[3]), couple(2, 3, 4)]);

    assert_eq!(named(&game, &deaths), vec![("X".into(), WerewolfAttack), ("Y".into(), LoverDied)]);
}

#[test]
fn test_limited_actions_are_spent() {
    let mut game = create_village();
    assert_eq!(game.players[2].properties.remaining_actions, Some(1));

    game.resolve_night(vec![couple(2, 3, 4)]);

    assert_eq!(game.players[2].properties.remaining_actions, Some(0));
    assert_eq!(game.players[0].properties.remaining_actions, None);
}

#[test]
fn test_cupid_needs_two_different_lovers() {
    let mut game = create_village();
    game.resolve_night(vec![Action::Couple {
        performer: 2,
        targets: vec![3, 3],
    }]);
    assert_eq!(game.players[3].properties.in_love_with, None);
}

#[test]
fn test_resolution_is_deterministic() {
    let actions = vec![attack(0, &[3, 4]), protect(1, &[3], 2), couple(2, 4, 5), attack(0, &[5])];
    let first = resolve(actions.clone());
    let second = resolve(actions);

    assert_eq!(first.attacks, second.attacks);
    assert_eq!(first.doomed, second.doomed);
    assert_eq!(first.visits, second.visits);
}
