use super::options::GameOptions;
use super::role::Role;
use crate::error::GameError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Deals `wolves(amount)` werewolves and civilians for the rest, in a shuffled order.
pub fn civilians_wolves(amount: usize, wolves: impl Fn(usize) -> usize, rng: &mut impl Rng) -> Vec<Role> {
    let wolves = wolves(amount).min(amount);
    let mut roles = vec![Role::Werewolf; wolves];
    roles.resize(amount, Role::Civilian);
    roles.shuffle(rng);
    roles
}

/// Deals the roles for a game with the given options.
///
/// Special roles replace randomly chosen civilians.
pub fn assign_roles(num_players: usize, opts: &GameOptions, rng: &mut impl Rng) -> Result<Vec<Role>, GameError> {
    opts.validate(num_players)?;
    let mut roles = civilians_wolves(num_players, |n| opts.wolves(n), &mut *rng);

    let specials = [(opts.cupid, Role::Cupid), (opts.guardian, Role::Guardian)];
    for (_, special) in specials.into_iter().filter(|(enabled, _)| *enabled) {
        let civilians = (0..num_players).filter(|i| roles[*i] == Role::Civilian).collect::<Vec<_>>();
        let Some(idx) = civilians.choose(&mut *rng) else {
            return Err(GameError::TooFewPlayers);
        };
        roles[*idx] = special;
    }

    Ok(roles)
}
