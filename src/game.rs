use self::action::Action;
pub use self::announce::{Announcer, LogAnnouncer};
use self::clock::Clock;
use self::collect::{collect_concurrent, collect_sequential, Mode, NightRequest};
use self::dealer::assign_roles;
pub use self::options::GameOptions;
use self::player::{Death, DeathCause, Player, Roster};
use self::role::Role;
pub use self::selector::ConsoleSelector;
use self::selector::{PlayerSelector, Purpose};
use self::votes::{Votes, VotingRule};
use crate::error::GameError;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

mod action;
mod alignment;
mod announce;
mod clock;
mod collect;
mod dealer;
mod eligible;
mod night;
mod options;
mod player;
mod role;
mod selector;
mod test;
mod votes;

/// A game of Weerwolven.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Game {
    opts: GameOptions,
    players: Roster,
    clock: Clock,
    mayor: Option<usize>,
    outcome: Option<Outcome>,
}

/// Which factions have won a finished game. Both can win at once,
/// when nobody is left alive or only neutral players remain.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct Outcome {
    pub civilians: bool,
    pub werewolves: bool,
}

impl Game {
    /// Creates a new game of Weerwolven, dealing roles at random.
    pub fn new(opts: GameOptions, player_names: &[String], seed: u64) -> Result<Self, GameError> {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        let roles = assign_roles(player_names.len(), &opts, &mut rng)?;
        Self::with_roles(opts, player_names, &roles)
    }

    /// Creates a new game where the given roles are dealt to the players in order.
    pub fn with_roles(opts: GameOptions, player_names: &[String], roles: &[Role]) -> Result<Self, GameError> {
        if player_names.len() != roles.len() {
            return Err(GameError::RosterMismatch {
                players: player_names.len(),
                roles: roles.len(),
            });
        }
        let players = player_names
            .iter()
            .zip(roles)
            .map(|(name, role)| Player::new(name.clone(), *role))
            .collect::<Vec<_>>();

        Ok(Game {
            opts,
            players: Roster::new(players)?,
            clock: Clock::new(),
            mayor: None,
            outcome: None,
        })
    }

    /// Gets the player names.
    pub fn player_names(&self) -> impl Iterator<Item = &'_ str> {
        self.players.iter().map(|p| &p.name[..])
    }

    /// Finds a player with the given name.
    pub fn find_player(&self, name: &str) -> Result<usize, GameError> {
        self.players.find(name)
    }

    pub fn players(&self) -> &Roster {
        &self.players
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Makes the named player mayor, so that no election is held when the game starts.
    pub fn appoint_mayor(&mut self, name: &str) -> Result<(), GameError> {
        if self.game_over() {
            return Err(GameError::GameOver);
        }
        let mayor = self.find_player(name)?;
        log::info!("{} is appointed mayor", name);
        self.mayor = Some(mayor);
        Ok(())
    }

    /// Gets the number of players in the game that are alive.
    pub fn num_players_alive(&self) -> usize {
        self.players.alive().count()
    }

    /// Plays the game to the end, and returns the indices of the winners.
    pub async fn run<S, A>(&mut self, selector: S, announcer: &mut A) -> Result<Vec<usize>, GameError>
    where
        S: PlayerSelector + Send + 'static,
        A: Announcer + ?Sized,
    {
        if self.game_over() {
            return Err(GameError::GameOver);
        }
        log::info!("starting a game of {} players ({:?})", self.players.len(), self.opts.mode);
        let selector = Arc::new(Mutex::new(selector));

        match self.mayor {
            Some(mayor) => announcer.mayor_elected(&self.players, mayor),
            None => self.elect_mayor(&mut *lock(&selector), Purpose::MayorElection, announcer),
        }

        while !self.check_game_over() {
            self.clock.advance();
            log::info!("{} falls", self.clock);
            let requests = self.night_requests();
            let actions = match self.opts.mode {
                Mode::Sequential => {
                    let mut selector = lock(&selector);
                    collect_sequential(&requests, &mut *selector)
                }
                Mode::Concurrent => collect_concurrent(requests, selector.clone()).await,
            };
            let deaths = self.resolve_night(actions);
            announcer.night_resolved(&self.players, self.clock, &deaths);
            if self.check_game_over() {
                break;
            }
            self.succeed_mayor(&mut *lock(&selector), announcer);

            self.clock.advance();
            log::info!("{} breaks", self.clock);
            let deaths = match self.day_vote(&mut *lock(&selector)) {
                Some(victim) => self.lynch(victim),
                None => vec![],
            };
            announcer.lynched(&self.players, self.clock, &deaths);
            if self.check_game_over() {
                break;
            }
            self.succeed_mayor(&mut *lock(&selector), announcer);
        }

        let winners = self.winners();
        announcer.game_over(&self.players, &winners);
        Ok(winners)
    }

    /// Lists the roles that may act tonight, and who they may target.
    pub fn night_requests(&self) -> Vec<NightRequest> {
        if !self.clock.is_night() {
            return vec![];
        }
        let Clock { daypart, date } = self.clock;
        let can_act = |p: &Player| p.role.can_act(daypart, date, &p.properties);
        let mut requests = vec![];

        // The werewolves hunt as one pack, led by the first of them still alive
        let leader = self
            .players
            .alive()
            .find(|(_, p)| p.role == Role::Werewolf && can_act(*p));
        if let Some((performer, _)) = leader {
            requests.push(NightRequest {
                role: Role::Werewolf,
                performer,
                request: self
                    .eligible_players()
                    .not_role(Role::Werewolf)
                    .make(Purpose::NightTarget { role: Role::Werewolf, performer }),
                picks: 1,
            });
        }

        for (performer, player) in self.players.alive() {
            if player.role == Role::Werewolf || !can_act(player) {
                continue;
            }
            let picks = match player.role {
                Role::Cupid => 2,
                Role::Guardian => 1,
                _ => continue,
            };
            requests.push(NightRequest {
                role: player.role,
                performer,
                request: self.eligible_players().make(Purpose::NightTarget {
                    role: player.role,
                    performer,
                }),
                picks,
            });
        }

        requests
    }

    /// Resolves the night's actions and applies them, returning everyone who died.
    pub fn resolve_night(&mut self, actions: Vec<Action>) -> Vec<Death> {
        for player in self.players.iter_mut() {
            player.properties.protection = None;
        }
        let resolution = night::resolve(actions);
        for attack in resolution.blocked_attacks() {
            log::info!("the attack by {} was fully blocked", self.players[attack.performer()].name);
        }
        if resolution.is_peaceful() {
            log::info!("nobody is attacked successfully on {}", self.clock);
        }
        resolution.apply(&mut self.players)
    }

    /// Decides who the village lynches today, if anyone.
    pub fn day_vote(&self, selector: &mut (impl PlayerSelector + ?Sized)) -> Option<usize> {
        match self.opts.voting {
            VotingRule::Moderator => self.eligible_players().make(Purpose::Lynch).ask(&mut *selector),
            VotingRule::Ballot => {
                let mut votes = Votes::new(self.players.len(), self.mayor);
                for voter in self.eligible_players().can_vote().indices() {
                    let ballot = self.eligible_players().make(Purpose::Ballot { voter });
                    if let Some(target) = ballot.ask(&mut *selector) {
                        votes.vote(voter, target);
                    }
                }
                let outcome = votes.outcome();
                if outcome.is_none() {
                    log::info!("the vote is tied; nobody is lynched");
                }
                outcome
            }
        }
    }

    /// Lynches a player, who dies at once.
    pub fn lynch(&mut self, player: usize) -> Vec<Death> {
        self.players.dies(player, DeathCause::Lynched)
    }

    /// Has the living players choose a mayor.
    pub fn elect_mayor<A>(&mut self, selector: &mut (impl PlayerSelector + ?Sized), purpose: Purpose, announcer: &mut A)
    where
        A: Announcer + ?Sized,
    {
        self.mayor = self.eligible_players().make(purpose).ask(&mut *selector);
        if let Some(mayor) = self.mayor {
            log::info!("{} is the mayor", self.players[mayor].name);
            announcer.mayor_elected(&self.players, mayor);
        }
    }

    /// Chooses a new mayor if the current one has died.
    pub fn succeed_mayor<A>(&mut self, selector: &mut (impl PlayerSelector + ?Sized), announcer: &mut A)
    where
        A: Announcer + ?Sized,
    {
        let Some(mayor) = self.mayor else {
            return;
        };
        if !self.players[mayor].alive {
            self.elect_mayor(selector, Purpose::MayorSuccession, announcer);
        }
    }

    /// Returns true if every living player sides with the civilians.
    pub fn win_civilians(&self) -> bool {
        self.players.alive().all(|(_, p)| p.alignment().is_good())
    }

    /// Returns true if every living player sides with the werewolves.
    pub fn win_wolves(&self) -> bool {
        self.players.alive().all(|(_, p)| p.alignment().is_evil())
    }

    /// Checks the win conditions, ending the game if either holds.
    pub fn check_game_over(&mut self) -> bool {
        if self.outcome.is_some() {
            return true;
        }
        let outcome = Outcome {
            civilians: self.win_civilians(),
            werewolves: self.win_wolves(),
        };
        if outcome.civilians || outcome.werewolves {
            log::info!("game over on {}: {:?}", self.clock, outcome);
            self.outcome = Some(outcome);
        }
        self.outcome.is_some()
    }

    /// Returns true if the game is over.
    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns whether a particular player has won. Only living players can win.
    pub fn player_has_won(&self, player: usize) -> bool {
        let Some(outcome) = self.outcome else {
            return false;
        };
        let player = &self.players[player];
        let alignment = player.alignment();
        player.alive && ((outcome.civilians && alignment.is_good()) || (outcome.werewolves && alignment.is_evil()))
    }

    /// The indices of every player who has won.
    pub fn winners(&self) -> Vec<usize> {
        (0..self.players.len()).filter(|i| self.player_has_won(*i)).collect()
    }
}

fn lock<S>(selector: &Mutex<S>) -> MutexGuard<'_, S> {
    selector.lock().unwrap_or_else(PoisonError::into_inner)
}
