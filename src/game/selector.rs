//! The boundary through which players are chosen.
//!
//! The game never decides on its own who is voted out or who a role targets;
//! it asks a [PlayerSelector] and validates the answer.

use super::role::Role;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, BufReader, Stdin, Write};

/// Why a player is being chosen.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum Purpose {
    MayorElection,
    MayorSuccession,
    /// The moderator names the player to lynch.
    Lynch,
    /// A single voter casts their lynch ballot.
    Ballot { voter: usize },
    /// A role picks the target of its night action.
    NightTarget { role: Role, performer: usize },
}

/// A player that may be chosen.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct Candidate {
    pub index: usize,
    pub name: String,
}

/// A request to choose one of the eligible players.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct SelectionRequest {
    pub purpose: Purpose,
    pub candidates: Vec<Candidate>,
}

/// Chooses players on behalf of the people playing the game.
pub trait PlayerSelector {
    /// Returns the name of the chosen player.
    ///
    /// Answers that don't name one of the candidates are ignored and the request is asked again.
    fn select(&mut self, request: &SelectionRequest) -> String;
}

impl SelectionRequest {
    /// Looks up the index of the candidate with the given name.
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.candidates
            .iter()
            .find(|c| c.name == name.trim())
            .map(|c| c.index)
    }

    pub fn names(&self) -> impl Iterator<Item = &'_ str> {
        self.candidates.iter().map(|c| &c.name[..])
    }

    /// Asks the selector until it names an eligible player.
    ///
    /// Returns `None` without asking if nobody is eligible.
    pub fn ask(&self, selector: &mut (impl PlayerSelector + ?Sized)) -> Option<usize> {
        if self.candidates.is_empty() {
            log::debug!("nobody is eligible for {:?}", self.purpose);
            return None;
        }
        loop {
            let name = selector.select(self);
            match self.resolve(&name) {
                Some(index) => return Some(index),
                None => log::warn!("{:?} cannot be chosen for {:?}", name, self.purpose),
            }
        }
    }
}

/// Reads choices line by line, from standard input unless told otherwise.
pub struct ConsoleSelector<R> {
    input: R,
}

impl ConsoleSelector<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> ConsoleSelector<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> PlayerSelector for ConsoleSelector<R> {
    fn select(&mut self, request: &SelectionRequest) -> String {
        let names = request.names().collect::<Vec<_>>().join(", ");
        print!("{:?} - choose one of [{}]: ", request.purpose, names);
        io::stdout().flush().ok();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => panic!("input closed while choosing a player for {:?}", request.purpose),
            Err(err) => panic!("failed to read a choice for {:?}: {}", request.purpose, err),
            Ok(_) => line.trim().to_string(),
        }
    }
}
