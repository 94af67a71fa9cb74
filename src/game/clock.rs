use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two half-turns of a game date.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum Daypart {
    Day,
    Night,
}

/// Tracks the current daypart and date.
///
/// The game starts on day 0; the date only increments when night falls,
/// so the sequence runs `Day 0, Night 1, Day 1, Night 2, ...`.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct Clock {
    pub daypart: Daypart,
    pub date: u32,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            daypart: Daypart::Day,
            date: 0,
        }
    }

    /// Moves on to the next daypart.
    pub fn advance(&mut self) {
        match self.daypart {
            Daypart::Day => {
                self.daypart = Daypart::Night;
                self.date += 1;
            }
            Daypart::Night => self.daypart = Daypart::Day,
        }
    }

    pub fn is_night(&self) -> bool {
        self.daypart == Daypart::Night
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.daypart {
            Daypart::Day => write!(f, "day {}", self.date),
            Daypart::Night => write!(f, "night {}", self.date),
        }
    }
}
