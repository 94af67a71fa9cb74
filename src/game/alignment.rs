use serde::{Deserialize, Serialize};

/// The faction a role wins with.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum Alignment {
    Good,
    /// Counts toward both the civilian and the werewolf victory.
    Neutral,
    Evil,
    /// Counts toward neither victory.
    Alone,
}

impl Alignment {
    pub fn is_good(self) -> bool {
        matches!(self, Alignment::Good | Alignment::Neutral)
    }

    pub fn is_evil(self) -> bool {
        matches!(self, Alignment::Evil | Alignment::Neutral)
    }
}
