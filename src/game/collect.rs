//! Gathering the night's actions from the roles that may act.

use super::action::Action;
use super::role::Role;
use super::selector::{PlayerSelector, SelectionRequest};
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

/// How night actions are gathered.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug, Default)]
pub enum Mode {
    /// Each role is asked in turn.
    #[default]
    Sequential,
    /// Every role is asked independently and the answers are joined before resolving.
    Concurrent,
}

/// A role's turn to act during the night.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct NightRequest {
    pub role: Role,
    pub performer: usize,
    /// The players the role may target.
    pub request: SelectionRequest,
    /// How many distinct targets the role picks.
    pub picks: usize,
}

impl NightRequest {
    /// Asks the selector for this role's targets and builds the resulting action.
    ///
    /// Returns `None` if there are too few candidates to make every pick.
    pub fn answer(&self, selector: &mut (impl PlayerSelector + ?Sized)) -> Option<Action> {
        let mut request = self.request.clone();
        let mut targets = Vec::with_capacity(self.picks);
        for _ in 0..self.picks {
            let target = request.ask(&mut *selector)?;
            request.candidates.retain(|c| c.index != target);
            targets.push(target);
        }
        Action::for_role(self.role, self.performer, targets)
    }
}

/// Answers each request one after the other.
pub fn collect_sequential(requests: &[NightRequest], selector: &mut (impl PlayerSelector + ?Sized)) -> Vec<Action> {
    requests.iter().filter_map(|request| request.answer(&mut *selector)).collect()
}

/// Answers every request in its own task, and waits for all of them.
///
/// The actions come back in the same order as the requests, however the tasks were scheduled.
pub async fn collect_concurrent<S>(requests: Vec<NightRequest>, selector: Arc<Mutex<S>>) -> Vec<Action>
where
    S: PlayerSelector + Send + 'static,
{
    let tasks = requests.into_iter().map(|request| {
        let selector = selector.clone();
        tokio::task::spawn_blocking(move || {
            let mut selector = selector.lock().unwrap_or_else(PoisonError::into_inner);
            request.answer(&mut *selector)
        })
    });

    join_all(tasks)
        .await
        .into_iter()
        .filter_map(|result| match result {
            Ok(action) => action,
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        })
        .collect()
}
