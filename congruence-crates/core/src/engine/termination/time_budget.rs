use std::time::Duration;
use std::time::Instant;

use super::TerminationCondition;

/// A [`TerminationCondition`] which stops the search of one instance at a deadline.
///
/// The command line solver creates one per instance, so every instance of a batch gets the full
/// `--time-limit`.
#[derive(Clone, Copy, Debug)]
pub struct TimeBudget {
    /// [`None`] when the deadline lies beyond what an [`Instant`] can represent.
    deadline: Option<Instant>,
}

impl TimeBudget {
    /// A budget of `budget` from now on.
    pub fn starting_now(budget: Duration) -> TimeBudget {
        TimeBudget {
            deadline: Instant::now().checked_add(budget),
        }
    }

    /// A budget which runs out at `deadline`.
    pub fn until(deadline: Instant) -> TimeBudget {
        TimeBudget {
            deadline: Some(deadline),
        }
    }

    /// The time left before the budget runs out, [`Duration::MAX`] for unrepresentable deadlines.
    pub fn remaining(&self) -> Duration {
        self.deadline.map_or(Duration::MAX, |deadline| {
            deadline.saturating_duration_since(Instant::now())
        })
    }
}

impl TerminationCondition for TimeBudget {
    fn should_stop(&mut self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}
