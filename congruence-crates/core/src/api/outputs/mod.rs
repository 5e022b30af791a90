pub use crate::basic_types::Solution;
#[cfg(doc)]
use crate::termination::TerminationCondition;
#[cfg(doc)]
use crate::Solver;

/// The result of a call to [`Solver::satisfy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// Indicates that a solution was found and provides the corresponding [`Solution`].
    Satisfiable(Solution),
    /// Indicates that there is no solution to the satisfaction problem.
    Unsatisfiable,
    /// Indicates that it is not known whether a solution exists. This is likely due to a
    /// [`TerminationCondition`] triggering.
    Unknown,
}

/// The result of a call to [`Solver::enumerate_solutions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumerationResult {
    /// The whole search space has been explored; every solution has been reported.
    Complete { num_solutions: u64 },
    /// The search stopped after reporting the requested number of solutions.
    SolutionLimitReached { num_solutions: u64 },
    /// A [`TerminationCondition`] stopped the search before it was complete.
    Interrupted { num_solutions: u64 },
}

impl EnumerationResult {
    pub fn num_solutions(&self) -> u64 {
        match self {
            EnumerationResult::Complete { num_solutions }
            | EnumerationResult::SolutionLimitReached { num_solutions }
            | EnumerationResult::Interrupted { num_solutions } => *num_solutions,
        }
    }
}
