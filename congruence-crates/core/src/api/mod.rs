mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`Solver`].
    //!
    //! A single solution is requested with [`Solver::satisfy`], which returns a
    //! [`SatisfactionResult`]. All solutions (up to a limit) are reported by
    //! [`Solver::enumerate_solutions`], which returns an [`EnumerationResult`].
    pub use crate::api::outputs::EnumerationResult;
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::basic_types::Solution;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod variables {
    //! Contains the variables which are used by the [`Solver`].
    //!
    //! Integer variables are represented by [`DomainId`]s when interacting with the [`Solver`].
    //! They are created with [`Solver::new_bounded_integer`]. The domain of a variable is an
    //! interval which may contain holes.
    pub use crate::engine::variables::DomainId;
    pub use crate::engine::variables::IntegerVariable;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod options {
    //! Contains the options which can be passed to the [`Solver`] and to its constraints.
    pub use crate::api::solver::SolverOptions;
    pub use crate::propagators::CongruencePruning;
    pub use crate::propagators::ModuloOptions;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod termination {
    //! Contains the conditions which are used to determine when the [`Solver`] should terminate
    //! even when the state of the satisfaction problem is unknown.
    //!
    //! The main [`TerminationCondition`] is a condition which is polled by the [`Solver`] during
    //! the search process. It indicates when the [`Solver`] should stop, even if no definitive
    //! conclusions have been made.
    //!
    //! The most common example would be [`TimeBudget`], which terminates the [`Solver`] whenever
    //! the time budget is exceeded.
    pub use crate::engine::termination::combinator::*;
    pub use crate::engine::termination::indefinite::*;
    pub use crate::engine::termination::node_budget::*;
    pub use crate::engine::termination::time_budget::*;
    pub use crate::engine::termination::TerminationCondition;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod predicates {
    //! Contains the atomic constraints `[x >= v]`, `[x <= v]`, `[x == v]` and `[x != v]`, which
    //! are used as the decisions of the search.
    pub use crate::engine::predicates::Predicate;
    pub use crate::engine::predicates::PredicateConstructor;
}
