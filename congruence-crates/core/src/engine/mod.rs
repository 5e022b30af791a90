pub(crate) mod assignments;
mod depth_first_search;
pub mod notifications;
pub mod predicates;
mod propagator_queue;
mod state;
pub mod termination;
#[cfg(test)]
pub(crate) mod test_solver;
pub mod variables;

pub use assignments::Assignments;
pub use assignments::EmptyDomain;
pub(crate) use depth_first_search::DepthFirstSearch;
pub(crate) use depth_first_search::Interruption;
pub(crate) use depth_first_search::SearchStatistics;
pub use state::Conflict;
pub use state::State;
