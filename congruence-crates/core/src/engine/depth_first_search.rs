use std::ops::ControlFlow;

use log::trace;
use log::warn;

use super::termination::TerminationCondition;
use super::State;
use crate::basic_types::Solution;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::create_statistics_struct;

create_statistics_struct!(
    /// The counters of one search.
    SearchStatistics {
        /// Wall-clock time spent in the search, in milliseconds.
        runtime_ms: u64,
        num_solutions: u64,
        /// Calls to `Propagator::propagate`, over all nodes.
        num_propagations: u64,
        num_nodes: u64,
        /// Nodes at which propagation found a conflict.
        num_failures: u64,
        peak_depth: u64,
    }
);

/// Why a search stopped before the complete search space was explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Interruption {
    SolutionLimit,
    Termination,
}

/// Explores the search tree depth-first. Every node owns a [`State`]; the left child is a clone
/// with the decision posted, the right child reuses the node's own state with the negated
/// decision.
pub(crate) struct DepthFirstSearch<'a, B: ?Sized, T: ?Sized, OnSolution> {
    brancher: &'a mut B,
    termination: &'a mut T,
    on_solution: OnSolution,
    solution_limit: Option<u64>,
    pub(crate) statistics: SearchStatistics,
}

impl<'a, B, T, OnSolution> DepthFirstSearch<'a, B, T, OnSolution>
where
    B: Brancher + ?Sized,
    T: TerminationCondition + ?Sized,
    OnSolution: FnMut(&Solution),
{
    pub(crate) fn new(
        brancher: &'a mut B,
        termination: &'a mut T,
        solution_limit: Option<u64>,
        on_solution: OnSolution,
    ) -> Self {
        DepthFirstSearch {
            brancher,
            termination,
            on_solution,
            solution_limit,
            statistics: SearchStatistics::default(),
        }
    }

    /// Explores the tree under `root`. Returns `Ok` when the whole tree has been explored.
    pub(crate) fn run(&mut self, root: State) -> Result<(), Interruption> {
        match self.explore(root, 0) {
            ControlFlow::Continue(()) => Ok(()),
            ControlFlow::Break(interruption) => Err(interruption),
        }
    }

    fn explore(&mut self, mut state: State, mut depth: u64) -> ControlFlow<Interruption> {
        // Every iteration handles one node; the right child continues in the same frame.
        loop {
            if self.termination.should_stop() {
                return ControlFlow::Break(Interruption::Termination);
            }
            self.termination.node_has_been_explored();
            self.statistics.num_nodes += 1;
            self.statistics.peak_depth = self.statistics.peak_depth.max(depth);

            let propagation_result = state.propagate_to_fixed_point();
            self.statistics.num_propagations += state.take_num_propagator_calls();
            if let Err(conflict) = propagation_result {
                trace!(
                    "conflict at depth {depth} in {}: {}",
                    conflict.propagator_id,
                    conflict.inconsistency
                );
                self.statistics.num_failures += 1;
                return ControlFlow::Continue(());
            }

            let Some(decision) = self
                .brancher
                .next_decision(&SelectionContext::new(state.assignments()))
            else {
                return self.report_solution(&state);
            };
            trace!("decision {decision} at depth {depth}");

            let mut left = state.clone();
            if left.post(decision).is_ok() {
                self.explore(left, depth + 1)?;
            } else {
                self.statistics.num_failures += 1;
            }

            if state.post(!decision).is_err() {
                self.statistics.num_failures += 1;
                return ControlFlow::Continue(());
            }
            depth += 1;
        }
    }

    fn report_solution(&mut self, state: &State) -> ControlFlow<Interruption> {
        let Some(solution) = state.solution() else {
            warn!("The brancher did not fix every variable; the node is not a solution");
            return ControlFlow::Continue(());
        };

        self.statistics.num_solutions += 1;
        (self.on_solution)(&solution);

        match self.solution_limit {
            Some(limit) if self.statistics.num_solutions >= limit => {
                ControlFlow::Break(Interruption::SolutionLimit)
            }
            _ => ControlFlow::Continue(()),
        }
    }
}
