use std::time::Instant;

use log::debug;

use super::outputs::EnumerationResult;
use super::outputs::SatisfactionResult;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Solution;
use crate::branching::branchers::create_brancher;
use crate::branching::value_selection::ValueSelection;
use crate::branching::variable_selection::VariableSelection;
use crate::branching::Brancher;
use crate::constraints::ConstraintPoster;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::DepthFirstSearch;
use crate::engine::Interruption;
use crate::engine::SearchStatistics;
use crate::engine::State;
use crate::predicate;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorId;
use crate::statistics::end_statistic_block;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// Options which influence the behaviour of the [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// Propagate to a fixed point after every added constraint, so that root-level
    /// infeasibility is reported by [`ConstraintPoster::post`]. Otherwise propagation only
    /// happens during search.
    pub propagate_when_posting: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            propagate_when_posting: true,
        }
    }
}

/// The main interaction point which allows the creation of variables, the addition of constraints,
/// and solving problems.
///
/// # Example
/// ```rust
/// # use congruence_core::constraints;
/// # use congruence_core::options::ModuloOptions;
/// # use congruence_core::results::SatisfactionResult;
/// # use congruence_core::termination::Indefinite;
/// # use congruence_core::Solver;
/// let mut solver = Solver::default();
///
/// let x = solver.new_bounded_integer(0, 10);
/// let y = solver.new_bounded_integer(0, 10);
///
/// // 4x + 6y = 20
/// solver
///     .add_constraint(constraints::modulo_equals(
///         [4, 6],
///         [x, y],
///         20,
///         ModuloOptions::default(),
///     ))
///     .post()
///     .expect("the equation has solutions");
///
/// let mut brancher = solver.default_brancher(&[x, y]);
/// match solver.satisfy(&mut brancher, &mut Indefinite) {
///     SatisfactionResult::Satisfiable(solution) => {
///         assert_eq!(20, 4 * solution.value(x) + 6 * solution.value(y));
///     }
///     _ => panic!("the equation has solutions"),
/// }
/// ```
#[derive(Debug, Default)]
pub struct Solver {
    /// The state at the root of the search.
    state: State,
    /// Set once the constraints are known to be infeasible at the root.
    is_infeasible: bool,
    options: SolverOptions,
    /// The statistics of the most recent search.
    statistics: SearchStatistics,
}

impl Solver {
    /// Creates a solver with the provided [`SolverOptions`].
    pub fn with_options(options: SolverOptions) -> Self {
        Solver {
            options,
            ..Default::default()
        }
    }

    /// Logs the statistics of the most recent search and of every propagator.
    pub fn log_statistics(&self) {
        self.statistics.log(StatisticLogger::default());
        for (propagator_id, propagator) in self.state.propagators() {
            propagator.log_statistics(
                StatisticLogger::new(propagator.name()).attach_to_prefix(propagator_id),
            );
        }
        end_statistic_block();
    }

    /// The number of solutions reported by the most recent search.
    pub fn num_solutions(&self) -> u64 {
        self.statistics.num_solutions
    }

    /// The number of nodes explored by the most recent search.
    pub fn num_nodes(&self) -> u64 {
        self.statistics.num_nodes
    }

    /// The number of nodes of the most recent search at which propagation failed.
    pub fn num_failures(&self) -> u64 {
        self.statistics.num_failures
    }

    /// Whether the added constraints are known to have no solution.
    pub fn is_infeasible(&self) -> bool {
        self.is_infeasible
    }
}

/// Methods to retrieve information about variables
impl Solver {
    /// Get the lower bound of the variable at the root (after propagation).
    pub fn lower_bound(&self, variable: &impl IntegerVariable) -> i32 {
        self.state.lower_bound(variable)
    }

    /// Get the upper bound of the variable at the root (after propagation).
    pub fn upper_bound(&self, variable: &impl IntegerVariable) -> i32 {
        self.state.upper_bound(variable)
    }

    /// Whether `value` is in the domain of the variable at the root (after propagation).
    pub fn contains(&self, variable: &impl IntegerVariable, value: i32) -> bool {
        self.state.contains(variable, value)
    }
}

/// Functions to create and retrieve integer variables.
impl Solver {
    /// Create a new integer variable with the given bounds.
    ///
    /// # Example
    /// ```rust
    /// # use congruence_core::Solver;
    /// let mut solver = Solver::default();
    ///
    /// // We can create an integer variable with a domain in the range [0, 10]
    /// let integer_between_bounds = solver.new_bounded_integer(0, 10);
    ///
    /// assert_eq!(0, solver.lower_bound(&integer_between_bounds));
    /// assert_eq!(10, solver.upper_bound(&integer_between_bounds));
    /// ```
    pub fn new_bounded_integer(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.state.new_variable(lower_bound, upper_bound)
    }
}

/// Functions for solving.
impl Solver {
    /// The brancher which selects the variables in the given order and splits their domains at
    /// the median.
    pub fn default_brancher(&self, variables: &[DomainId]) -> Box<dyn Brancher> {
        create_brancher(
            variables,
            VariableSelection::default(),
            ValueSelection::default(),
        )
    }

    /// Searches for a single solution.
    pub fn satisfy<B, T>(&mut self, brancher: &mut B, termination: &mut T) -> SatisfactionResult
    where
        B: Brancher + ?Sized,
        T: TerminationCondition + ?Sized,
    {
        let mut found: Option<Solution> = None;
        let result = self.search(brancher, termination, Some(1), |solution| {
            found = Some(solution.clone());
        });

        match (found, result) {
            (Some(solution), _) => SatisfactionResult::Satisfiable(solution),
            (None, Ok(())) => SatisfactionResult::Unsatisfiable,
            (None, Err(_)) => SatisfactionResult::Unknown,
        }
    }

    /// Reports every solution to `on_solution`, until `solution_limit` solutions are reported (if
    /// given), the search space is exhausted, or `termination` stops the search.
    pub fn enumerate_solutions<B, T>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
        solution_limit: Option<u64>,
        on_solution: impl FnMut(&Solution),
    ) -> EnumerationResult
    where
        B: Brancher + ?Sized,
        T: TerminationCondition + ?Sized,
    {
        let result = self.search(brancher, termination, solution_limit, on_solution);
        let num_solutions = self.statistics.num_solutions;

        match result {
            Ok(()) => EnumerationResult::Complete { num_solutions },
            Err(Interruption::SolutionLimit) => {
                EnumerationResult::SolutionLimitReached { num_solutions }
            }
            Err(Interruption::Termination) => EnumerationResult::Interrupted { num_solutions },
        }
    }

    /// Runs a depth-first search from a copy of the root state; the root itself is not changed.
    fn search<B, T>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
        solution_limit: Option<u64>,
        on_solution: impl FnMut(&Solution),
    ) -> Result<(), Interruption>
    where
        B: Brancher + ?Sized,
        T: TerminationCondition + ?Sized,
    {
        if self.is_infeasible {
            self.statistics = SearchStatistics::default();
            return Ok(());
        }

        let start = Instant::now();
        let mut search = DepthFirstSearch::new(brancher, termination, solution_limit, on_solution);
        let result = search.run(self.state.clone());

        self.statistics = search.statistics;
        self.statistics.runtime_ms = start.elapsed().as_millis() as u64;
        debug!(
            "search finished after {} nodes with {} solutions",
            self.statistics.num_nodes, self.statistics.num_solutions
        );

        result
    }
}

/// Functions for adding new constraints to the solver.
impl Solver {
    /// Add a constraint to the solver. This returns a [`ConstraintPoster`] which enables control
    /// on whether to add the constraint as-is, or whether to (half) reify it.
    ///
    /// If none of the methods on [`ConstraintPoster`] are used, the constraint _is not_ actually
    /// added to the solver. In this case, a warning is emitted.
    ///
    /// # Example
    /// ```
    /// # use congruence_core::constraints;
    /// # use congruence_core::Solver;
    /// let mut solver = Solver::default();
    ///
    /// let a = solver.new_bounded_integer(0, 3);
    /// let b = solver.new_bounded_integer(0, 3);
    ///
    /// solver
    ///     .add_constraint(constraints::linear_equals([1, 1], [a, b], 6))
    ///     .post()
    ///     .expect("a = b = 3 is a solution");
    ///
    /// assert_eq!(3, solver.lower_bound(&a));
    /// ```
    pub fn add_constraint<Constraint>(
        &mut self,
        constraint: Constraint,
    ) -> ConstraintPoster<'_, Constraint> {
        ConstraintPoster::new(self, constraint)
    }

    pub(crate) fn add_propagator<Constructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<PropagatorId, ConstraintOperationError>
    where
        Constructor: PropagatorConstructor,
        Constructor::PropagatorImpl: 'static,
    {
        if self.is_infeasible {
            return Err(ConstraintOperationError::InfeasibleState);
        }

        let propagator_id = self.state.add_propagator(constructor);
        self.propagate_at_root()
            .map_err(|_| ConstraintOperationError::InfeasiblePropagator)?;

        Ok(propagator_id)
    }

    /// Narrows the root domain of `variable` to `[lower_bound, upper_bound]`.
    pub(crate) fn restrict_root_domain(
        &mut self,
        variable: DomainId,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<(), ConstraintOperationError> {
        if self.is_infeasible {
            return Err(ConstraintOperationError::InfeasibleState);
        }

        let result = self
            .state
            .post(predicate!(variable >= lower_bound))
            .and_then(|_| self.state.post(predicate!(variable <= upper_bound)));
        if result.is_err() {
            return Err(self.declare_infeasible());
        }

        self.propagate_at_root()
            .map_err(|_| ConstraintOperationError::InfeasibleState)
    }

    /// Records that the constraints have no solution.
    pub(crate) fn declare_infeasible(&mut self) -> ConstraintOperationError {
        debug!("the solver is infeasible at the root");
        self.is_infeasible = true;
        ConstraintOperationError::InfeasibleState
    }

    fn propagate_at_root(&mut self) -> Result<(), ConstraintOperationError> {
        if !self.options.propagate_when_posting {
            return Ok(());
        }

        let result = self.state.propagate_to_fixed_point();
        let _ = self.state.take_num_propagator_calls();

        result.map_err(|conflict| {
            debug!(
                "{} failed at the root: {}",
                conflict.propagator_id, conflict.inconsistency
            );
            self.declare_infeasible()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints;
    use crate::termination::Indefinite;
    use crate::termination::NodeBudget;

    #[test]
    fn satisfy_finds_a_solution() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10);
        let y = solver.new_bounded_integer(0, 10);
        solver
            .add_constraint(constraints::linear_equals([3, 5], [x, y], 19))
            .post()
            .expect("feasible");

        let mut brancher = solver.default_brancher(&[x, y]);
        let result = solver.satisfy(&mut brancher, &mut Indefinite);

        let SatisfactionResult::Satisfiable(solution) = result else {
            panic!("expected a solution, got {result:?}");
        };
        assert_eq!(19, 3 * solution.value(x) + 5 * solution.value(y));
    }

    #[test]
    fn the_root_is_not_changed_by_search() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10);
        let y = solver.new_bounded_integer(0, 10);
        solver
            .add_constraint(constraints::linear_equals([1, 1], [x, y], 10))
            .post()
            .expect("feasible");

        let mut brancher = solver.default_brancher(&[x, y]);
        let _ = solver.satisfy(&mut brancher, &mut Indefinite);

        assert_eq!(0, solver.lower_bound(&x));
        assert_eq!(10, solver.upper_bound(&x));
    }

    #[test]
    fn all_solutions_are_enumerated() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10);
        let y = solver.new_bounded_integer(0, 10);
        solver
            .add_constraint(constraints::linear_equals([1, 1], [x, y], 10))
            .post()
            .expect("feasible");

        let mut brancher =
            create_brancher(&[x, y], VariableSelection::InputOrder, ValueSelection::Min);
        let mut solutions = vec![];
        let result =
            solver.enumerate_solutions(&mut brancher, &mut Indefinite, None, |solution| {
                solutions.push((solution.value(x), solution.value(y)))
            });

        assert_eq!(EnumerationResult::Complete { num_solutions: 11 }, result);
        assert_eq!((0..=10).map(|x| (x, 10 - x)).collect::<Vec<_>>(), solutions);
    }

    #[test]
    fn enumeration_stops_at_the_solution_limit() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10);
        let y = solver.new_bounded_integer(0, 10);
        solver
            .add_constraint(constraints::linear_equals([1, 1], [x, y], 10))
            .post()
            .expect("feasible");

        let mut brancher = solver.default_brancher(&[x, y]);
        let result = solver.enumerate_solutions(&mut brancher, &mut Indefinite, Some(3), |_| {});

        assert_eq!(
            EnumerationResult::SolutionLimitReached { num_solutions: 3 },
            result
        );
    }

    #[test]
    fn termination_makes_the_result_unknown() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10);
        let y = solver.new_bounded_integer(0, 10);
        solver
            .add_constraint(constraints::linear_equals([1, 1], [x, y], 10))
            .post()
            .expect("feasible");

        let mut brancher = solver.default_brancher(&[x, y]);
        let result = solver.satisfy(&mut brancher, &mut NodeBudget::new(0));

        assert_eq!(SatisfactionResult::Unknown, result);
    }

    #[test]
    fn root_failure_makes_the_solver_infeasible() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 3);
        let y = solver.new_bounded_integer(0, 3);

        let result = solver
            .add_constraint(constraints::linear_equals([1, 1], [x, y], 7))
            .post();

        assert_eq!(Err(ConstraintOperationError::InfeasiblePropagator), result);
        assert!(solver.is_infeasible());
        assert_eq!(
            Err(ConstraintOperationError::InfeasibleState),
            solver
                .add_constraint(constraints::linear_equals([1], [x], 1))
                .post()
        );

        let mut brancher = solver.default_brancher(&[x, y]);
        assert_eq!(
            SatisfactionResult::Unsatisfiable,
            solver.satisfy(&mut brancher, &mut Indefinite)
        );
    }

    #[test]
    fn without_root_propagation_infeasibility_is_found_by_search() {
        let mut solver = Solver::with_options(SolverOptions {
            propagate_when_posting: false,
        });
        let x = solver.new_bounded_integer(0, 3);
        let y = solver.new_bounded_integer(0, 3);

        solver
            .add_constraint(constraints::linear_equals([1, 1], [x, y], 7))
            .post()
            .expect("not propagated yet");

        let mut brancher = solver.default_brancher(&[x, y]);
        assert_eq!(
            SatisfactionResult::Unsatisfiable,
            solver.satisfy(&mut brancher, &mut Indefinite)
        );
        assert_eq!(1, solver.num_failures());
    }
}
