use super::Congruence;
use crate::congruence_assert_simple;
use crate::engine::variables::IntegerVariable;
use crate::propagation::ReadDomains;

/// One `a·x` of the equation, with the congruence derived for `x` in earlier calls.
#[derive(Clone, Debug)]
pub(crate) struct Term<Var> {
    /// Zero once the term has been retired; it then stays zero.
    pub(crate) coefficient: i64,
    pub(crate) variable: Var,
    /// The index of the term in the term set.
    pub(crate) position: usize,
    pub(crate) memory: Congruence,
}

impl<Var> Term<Var> {
    pub(crate) fn is_retired(&self) -> bool {
        self.coefficient == 0
    }
}

/// The terms of `Σ aᵢ·xᵢ = c` and the right-hand side that remains after moving the terms of
/// assigned variables to it.
#[derive(Clone, Debug)]
pub(crate) struct TermSet<Var> {
    terms: Box<[Term<Var>]>,
    /// The constant `c` the set was created with.
    constant: i128,
    /// `c` minus the contribution of every retired term. Every retired term moves up to `2^62` to
    /// it, which an `i64` does not hold after two terms.
    rhs: i128,
}

impl<Var: IntegerVariable> TermSet<Var> {
    /// Creates the term set; terms with a zero coefficient are left out.
    pub(crate) fn new(terms: &[(i32, Var)], constant: i32) -> Self {
        let terms = terms
            .iter()
            .filter(|(coefficient, _)| *coefficient != 0)
            .enumerate()
            .map(|(position, (coefficient, variable))| Term {
                coefficient: *coefficient as i64,
                variable: variable.clone(),
                position,
                memory: Congruence::UNCONSTRAINED,
            })
            .collect();

        TermSet {
            terms,
            constant: constant as i128,
            rhs: constant as i128,
        }
    }

    pub(crate) fn terms(&self) -> &[Term<Var>] {
        &self.terms
    }

    pub(crate) fn rhs(&self) -> i128 {
        self.rhs
    }

    pub(crate) fn constant(&self) -> i128 {
        self.constant
    }

    pub(crate) fn remember(&mut self, position: usize, congruence: Congruence) {
        crate::congruence_assert_eq_simple!(self.terms[position].position, position);
        self.terms[position].memory = congruence;
    }

    /// Moves `a·value` to the right-hand side for every unretired term whose variable is
    /// assigned, and retires that term. Returns the number of retired terms.
    pub(crate) fn retire_assigned_terms(&mut self, context: &impl ReadDomains) -> usize {
        let mut num_retired = 0;

        for term in self.terms.iter_mut().filter(|term| !term.is_retired()) {
            if let Some(value) = context.fixed_value(&term.variable) {
                self.rhs -= term.coefficient as i128 * value as i128;
                term.coefficient = 0;
                num_retired += 1;
            }
        }

        num_retired
    }

    /// The unretired terms.
    pub(crate) fn active_terms(&self) -> impl Iterator<Item = &Term<Var>> + '_ {
        self.terms.iter().filter(|term| !term.is_retired())
    }

    /// `c - Σ aᵢ·xᵢ` over all terms, if every variable is fixed.
    pub(crate) fn residual_when_fixed(&self, context: &impl ReadDomains) -> Option<i128> {
        self.active_terms().try_fold(self.rhs, |residual, term| {
            congruence_assert_simple!(term.coefficient != 0);
            context
                .fixed_value(&term.variable)
                .map(|value| residual - term.coefficient as i128 * value as i128)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_solver::TestSolver;
    use crate::propagation::PropagationContext;

    #[test]
    fn zero_coefficients_are_dropped() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 5);
        let y = solver.new_variable(0, 5);
        let z = solver.new_variable(0, 5);

        let term_set = TermSet::new(&[(2, x), (0, y), (-3, z)], 7);

        let positions = term_set
            .terms()
            .iter()
            .map(|term| (term.position, term.coefficient, term.variable))
            .collect::<Vec<_>>();
        assert_eq!(vec![(0, 2, x), (1, -3, z)], positions);
    }

    #[test]
    fn assigned_terms_are_moved_to_the_right_hand_side() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(4, 4);
        let y = solver.new_variable(0, 5);
        let z = solver.new_variable(-1, -1);

        let mut term_set = TermSet::new(&[(2, x), (5, y), (3, z)], 20);
        let context = PropagationContext::new(solver.state.assignments());

        assert_eq!(2, term_set.retire_assigned_terms(&context));
        assert_eq!(20 - 8 + 3, term_set.rhs());
        assert_eq!(1, term_set.active_terms().count());

        // Retired terms are never folded in twice.
        assert_eq!(0, term_set.retire_assigned_terms(&context));
        assert_eq!(15, term_set.rhs());
    }

    #[test]
    fn residual_is_only_defined_when_everything_is_fixed() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 1);
        let y = solver.new_variable(0, 5);

        let term_set = TermSet::new(&[(2, x), (3, y)], 8);
        let context = PropagationContext::new(solver.state.assignments());
        assert_eq!(None, term_set.residual_when_fixed(&context));

        solver.assign(y, 2).expect("2 is in the domain");
        let context = PropagationContext::new(solver.state.assignments());
        assert_eq!(Some(0), term_set.residual_when_fixed(&context));
    }

    #[test]
    fn extreme_terms_move_to_the_right_hand_side_exactly() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(i32::MIN, i32::MIN);
        let y = solver.new_variable(i32::MIN, i32::MIN);
        let z = solver.new_variable(0, 1);

        let mut term_set = TermSet::new(&[(i32::MIN, x), (i32::MIN, y), (1, z)], -1);
        let context = PropagationContext::new(solver.state.assignments());

        assert_eq!(2, term_set.retire_assigned_terms(&context));
        assert_eq!(-1 - (1_i128 << 63), term_set.rhs());

        solver.assign(z, 1).expect("1 is in the domain");
        let context = PropagationContext::new(solver.state.assignments());
        assert_eq!(Some(-2 - (1_i128 << 63)), term_set.residual_when_fixed(&context));
    }
}
