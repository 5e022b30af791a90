use log::debug;

use super::Constraint;
use crate::engine::variables::DomainId;
use crate::math::num_ext::NumExt;
use crate::options::ModuloOptions;
use crate::propagators::LinearEqualPropagatorArgs;
use crate::propagators::ModuloPropagatorArgs;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the [`Constraint`] `Σ coefficients_i · variables_i = rhs`, enforced with bounds
/// consistency.
pub fn linear_equals(
    coefficients: impl Into<Box<[i32]>>,
    variables: impl Into<Box<[DomainId]>>,
    rhs: i32,
) -> impl Constraint {
    LinearEqualConstraint {
        coefficients: coefficients.into(),
        variables: variables.into(),
        rhs,
    }
}

/// Creates the [`Constraint`] `Σ coefficients_i · variables_i = rhs`, enforced with bounds
/// consistency together with the congruences that the equation implies for every variable.
///
/// See [`ModuloOptions`] for the ways in which the congruences can be applied.
pub fn modulo_equals(
    coefficients: impl Into<Box<[i32]>>,
    variables: impl Into<Box<[DomainId]>>,
    rhs: i32,
    options: ModuloOptions,
) -> impl Constraint {
    ModuloEqualConstraint {
        coefficients: coefficients.into(),
        variables: variables.into(),
        rhs,
        options,
    }
}

struct LinearEqualConstraint {
    coefficients: Box<[i32]>,
    variables: Box<[DomainId]>,
    rhs: i32,
}

impl Constraint for LinearEqualConstraint {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        let Some(terms) = collect_terms(&self.coefficients, &self.variables, self.rhs, solver)?
        else {
            return Ok(());
        };

        LinearEqualPropagatorArgs {
            terms,
            rhs: self.rhs,
        }
        .post(solver)
    }
}

struct ModuloEqualConstraint {
    coefficients: Box<[i32]>,
    variables: Box<[DomainId]>,
    rhs: i32,
    options: ModuloOptions,
}

impl Constraint for ModuloEqualConstraint {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        let Some(terms) = collect_terms(&self.coefficients, &self.variables, self.rhs, solver)?
        else {
            return Ok(());
        };

        if self.options.limit_domains {
            limit_domains(&terms, self.rhs, solver)?;
        }

        // The congruences do not enforce the equation on their own.
        LinearEqualPropagatorArgs {
            terms: terms.clone(),
            rhs: self.rhs,
        }
        .post(solver)?;

        ModuloPropagatorArgs {
            terms,
            rhs: self.rhs,
            options: self.options,
        }
        .post(solver)
    }
}

/// Pairs the coefficients with the variables. Returns [`None`] for the equation `0 = 0`, which
/// needs no propagator.
fn collect_terms(
    coefficients: &[i32],
    variables: &[DomainId],
    rhs: i32,
    solver: &mut Solver,
) -> Result<Option<Box<[(i32, DomainId)]>>, ConstraintOperationError> {
    if coefficients.len() != variables.len() {
        return Err(ConstraintOperationError::ArgumentSizeMismatch {
            coefficients: coefficients.len(),
            variables: variables.len(),
        });
    }

    if coefficients.iter().all(|&coefficient| coefficient == 0) {
        return if rhs == 0 {
            Ok(None)
        } else {
            debug!("the equation 0 = {rhs} has no solution");
            Err(solver.declare_infeasible())
        };
    }

    Ok(Some(
        coefficients
            .iter()
            .copied()
            .zip(variables.iter().copied())
            .collect(),
    ))
}

/// Bounds every variable by `rhs / a_i` when no term can be negative.
fn limit_domains(
    terms: &[(i32, DomainId)],
    rhs: i32,
    solver: &mut Solver,
) -> Result<(), ConstraintOperationError> {
    let no_negative_terms = terms
        .iter()
        .all(|(coefficient, variable)| *coefficient >= 0 && solver.lower_bound(variable) >= 0);
    if !no_negative_terms {
        return Ok(());
    }

    for (coefficient, variable) in terms.iter().filter(|(coefficient, _)| *coefficient > 0) {
        let upper_bound = <i64 as NumExt>::div_floor(rhs as i64, *coefficient as i64)
            .min(solver.upper_bound(variable) as i64);
        // At most the current upper bound, and at least -|rhs|.
        let upper_bound = upper_bound as i32;

        solver.restrict_root_domain(*variable, solver.lower_bound(variable), upper_bound)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SolverOptions;

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10);

        let result = solver
            .add_constraint(modulo_equals([1, 2], [x], 4, ModuloOptions::default()))
            .post();

        assert_eq!(
            Err(ConstraintOperationError::ArgumentSizeMismatch {
                coefficients: 2,
                variables: 1
            }),
            result
        );
        assert!(!solver.is_infeasible());
    }

    #[test]
    fn zero_equal_to_non_zero_is_infeasible() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10);

        let result = solver
            .add_constraint(modulo_equals([0], [x], 4, ModuloOptions::default()))
            .post();

        assert_eq!(Err(ConstraintOperationError::InfeasibleState), result);
        assert!(solver.is_infeasible());
    }

    #[test]
    fn zero_equal_to_zero_is_trivially_satisfied() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10);

        let result = solver
            .add_constraint(modulo_equals([0], [x], 0, ModuloOptions::default()))
            .post();

        assert_eq!(Ok(()), result);
        assert!(!solver.is_infeasible());
        assert_eq!(0, solver.lower_bound(&x));
        assert_eq!(10, solver.upper_bound(&x));
    }

    #[test]
    fn indivisible_right_hand_side_is_infeasible_at_the_root() {
        let mut solver = Solver::default();
        let x: Vec<DomainId> = (0..4).map(|_| solver.new_bounded_integer(0, 100)).collect();

        let result = solver
            .add_constraint(modulo_equals(
                [3, 6, 9, 12],
                x.clone(),
                2035,
                ModuloOptions::default(),
            ))
            .post();

        assert_eq!(Err(ConstraintOperationError::InfeasiblePropagator), result);
    }

    #[test]
    fn linear_equals_misses_the_indivisible_right_hand_side() {
        let mut solver = Solver::default();
        let x: Vec<DomainId> = (0..4).map(|_| solver.new_bounded_integer(0, 100)).collect();

        let result = solver
            .add_constraint(linear_equals([3, 6, 9, 12], x.clone(), 2035))
            .post();

        assert_eq!(Ok(()), result);
    }

    #[test]
    fn congruences_are_applied_at_the_root() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10);
        let y = solver.new_bounded_integer(0, 10);

        solver
            .add_constraint(modulo_equals([2, 4], [x, y], 10, ModuloOptions::default()))
            .post()
            .expect("feasible");

        // x is odd.
        assert_eq!(1, solver.lower_bound(&x));
        assert_eq!(5, solver.upper_bound(&x));
    }

    #[test]
    fn domains_are_limited_by_the_right_hand_side() {
        let mut solver = Solver::with_options(SolverOptions {
            propagate_when_posting: false,
        });
        let x = solver.new_bounded_integer(0, 100);
        let y = solver.new_bounded_integer(0, 100);
        let options = ModuloOptions {
            limit_domains: true,
            ..Default::default()
        };

        solver
            .add_constraint(modulo_equals([3, 5], [x, y], 14, options))
            .post()
            .expect("feasible");

        assert_eq!(4, solver.upper_bound(&x));
        assert_eq!(2, solver.upper_bound(&y));
    }

    #[test]
    fn domains_are_not_limited_with_negative_terms() {
        let mut solver = Solver::with_options(SolverOptions {
            propagate_when_posting: false,
        });
        let x = solver.new_bounded_integer(0, 100);
        let y = solver.new_bounded_integer(-5, 100);
        let options = ModuloOptions {
            limit_domains: true,
            ..Default::default()
        };

        solver
            .add_constraint(modulo_equals([3, 5], [x, y], 14, options))
            .post()
            .expect("feasible");

        assert_eq!(100, solver.upper_bound(&x));
        assert_eq!(100, solver.upper_bound(&y));
    }
}
