//! The instances solved by the `congruence-solver` binary.
//!
//! An instance is a group of equations over the same variables, where every variable ranges
//! over the same domain bounds. Instances are read in batches with [`parse_instances`]; see
//! that function for the file format.
mod parser;

pub use parser::*;

use congruence_core::constraints;
use congruence_core::options::ModuloOptions;
use congruence_core::variables::DomainId;
use congruence_core::ConstraintOperationError;
use congruence_core::Solver;
use log::debug;

/// One equation `Σ coefficients_i · x_i = rhs`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    pub coefficients: Vec<i32>,
    pub rhs: i32,
}

/// Which propagators enforce the equations of an instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PropagationMode {
    /// Bounds consistency on the linear equations only.
    Linear,
    /// Bounds consistency together with the modular congruences implied by every equation.
    #[default]
    Modulo,
}

impl std::fmt::Display for PropagationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagationMode::Linear => write!(f, "linear"),
            PropagationMode::Modulo => write!(f, "modulo"),
        }
    }
}

/// A group of equations over shared variables `x_0, …, x_{n-1}`, each with domain
/// `domain_bounds`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceConfiguration {
    /// The position of the instance in its batch, starting at 0.
    pub instance_id: usize,
    pub domain_bounds: (i32, i32),
    /// Every equation has the same number of coefficients.
    pub equations: Vec<Equation>,
}

impl InstanceConfiguration {
    /// The number of variables of the instance.
    pub fn num_variables(&self) -> usize {
        self.equations
            .first()
            .map(|equation| equation.coefficients.len())
            .unwrap_or(0)
    }

    /// Creates the variables of the instance in `solver` and posts every equation over them.
    ///
    /// Returns the variables in the order of the coefficients. Fails when posting an equation
    /// makes the root infeasible.
    pub fn build(
        &self,
        solver: &mut Solver,
        mode: PropagationMode,
        options: ModuloOptions,
    ) -> Result<Vec<DomainId>, ConstraintOperationError> {
        let (lower_bound, upper_bound) = self.domain_bounds;
        let variables = (0..self.num_variables())
            .map(|_| solver.new_bounded_integer(lower_bound, upper_bound))
            .collect::<Vec<_>>();

        for equation in &self.equations {
            debug!(
                "posting {:?} = {} with {mode} propagation",
                equation.coefficients, equation.rhs
            );

            let coefficients = equation.coefficients.clone();
            match mode {
                PropagationMode::Linear => solver
                    .add_constraint(constraints::linear_equals(
                        coefficients,
                        variables.clone(),
                        equation.rhs,
                    ))
                    .post()?,
                PropagationMode::Modulo => solver
                    .add_constraint(constraints::modulo_equals(
                        coefficients,
                        variables.clone(),
                        equation.rhs,
                        options,
                    ))
                    .post()?,
            }
        }

        Ok(variables)
    }
}

#[cfg(test)]
mod tests {
    use congruence_core::results::EnumerationResult;
    use congruence_core::termination::Indefinite;

    use super::*;

    fn instance(domain_bounds: (i32, i32), equations: &[(&[i32], i32)]) -> InstanceConfiguration {
        InstanceConfiguration {
            instance_id: 0,
            domain_bounds,
            equations: equations
                .iter()
                .map(|(coefficients, rhs)| Equation {
                    coefficients: coefficients.to_vec(),
                    rhs: *rhs,
                })
                .collect(),
        }
    }

    #[test]
    fn variables_are_shared_between_equations() {
        // x - y = 10 forces x = 10 and y = 0, which also satisfies x + y = 10.
        let instance = instance((0, 10), &[(&[1, 1], 10), (&[1, -1], 10)]);
        let mut solver = Solver::default();

        let variables = instance
            .build(&mut solver, PropagationMode::Modulo, ModuloOptions::default())
            .expect("feasible");

        assert_eq!(2, variables.len());
        assert_eq!(10, solver.lower_bound(&variables[0]));
        assert_eq!(0, solver.upper_bound(&variables[1]));
    }

    #[test]
    fn indivisible_instance_fails_only_with_modulo_propagation() {
        let instance = instance((0, 5), &[(&[3, 6, 9, 12], 100)]);

        let mut modulo_solver = Solver::default();
        let modulo_result = instance.build(
            &mut modulo_solver,
            PropagationMode::Modulo,
            ModuloOptions::default(),
        );
        assert_eq!(
            Err(ConstraintOperationError::InfeasiblePropagator),
            modulo_result
        );

        let mut linear_solver = Solver::default();
        let variables = instance
            .build(
                &mut linear_solver,
                PropagationMode::Linear,
                ModuloOptions::default(),
            )
            .expect("bounds propagation does not detect the infeasibility");
        let mut brancher = linear_solver.default_brancher(&variables);
        let result =
            linear_solver.enumerate_solutions(&mut brancher, &mut Indefinite, None, |_| {});
        assert_eq!(EnumerationResult::Complete { num_solutions: 0 }, result);
    }

    #[test]
    fn empty_instance_has_no_variables() {
        let instance = instance((0, 10), &[]);
        let mut solver = Solver::default();

        let variables = instance
            .build(&mut solver, PropagationMode::Modulo, ModuloOptions::default())
            .expect("nothing is posted");

        assert!(variables.is_empty());
    }
}
