use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    #[error("The coefficient array has length {coefficients} but the variable array has length {variables}")]
    ArgumentSizeMismatch {
        coefficients: usize,
        variables: usize,
    },
    #[error("Adding constraint failed because the solver is in an infeasible state")]
    InfeasibleState,
    #[error("Adding the propagator failed because it is infeasible at the root")]
    InfeasiblePropagator,
}
