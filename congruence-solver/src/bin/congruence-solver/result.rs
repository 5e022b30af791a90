use std::fmt::Display;

use congruence_solver::core::ConstraintOperationError;
use congruence_solver::instance::InstanceParseError;
use thiserror::Error;

pub(crate) type CongruenceSolverResult<T> = Result<T, CongruenceSolverError>;

#[derive(Error, Debug)]
pub(crate) enum CongruenceSolverError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The instance file {path} is invalid, more details: {source}")]
    InvalidInstanceFile {
        path: String,
        source: InstanceParseError,
    },
    #[error("Failed to post an equation, more details: {0}")]
    Constraint(#[from] ConstraintOperationError),
}

impl CongruenceSolverError {
    pub(crate) fn invalid_instance(path: impl Display, source: InstanceParseError) -> Self {
        Self::InvalidInstanceFile {
            path: format!("{path}"),
            source,
        }
    }
}
