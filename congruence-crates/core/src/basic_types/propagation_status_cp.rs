use thiserror::Error;

use crate::engine::EmptyDomain;
use crate::propagators::Congruence;

/// The result of invoking a propagator. The propagation either reaches a [`PropagationOutcome`] or
/// identifies an [`Inconsistency`], in which case the current search node is failed.
pub type PropagationStatusCP = Result<PropagationOutcome, Inconsistency>;

/// How a successful propagation call ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationOutcome {
    /// No further narrowing is currently derivable; the propagator is called again after the next
    /// domain event it subscribed to.
    Fixpoint,
    /// Every variable of the constraint is fixed and the constraint holds. The propagator does not
    /// need to be called again in this branch of the search.
    Solved,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inconsistency {
    EmptyDomain,
    Conflict(PropagatorConflict),
}

impl From<EmptyDomain> for Inconsistency {
    fn from(_: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain
    }
}

impl From<PropagatorConflict> for Inconsistency {
    fn from(conflict: PropagatorConflict) -> Self {
        Inconsistency::Conflict(conflict)
    }
}

impl std::fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inconsistency::EmptyDomain => write!(f, "a domain became empty"),
            Inconsistency::Conflict(conflict) => write!(f, "{conflict}"),
        }
    }
}

/// A conflict stated by a propagator. A propagator that identifies a conflict that is _not_ an
/// empty domain, describes that conflict with this type.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagatorConflict {
    #[error("the right-hand side {rhs} is not a multiple of the coefficient gcd {gcd}")]
    IndivisibleRightHandSide { rhs: i128, gcd: i64 },
    #[error("the congruences {previous} and {derived} have no common solution")]
    IncompatibleCongruences {
        previous: Congruence,
        derived: Congruence,
    },
    #[error("all terms are fixed but the left-hand side {lhs} differs from {rhs}")]
    UnsatisfiedEquation { lhs: i128, rhs: i128 },
}
