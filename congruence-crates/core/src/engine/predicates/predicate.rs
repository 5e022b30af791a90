use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;

/// Representation of a domain operation in the form of atomic constraints over [`DomainId`]s.
#[derive(Clone, PartialEq, Eq, Copy, Hash)]
pub enum Predicate {
    LowerBound {
        domain_id: DomainId,
        lower_bound: i32,
    },
    UpperBound {
        domain_id: DomainId,
        upper_bound: i32,
    },
    NotEqual {
        domain_id: DomainId,
        not_equal_constant: i32,
    },
    Equal {
        domain_id: DomainId,
        equality_constant: i32,
    },
}

impl Predicate {
    /// Returns the [`DomainId`] of the [`Predicate`]
    pub fn get_domain(&self) -> DomainId {
        match *self {
            Predicate::LowerBound { domain_id, .. }
            | Predicate::UpperBound { domain_id, .. }
            | Predicate::NotEqual { domain_id, .. }
            | Predicate::Equal { domain_id, .. } => domain_id,
        }
    }

    /// Whether the predicate holds in every value of the current domain.
    pub fn is_satisfied(&self, assignments: &Assignments) -> bool {
        let domain_id = self.get_domain();
        match *self {
            Predicate::LowerBound { lower_bound, .. } => {
                domain_id.lower_bound(assignments) >= lower_bound
            }
            Predicate::UpperBound { upper_bound, .. } => {
                domain_id.upper_bound(assignments) <= upper_bound
            }
            Predicate::NotEqual {
                not_equal_constant, ..
            } => !domain_id.contains(assignments, not_equal_constant),
            Predicate::Equal {
                equality_constant, ..
            } => domain_id.fixed_value(assignments) == Some(equality_constant),
        }
    }

    /// Narrow the domain so that the predicate holds.
    pub(crate) fn apply(&self, assignments: &mut Assignments) -> Result<(), EmptyDomain> {
        let domain_id = self.get_domain();
        match *self {
            Predicate::LowerBound { lower_bound, .. } => {
                domain_id.set_lower_bound(assignments, lower_bound)
            }
            Predicate::UpperBound { upper_bound, .. } => {
                domain_id.set_upper_bound(assignments, upper_bound)
            }
            Predicate::NotEqual {
                not_equal_constant, ..
            } => domain_id.remove(assignments, not_equal_constant),
            Predicate::Equal {
                equality_constant, ..
            } => domain_id.assign(assignments, equality_constant),
        }
    }
}

impl std::ops::Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Self::Output {
        match self {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => Predicate::UpperBound {
                domain_id,
                upper_bound: lower_bound - 1,
            },
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => Predicate::LowerBound {
                domain_id,
                lower_bound: upper_bound + 1,
            },
            Predicate::NotEqual {
                domain_id,
                not_equal_constant,
            } => Predicate::Equal {
                domain_id,
                equality_constant: not_equal_constant,
            },
            Predicate::Equal {
                domain_id,
                equality_constant,
            } => Predicate::NotEqual {
                domain_id,
                not_equal_constant: equality_constant,
            },
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => write!(f, "[{domain_id} >= {lower_bound}]"),
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => write!(f, "[{domain_id} <= {upper_bound}]"),
            Predicate::NotEqual {
                domain_id,
                not_equal_constant,
            } => write!(f, "[{domain_id} != {not_equal_constant}]"),
            Predicate::Equal {
                domain_id,
                equality_constant,
            } => write!(f, "[{domain_id} == {equality_constant}]"),
        }
    }
}

impl std::fmt::Debug for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
