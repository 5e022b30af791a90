use enumset::EnumSet;

use super::DomainId;
use crate::engine::notifications::DomainEvent;
use crate::engine::notifications::Watchers;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;

/// A trait specifying the required behaviour of an integer variable such as retrieving a
/// lower-bound ([`IntegerVariable::lower_bound`]) or restricting its range
/// ([`IntegerVariable::restrict_range`]).
///
/// All mutating operations fail with [`EmptyDomain`] exactly when the domain would become empty.
pub trait IntegerVariable: Clone + std::fmt::Debug + std::fmt::Display + 'static {
    /// Get the lower bound of the variable.
    fn lower_bound(&self, assignment: &Assignments) -> i32;

    /// Get the upper bound of the variable.
    fn upper_bound(&self, assignment: &Assignments) -> i32;

    /// Determine whether the value is in the domain of this variable.
    fn contains(&self, assignment: &Assignments, value: i32) -> bool;

    fn is_fixed(&self, assignment: &Assignments) -> bool {
        self.lower_bound(assignment) == self.upper_bound(assignment)
    }

    /// Returns the value of the variable if its domain is a single value.
    fn fixed_value(&self, assignment: &Assignments) -> Option<i32> {
        let lower_bound = self.lower_bound(assignment);
        (lower_bound == self.upper_bound(assignment)).then_some(lower_bound)
    }

    /// The number of values between the bounds of the domain, ignoring holes.
    fn size_of_range(&self, assignment: &Assignments) -> u64 {
        (self.upper_bound(assignment) as i64 - self.lower_bound(assignment) as i64 + 1) as u64
    }

    fn set_lower_bound(&self, assignment: &mut Assignments, value: i32)
        -> Result<(), EmptyDomain>;

    fn set_upper_bound(&self, assignment: &mut Assignments, value: i32)
        -> Result<(), EmptyDomain>;

    /// Remove every value outside of `[lower_bound, upper_bound]`.
    fn restrict_range(
        &self,
        assignment: &mut Assignments,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<(), EmptyDomain> {
        if lower_bound > upper_bound {
            return Err(EmptyDomain);
        }
        self.set_lower_bound(assignment, lower_bound)?;
        self.set_upper_bound(assignment, upper_bound)
    }

    /// Fix the variable to `value`.
    fn assign(&self, assignment: &mut Assignments, value: i32) -> Result<(), EmptyDomain> {
        if !self.contains(assignment, value) {
            return Err(EmptyDomain);
        }
        self.restrict_range(assignment, value, value)
    }

    fn remove(&self, assignment: &mut Assignments, value: i32) -> Result<(), EmptyDomain>;

    /// Register a watch for this variable on the given domain events.
    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<DomainEvent>);
}

impl IntegerVariable for DomainId {
    fn lower_bound(&self, assignment: &Assignments) -> i32 {
        assignment.get_lower_bound(*self)
    }

    fn upper_bound(&self, assignment: &Assignments) -> i32 {
        assignment.get_upper_bound(*self)
    }

    fn contains(&self, assignment: &Assignments, value: i32) -> bool {
        assignment.is_value_in_domain(*self, value)
    }

    fn set_lower_bound(
        &self,
        assignment: &mut Assignments,
        value: i32,
    ) -> Result<(), EmptyDomain> {
        assignment.tighten_lower_bound(*self, value)
    }

    fn set_upper_bound(
        &self,
        assignment: &mut Assignments,
        value: i32,
    ) -> Result<(), EmptyDomain> {
        assignment.tighten_upper_bound(*self, value)
    }

    fn remove(&self, assignment: &mut Assignments, value: i32) -> Result<(), EmptyDomain> {
        assignment.remove_value_from_domain(*self, value)
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<DomainEvent>) {
        watchers.watch_all(*self, events);
    }
}
