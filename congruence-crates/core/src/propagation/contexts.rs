use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;

/// Read-only access to the domains, used to inspect a [`State`](crate::State) in tests.
#[cfg(test)]
#[derive(Clone, Copy, Debug)]
pub(crate) struct PropagationContext<'a> {
    assignments: &'a Assignments,
}

#[cfg(test)]
impl<'a> PropagationContext<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> Self {
        PropagationContext { assignments }
    }
}

/// Provided to [`Propagator::propagate`](crate::propagation::Propagator::propagate). Domains can be
/// read through the implementation of [`ReadDomains`], and narrowed through the mutating methods.
/// Every mutation fails with [`EmptyDomain`] exactly when it would wipe out the domain.
#[derive(Debug)]
pub struct PropagationContextMut<'a> {
    assignments: &'a mut Assignments,
}

impl<'a> PropagationContextMut<'a> {
    pub(crate) fn new(assignments: &'a mut Assignments) -> Self {
        PropagationContextMut { assignments }
    }

    pub fn set_lower_bound<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        var.set_lower_bound(self.assignments, bound)
    }

    pub fn set_upper_bound<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        var.set_upper_bound(self.assignments, bound)
    }

    /// Narrow the domain of `var` to `[lower_bound, upper_bound]`.
    pub fn restrict_range<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<(), EmptyDomain> {
        var.restrict_range(self.assignments, lower_bound, upper_bound)
    }

    pub fn assign<Var: IntegerVariable>(&mut self, var: &Var, value: i32) -> Result<(), EmptyDomain> {
        var.assign(self.assignments, value)
    }

    pub fn remove<Var: IntegerVariable>(&mut self, var: &Var, value: i32) -> Result<(), EmptyDomain> {
        var.remove(self.assignments, value)
    }
}

mod private {
    use super::*;
    use crate::propagation::PropagatorConstructorContext;

    pub trait HasAssignments {
        fn assignments(&self) -> &Assignments;
    }

    #[cfg(test)]
    impl HasAssignments for PropagationContext<'_> {
        fn assignments(&self) -> &Assignments {
            self.assignments
        }
    }

    impl HasAssignments for PropagationContextMut<'_> {
        fn assignments(&self) -> &Assignments {
            self.assignments
        }
    }

    impl HasAssignments for PropagatorConstructorContext<'_> {
        fn assignments(&self) -> &Assignments {
            self.assignments
        }
    }
}

/// Read access to the domains of the variables.
pub trait ReadDomains: private::HasAssignments {
    /// Returns `true` if the domain of the given variable is singleton.
    fn is_fixed<Var: IntegerVariable>(&self, var: &Var) -> bool {
        var.is_fixed(self.assignments())
    }

    fn fixed_value<Var: IntegerVariable>(&self, var: &Var) -> Option<i32> {
        var.fixed_value(self.assignments())
    }

    fn lower_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.lower_bound(self.assignments())
    }

    fn upper_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.upper_bound(self.assignments())
    }

    fn contains<Var: IntegerVariable>(&self, var: &Var, value: i32) -> bool {
        var.contains(self.assignments(), value)
    }
}

impl<T: private::HasAssignments> ReadDomains for T {}
