use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;

/// The context provided to the [`Brancher`](crate::branching::Brancher): read-only access to the
/// domains of the node which is being branched on.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    assignments: &'a Assignments,
}

impl<'a> SelectionContext<'a> {
    pub fn new(assignments: &'a Assignments) -> Self {
        SelectionContext { assignments }
    }

    pub fn lower_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.lower_bound(self.assignments)
    }

    pub fn upper_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.upper_bound(self.assignments)
    }

    pub fn contains<Var: IntegerVariable>(&self, var: Var, value: i32) -> bool {
        var.contains(self.assignments, value)
    }

    pub fn is_integer_fixed<Var: IntegerVariable>(&self, var: Var) -> bool {
        var.is_fixed(self.assignments)
    }

    /// The number of values between the bounds, ignoring holes.
    pub fn get_size_of_domain<Var: IntegerVariable>(&self, var: Var) -> u64 {
        var.size_of_range(self.assignments)
    }

    /// The values in the domain, in increasing order.
    pub fn domain_values<Var: IntegerVariable>(&self, var: Var) -> impl Iterator<Item = i32> + 'a {
        let lower_bound = var.lower_bound(self.assignments);
        let upper_bound = var.upper_bound(self.assignments);
        let assignments = self.assignments;
        (lower_bound..=upper_bound).filter(move |&value| var.contains(assignments, value))
    }
}
