use super::SelectionContext;
use crate::engine::predicates::Predicate;

/// A trait for definining a branching strategy (oftentimes utilising a
/// [`VariableSelector`](crate::branching::variable_selection::VariableSelector) and a
/// [`ValueSelector`](crate::branching::value_selection::ValueSelector)).
pub trait Brancher {
    /// Returns the next decision concerning a single variable and value; it returns the
    /// [`Predicate`] corresponding to this decision (or [`None`] if all variables under
    /// consideration are assigned).
    ///
    /// The returned predicate must not hold in the current domains, and neither may its negation.
    fn next_decision(&mut self, context: &SelectionContext) -> Option<Predicate>;
}

impl<B: Brancher + ?Sized> Brancher for Box<B> {
    fn next_decision(&mut self, context: &SelectionContext) -> Option<Predicate> {
        self.as_mut().next_decision(context)
    }
}
