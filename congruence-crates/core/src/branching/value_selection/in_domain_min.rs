use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::engine::predicates::Predicate;
use crate::engine::variables::DomainId;
use crate::predicate;

/// [`ValueSelector`] which chooses to assign the lower bound first: the decision is
/// `[x <= lb(x)]`, and its negation raises the lower bound.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainMin;

impl ValueSelector<DomainId> for InDomainMin {
    fn select_value(&mut self, context: &SelectionContext, decision_variable: DomainId) -> Predicate {
        predicate!(decision_variable <= context.lower_bound(decision_variable))
    }
}
