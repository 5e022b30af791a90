use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::congruence_assert_simple;
use crate::engine::predicates::Predicate;
use crate::engine::variables::DomainId;
use crate::predicate;

/// [`ValueSelector`] which splits the domain at its median value `m`: the decision is `[x <= m]`.
/// Holes are taken into account, so both halves hold the same number of values (the lower half
/// one more for odd sizes).
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainMedian;

impl ValueSelector<DomainId> for InDomainMedian {
    fn select_value(&mut self, context: &SelectionContext, decision_variable: DomainId) -> Predicate {
        let values = context.domain_values(decision_variable).collect::<Vec<_>>();
        congruence_assert_simple!(
            values.len() > 1,
            "the decision variable {decision_variable} is fixed"
        );

        let median = values[(values.len() - 1) / 2];
        predicate!(decision_variable <= median)
    }
}
