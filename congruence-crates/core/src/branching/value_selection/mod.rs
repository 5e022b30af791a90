//! Provides the [`ValueSelector`] trait which is required for value selectors to implement; the
//! main method of this trait is the [`ValueSelector::select_value`] method.

mod in_domain_median;
mod in_domain_min;

pub use in_domain_median::InDomainMedian;
pub use in_domain_min::InDomainMin;

use super::SelectionContext;
use crate::engine::predicates::Predicate;

/// A trait containing the interface for [`ValueSelector`]s, specifying the appropriate hooks into
/// the solver and the methods required for selecting a value for a given variable.
pub trait ValueSelector<Var> {
    /// Determines which value to select for the given `decision_variable`, which is unfixed.
    /// The returned [`Predicate`] and its negation both have to remove at least one value from
    /// the domain.
    fn select_value(&mut self, context: &SelectionContext, decision_variable: Var) -> Predicate;
}

/// The value selection strategies available from the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValueSelection {
    /// Branch on `x <= min(D(x))` first.
    Min,
    /// Split the domain at its median value.
    #[default]
    Median,
}

impl std::fmt::Display for ValueSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSelection::Min => write!(f, "min"),
            ValueSelection::Median => write!(f, "median"),
        }
    }
}
