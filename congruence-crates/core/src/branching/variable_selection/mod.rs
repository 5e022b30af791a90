//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement;
//! the main method of this trait is the [`VariableSelector::select_variable`] method.

mod input_order;
mod smallest;

pub use input_order::InputOrder;
pub use smallest::Smallest;

use super::SelectionContext;

/// A trait containing the interface for [`VariableSelector`]s, specifying the appropriate hooks
/// into the solver and the methods required for selecting variables.
pub trait VariableSelector<Var> {
    /// Determines which variable to select next if there are any left to branch on.
    /// Should only return [`None`] when all variables which have been passed to the
    /// [`VariableSelector`] have been assigned. Otherwise it should return the variable to
    /// branch on next.
    fn select_variable(&mut self, context: &SelectionContext) -> Option<Var>;
}

/// The variable selection strategies available from the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableSelection {
    /// Branch on the first unfixed variable in the order the variables were given.
    #[default]
    InputOrder,
    /// Branch on the unfixed variable with the smallest domain.
    Smallest,
}

impl std::fmt::Display for VariableSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableSelection::InputOrder => write!(f, "input-order"),
            VariableSelection::Smallest => write!(f, "smallest"),
        }
    }
}
