//! Contains structures and traits to define the decision making procedure of the [`Solver`].
//!
//! In general, it provides 3 traits:
//! - The [`Brancher`] which defines how a branching procedure (which selects an unfixed variable
//!   and splits the domain in some way) should operate; the main method of this trait is the
//!   [`Brancher::next_decision`] method. An example implementation of this trait is the
//!   [`IndependentVariableValueBrancher`].
//! - The [`VariableSelector`] which defines the method required of a variable selector; the main
//!   method of this trait is the [`VariableSelector::select_variable`] method.
//! - The [`ValueSelector`] which defines the method required of a value selector; the main method
//!   of this trait is the [`ValueSelector::select_value`] method.
//!
//! Every decision is a [`Predicate`](crate::predicates::Predicate) `d`; the search explores the
//! node under `d` first and under `!d` afterwards.

mod brancher;
pub mod branchers;
mod selection_context;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use selection_context::SelectionContext;

#[cfg(doc)]
use crate::branching::branchers::IndependentVariableValueBrancher;
#[cfg(doc)]
use crate::branching::value_selection::ValueSelector;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;
#[cfg(doc)]
use crate::Solver;
