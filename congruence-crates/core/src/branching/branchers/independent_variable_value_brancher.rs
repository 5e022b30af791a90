//! A [`Brancher`] which simply uses a single [`VariableSelector`] and a single [`ValueSelector`].

use std::marker::PhantomData;

use crate::branching::value_selection::InDomainMedian;
use crate::branching::value_selection::InDomainMin;
use crate::branching::value_selection::ValueSelection;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::InputOrder;
use crate::branching::variable_selection::Smallest;
use crate::branching::variable_selection::VariableSelection;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::predicates::Predicate;
use crate::engine::variables::DomainId;

/// An implementation of a [`Brancher`] which simply uses a single
/// [`VariableSelector`] and a single [`ValueSelector`] independently of one another.
#[derive(Debug, Clone)]
pub struct IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect> {
    /// Determines which (unfixed) variable to branch next on.
    pub(crate) variable_selector: VariableSelect,
    /// Determines which value in the domain to branch next on given a variable.
    pub(crate) value_selector: ValueSelect,
    pub(crate) variable_type: PhantomData<Var>,
}

impl<Var, VariableSelect, ValueSelect>
    IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector<Var>,
    ValueSelect: ValueSelector<Var>,
{
    pub fn new(variable_selector: VariableSelect, value_selector: ValueSelect) -> Self {
        IndependentVariableValueBrancher {
            variable_selector,
            value_selector,
            variable_type: PhantomData,
        }
    }
}

impl<Var, VariableSelect, ValueSelect> Brancher
    for IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector<Var>,
    ValueSelect: ValueSelector<Var>,
{
    fn next_decision(&mut self, context: &SelectionContext) -> Option<Predicate> {
        self.variable_selector
            .select_variable(context)
            .map(|selected_variable| self.value_selector.select_value(context, selected_variable))
    }
}

/// Creates the brancher over `variables` for the given combination of strategies.
pub fn create_brancher(
    variables: &[DomainId],
    variable_selection: VariableSelection,
    value_selection: ValueSelection,
) -> Box<dyn Brancher> {
    match (variable_selection, value_selection) {
        (VariableSelection::InputOrder, ValueSelection::Min) => Box::new(
            IndependentVariableValueBrancher::new(InputOrder::new(variables), InDomainMin),
        ),
        (VariableSelection::InputOrder, ValueSelection::Median) => Box::new(
            IndependentVariableValueBrancher::new(InputOrder::new(variables), InDomainMedian),
        ),
        (VariableSelection::Smallest, ValueSelection::Min) => Box::new(
            IndependentVariableValueBrancher::new(Smallest::new(variables), InDomainMin),
        ),
        (VariableSelection::Smallest, ValueSelection::Median) => Box::new(
            IndependentVariableValueBrancher::new(Smallest::new(variables), InDomainMedian),
        ),
    }
}
