use log::warn;

use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;

/// A [`VariableSelector`] which selects the unfixed variable with the smallest domain (based on
/// the lower-bound and upper-bound, disregarding holes). Ties are broken by the order in which the
/// variables were provided.
#[derive(Debug, Clone)]
pub struct Smallest {
    variables: Vec<DomainId>,
}

impl Smallest {
    pub fn new(variables: &[DomainId]) -> Self {
        if variables.is_empty() {
            warn!("The Smallest variable selector was not provided with any variables");
        }
        Smallest {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector<DomainId> for Smallest {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<DomainId> {
        self.variables
            .iter()
            .filter(|variable| !context.is_integer_fixed(**variable))
            .min_by_key(|variable| context.get_size_of_domain(**variable))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Assignments;

    #[test]
    fn the_smallest_domain_is_selected() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);
        let y = assignments.grow(0, 4);
        let z = assignments.grow(2, 2);

        let mut strategy = Smallest::new(&[x, y, z]);
        let context = SelectionContext::new(&assignments);

        assert_eq!(Some(y), strategy.select_variable(&context));
    }

    #[test]
    fn ties_are_broken_by_input_order() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 4);
        let y = assignments.grow(5, 9);

        let mut strategy = Smallest::new(&[y, x]);
        let context = SelectionContext::new(&assignments);

        assert_eq!(Some(y), strategy.select_variable(&context));
    }
}
