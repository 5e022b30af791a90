//! This module exposes helpers that aid testing of propagators. The [`TestSolver`] allows setting
//! up specific scenarios under which to test the various operations of a propagator.
use super::predicates::Predicate;
use super::variables::DomainId;
use super::EmptyDomain;
use super::State;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;
use crate::predicate;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorId;

/// A container for CP variables, which can be used to test propagators.
#[derive(Clone, Debug, Default)]
pub(crate) struct TestSolver {
    pub(crate) state: State,
}

impl TestSolver {
    pub(crate) fn new_variable(&mut self, lb: i32, ub: i32) -> DomainId {
        self.state.new_variable(lb, ub)
    }

    /// Adds the propagator without calling it.
    pub(crate) fn new_propagator<Constructor>(&mut self, constructor: Constructor) -> PropagatorId
    where
        Constructor: PropagatorConstructor,
        Constructor::PropagatorImpl: 'static,
    {
        self.state.add_propagator(constructor)
    }

    /// Calls the propagator exactly once.
    pub(crate) fn propagate(&mut self, propagator_id: PropagatorId) -> PropagationStatusCP {
        self.state.propagate_once(propagator_id)
    }

    pub(crate) fn propagate_until_fixed_point(&mut self) -> Result<(), Inconsistency> {
        self.state
            .propagate_to_fixed_point()
            .map_err(|conflict| conflict.inconsistency)
    }

    pub(crate) fn post(&mut self, predicate: Predicate) -> Result<(), EmptyDomain> {
        self.state.post(predicate)
    }

    pub(crate) fn assign(&mut self, var: DomainId, value: i32) -> Result<(), EmptyDomain> {
        self.post(predicate!(var == value))
    }

    pub(crate) fn lower_bound(&self, var: DomainId) -> i32 {
        self.state.lower_bound(&var)
    }

    pub(crate) fn upper_bound(&self, var: DomainId) -> i32 {
        self.state.upper_bound(&var)
    }

    pub(crate) fn contains(&self, var: DomainId, value: i32) -> bool {
        self.state.contains(&var, value)
    }

    pub(crate) fn assert_bounds(&self, var: DomainId, lb: i32, ub: i32) {
        let actual_lb = self.lower_bound(var);
        let actual_ub = self.upper_bound(var);

        assert_eq!(
            (lb, ub), (actual_lb, actual_ub),
            "The expected bounds [{lb}..{ub}] did not match the actual bounds [{actual_lb}..{actual_ub}]"
        );
    }

    pub(crate) fn propagator<P: Propagator>(&self, propagator_id: PropagatorId) -> &P {
        self.state
            .get_propagator::<P>(propagator_id)
            .expect("the propagator has the requested type")
    }

    pub(crate) fn propagator_mut<P: Propagator>(&mut self, propagator_id: PropagatorId) -> &mut P {
        self.state
            .get_propagator_mut::<P>(propagator_id)
            .expect("the propagator has the requested type")
    }
}
