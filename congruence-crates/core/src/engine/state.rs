use log::trace;

use super::notifications::WatchListCP;
use super::predicates::Predicate;
use super::propagator_queue::PropagatorQueue;
use super::variables::DomainId;
use super::variables::IntegerVariable;
use super::Assignments;
use super::EmptyDomain;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationOutcome;
use crate::basic_types::Solution;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::propagation::PropagationContextMut;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::PropagatorId;

/// The complete state of one node of the search: the domains, the propagators together with the
/// data they keep between calls, and the bookkeeping to schedule them.
///
/// Branching is done by cloning the [`State`]; every clone evolves independently of the other
/// copies, including the internal data of its propagators.
#[derive(Clone, Debug, Default)]
pub struct State {
    pub(crate) assignments: Assignments,
    propagators: KeyedVec<PropagatorId, Box<dyn Propagator>>,
    /// Propagators which reported [`PropagationOutcome::Solved`] are never scheduled again.
    is_subsumed: KeyedVec<PropagatorId, bool>,
    watch_list: WatchListCP,
    propagator_queue: PropagatorQueue,
    /// Calls to [`Propagator::propagate`] since the counter was last taken.
    num_propagator_calls: u64,
}

/// The propagator which failed during [`State::propagate_to_fixed_point`] and the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conflict {
    pub propagator_id: PropagatorId,
    pub inconsistency: Inconsistency,
}

impl State {
    pub fn new_variable(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.watch_list.grow();
        self.assignments.grow(lower_bound, upper_bound)
    }

    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub fn lower_bound(&self, var: &impl IntegerVariable) -> i32 {
        var.lower_bound(&self.assignments)
    }

    pub fn upper_bound(&self, var: &impl IntegerVariable) -> i32 {
        var.upper_bound(&self.assignments)
    }

    pub fn contains(&self, var: &impl IntegerVariable, value: i32) -> bool {
        var.contains(&self.assignments, value)
    }

    pub fn is_fixed(&self, var: &impl IntegerVariable) -> bool {
        var.is_fixed(&self.assignments)
    }

    /// Creates the propagator, subscribes it to its domain events and enqueues it for its first
    /// call. No propagation happens until [`State::propagate_to_fixed_point`] is called.
    pub fn add_propagator<Constructor>(&mut self, constructor: Constructor) -> PropagatorId
    where
        Constructor: PropagatorConstructor,
        Constructor::PropagatorImpl: 'static,
    {
        let propagator_id = PropagatorId::create_from_index(self.propagators.len());
        let context =
            PropagatorConstructorContext::new(propagator_id, &self.assignments, &mut self.watch_list);
        let propagator = constructor.create(context);

        let priority = propagator.priority();
        let _ = self.propagators.push(Box::new(propagator));
        let _ = self.is_subsumed.push(false);
        self.propagator_queue
            .enqueue_propagator(propagator_id, priority);

        propagator_id
    }

    /// Narrows a domain such that `predicate` holds. The propagators interested in the change
    /// are enqueued by the next [`State::propagate_to_fixed_point`].
    pub fn post(&mut self, predicate: Predicate) -> Result<(), EmptyDomain> {
        predicate.apply(&mut self.assignments)
    }

    /// Calls enqueued propagators until the queue is empty or one of them fails. After a conflict
    /// the state should be discarded.
    pub fn propagate_to_fixed_point(&mut self) -> Result<(), Conflict> {
        self.enqueue_propagators_for_domain_events();

        while let Some(propagator_id) = self.propagator_queue.pop() {
            if self.is_subsumed[propagator_id] {
                continue;
            }

            self.num_propagator_calls += 1;
            let context = PropagationContextMut::new(&mut self.assignments);
            let status = self.propagators[propagator_id].propagate(context);

            match status {
                Ok(PropagationOutcome::Fixpoint) => {}
                Ok(PropagationOutcome::Solved) => {
                    trace!(
                        "{} ({propagator_id}) is subsumed",
                        self.propagators[propagator_id].name()
                    );
                    self.is_subsumed[propagator_id] = true;
                }
                Err(inconsistency) => {
                    trace!(
                        "{} ({propagator_id}) failed: {inconsistency}",
                        self.propagators[propagator_id].name()
                    );
                    self.propagator_queue.clear();
                    self.assignments.clear_domain_events();
                    return Err(Conflict {
                        propagator_id,
                        inconsistency,
                    });
                }
            }

            self.enqueue_propagators_for_domain_events();
        }

        Ok(())
    }

    fn enqueue_propagators_for_domain_events(&mut self) {
        for (domain, event) in self.assignments.drain_domain_events() {
            for propagator_id in self.watch_list.get_affected_propagators(domain, event) {
                if !self.is_subsumed[propagator_id] {
                    self.propagator_queue
                        .enqueue_propagator(propagator_id, self.propagators[propagator_id].priority());
                }
            }
        }
    }

    /// Returns the number of propagator calls since the previous call of this method.
    pub(crate) fn take_num_propagator_calls(&mut self) -> u64 {
        std::mem::take(&mut self.num_propagator_calls)
    }

    /// The solution described by the domains, if every variable is fixed.
    pub fn solution(&self) -> Option<Solution> {
        self.assignments
            .all_assigned()
            .then(|| Solution::new(self.assignments.assigned_values()))
    }

    pub fn num_propagators(&self) -> usize {
        self.propagators.len()
    }

    pub fn propagators(&self) -> impl Iterator<Item = (PropagatorId, &dyn Propagator)> + '_ {
        self.propagators
            .keys()
            .zip(self.propagators.iter().map(|propagator| propagator.as_ref()))
    }

    /// Get the propagator with the given id as its concrete type, if it has that type.
    pub fn get_propagator<P: Propagator>(&self, propagator_id: PropagatorId) -> Option<&P> {
        self.propagators
            .get(propagator_id)
            .and_then(|propagator| propagator.as_ref().downcast_ref::<P>())
    }

    #[cfg(test)]
    pub(crate) fn get_propagator_mut<P: Propagator>(
        &mut self,
        propagator_id: PropagatorId,
    ) -> Option<&mut P> {
        self.propagators[propagator_id].as_mut().downcast_mut::<P>()
    }

    pub fn is_subsumed(&self, propagator_id: PropagatorId) -> bool {
        self.is_subsumed[propagator_id]
    }

    /// Calls a single propagator once, outside of the queue.
    #[cfg(test)]
    pub(crate) fn propagate_once(
        &mut self,
        propagator_id: PropagatorId,
    ) -> crate::basic_types::PropagationStatusCP {
        let context = PropagationContextMut::new(&mut self.assignments);
        let status = self.propagators[propagator_id].propagate(context);
        self.enqueue_propagators_for_domain_events();
        status
    }
}
