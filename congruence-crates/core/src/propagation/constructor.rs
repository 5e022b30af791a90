use super::Propagator;
use super::PropagatorId;
use crate::engine::notifications::DomainEvents;
use crate::engine::notifications::WatchListCP;
use crate::engine::notifications::Watchers;
use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;
#[cfg(doc)]
use crate::Solver;

/// A propagator constructor creates a fully initialized instance of a [`Propagator`].
///
/// The constructor is responsible for indicating on which events the propagator should be
/// enqueued. Additionally, the propagator can be initialized with values that come from the state
/// of the solver.
pub trait PropagatorConstructor {
    /// The propagator that is produced by this constructor.
    type PropagatorImpl: Propagator + Clone;

    /// Create the propagator instance from `Self`.
    fn create(self, context: PropagatorConstructorContext) -> Self::PropagatorImpl;
}

/// [`PropagatorConstructorContext`] is used when [`Propagator`]s are initialised after creation.
///
/// It represents a communication point between the [`Solver`] and the [`Propagator`].
/// Propagators use the [`PropagatorConstructorContext`] to register to domain changes
/// of variables and to retrieve the current bounds of variables.
#[derive(Debug)]
pub struct PropagatorConstructorContext<'a> {
    pub(super) assignments: &'a Assignments,
    watch_list: &'a mut WatchListCP,
    pub(crate) propagator_id: PropagatorId,
}

impl PropagatorConstructorContext<'_> {
    pub(crate) fn new<'a>(
        propagator_id: PropagatorId,
        assignments: &'a Assignments,
        watch_list: &'a mut WatchListCP,
    ) -> PropagatorConstructorContext<'a> {
        PropagatorConstructorContext {
            assignments,
            watch_list,
            propagator_id,
        }
    }

    /// Subscribes the propagator to the given [`DomainEvents`] of `var`; whenever one of them
    /// happens, the propagator is enqueued.
    pub fn register(&mut self, var: impl IntegerVariable, domain_events: DomainEvents) {
        let mut watchers = Watchers::new(self.propagator_id, self.watch_list);
        var.watch_all(&mut watchers, domain_events.get_int_events());
    }
}
