use enumset::EnumSet;

use super::DomainEvent;
use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;
use crate::propagation::PropagatorId;

/// For every domain, the propagators that watch it and the events they are interested in.
#[derive(Default, Debug, Clone)]
pub(crate) struct WatchListCP {
    watchers: KeyedVec<DomainId, Vec<Watcher>>,
}

#[derive(Clone, Copy, Debug)]
struct Watcher {
    propagator_id: PropagatorId,
    events: EnumSet<DomainEvent>,
}

impl WatchListCP {
    pub(crate) fn grow(&mut self) {
        let _ = self.watchers.push(Vec::new());
    }

    /// The propagators which subscribed to `event` on `domain`.
    pub(crate) fn get_affected_propagators(
        &self,
        domain: DomainId,
        event: DomainEvent,
    ) -> impl Iterator<Item = PropagatorId> + '_ {
        self.watchers[domain]
            .iter()
            .filter(move |watcher| watcher.events.contains(event))
            .map(|watcher| watcher.propagator_id)
    }
}

/// Used to register a propagator for notifications about events to a particular variable.
#[derive(Debug)]
pub struct Watchers<'a> {
    propagator_id: PropagatorId,
    watch_list: &'a mut WatchListCP,
}

impl<'a> Watchers<'a> {
    pub(crate) fn new(propagator_id: PropagatorId, watch_list: &'a mut WatchListCP) -> Self {
        Watchers {
            propagator_id,
            watch_list,
        }
    }

    pub fn watch_all(&mut self, domain: DomainId, events: EnumSet<DomainEvent>) {
        let watchers = &mut self.watch_list.watchers[domain];

        if let Some(existing) = watchers
            .iter_mut()
            .find(|watcher| watcher.propagator_id == self.propagator_id)
        {
            existing.events |= events;
        } else {
            watchers.push(Watcher {
                propagator_id: self.propagator_id,
                events,
            });
        }
    }
}
