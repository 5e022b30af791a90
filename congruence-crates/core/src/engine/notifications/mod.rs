//! Domain events and the watch lists which map them to the propagators subscribed to them.
mod domain_events;
mod watch_list_cp;

use enumset::EnumSetType;

pub use domain_events::DomainEvents;
pub(crate) use watch_list_cp::WatchListCP;
pub use watch_list_cp::Watchers;

/// A change to the domain of an integer variable.
#[derive(Debug, EnumSetType, Hash)]
pub enum DomainEvent {
    /// Event where an (integer) variable domain collapses to a single value.
    Assign,
    /// Event where an (integer) variable domain tightens the lower bound.
    LowerBound,
    /// Event where an (integer) variable domain tightens the upper bound.
    UpperBound,
    /// Event where an (integer) variable domain removes an inner value within the domain.
    Removal,
}
