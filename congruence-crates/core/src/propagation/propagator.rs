use downcast_rs::impl_downcast;
use downcast_rs::Downcast;
use dyn_clone::clone_trait_object;
use dyn_clone::DynClone;

use super::PropagationContextMut;
use crate::basic_types::PropagationStatusCP;
#[cfg(doc)]
use crate::create_statistics_struct;
use crate::statistics::StatisticLogger;

// We need to use this to cast from `Box<dyn Propagator>` to a concrete propagator; rust inherently
// does not allow downcasting from the trait definition to its concrete type.
impl_downcast!(Propagator);

// To allow the State object to be cloneable, we need to allow `Box<dyn Propagator>` to be cloned.
clone_trait_object!(Propagator);

/// A propagator removes values from domains which will never be in any solution, or raises
/// explicit conflicts.
///
/// The only required functions are [`Propagator::name`] and [`Propagator::propagate`]; all other
/// functions have default implementations.
///
/// See the [`crate::propagation`] documentation for more details.
pub trait Propagator: Downcast + DynClone {
    /// Return the name of the propagator.
    ///
    /// This is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// Performs one propagation pass.
    ///
    /// The main aims of this method are to remove values from the domains of variables (using
    /// the mutating methods of [`PropagationContextMut`]) which cannot be part of any solution
    /// given the current domains and to detect conflicts.
    ///
    /// In case no conflict has been detected this function returns a
    /// [`PropagationOutcome`](crate::propagation::PropagationOutcome); otherwise it returns the
    /// [`Inconsistency`](crate::propagation::Inconsistency), which fails the current search node.
    ///
    /// Propagators are not required to propagate until a fixed point. It will be called again by
    /// the solver when one of the domain events it subscribed to happens.
    fn propagate(&mut self, context: PropagationContextMut) -> PropagationStatusCP;

    /// Returns the [`Priority`] of the propagator, used for determining the order in which
    /// propagators are called.
    ///
    /// See [`Priority`] documentation for more explanation.
    ///
    /// By default the priority is set to [`Priority::VeryLow`]. It is expected that
    /// propagator implementations would set this value to some appropriate value.
    fn priority(&self) -> Priority {
        Priority::VeryLow
    }

    /// Logs statistics of the propagator using the provided [`StatisticLogger`].
    ///
    /// It is recommended to create a struct through the [`create_statistics_struct!`] macro!
    fn log_statistics(&self, _statistic_logger: StatisticLogger) {}
}

impl std::fmt::Debug for dyn Propagator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The priority of a propagator, used for determining the order in which propagators will be
/// called.
///
/// Propagators with high priority are propagated before propagators with low(er) priority. If two
/// propagators have the same priority, then they are propagated in the order they were enqueued.
///
/// Typically, propagators with low computational complexity should be assigned a high
/// priority (i.e., should be propagated before computationally expensive propagators).
#[derive(Default, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Priority {
    High = 0,
    Medium = 1,
    Low = 2,
    #[default]
    VeryLow = 3,
}

impl Priority {
    pub(crate) const NUM_LEVELS: usize = 4;
}
