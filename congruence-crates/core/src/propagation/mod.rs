//! Contains the main building blocks for propagators.
//!
//! # Background
//!
//! A propagator takes as input a set of variables (<code>x<sub>i</sub> ∈ X</code>) and for each
//! variable a corresponding domain (<code>D<sub>i</sub> ∈ D</code>); it can then be seen as a
//! function which maps `D ↦ D'` such that <code>D'<sub>i</sub> ⊆ D<sub>i</sub></code> for all
//! variables (i.e. the domain of a variable either remains the same after applying the propagator
//! or it becomes a subset of the domain before applying the propagator).
//!
//! A propagator is said to be at fix-point if <code>D<sub>x</sub> = D'<sub>x</sub></code> meaning
//! that no further propagations can take place when applying the propagator.
//!
//! # Practical
//!
//! Each concrete propagator is associated with one trait: [`Propagator`]. The main function to
//! implement for this trait is [`Propagator::propagate`], which performs the domain reduction.
//!
//! A propagator is created by a [`PropagatorConstructor`]. The constructor is responsible for
//! registering to domain events, and setting up the state of the propagator. The constructor is
//! provided a [`PropagatorConstructorContext`], which has all the available functions allowing the
//! propagator to hook into the solver state.
//!
//! Propagators live inside the [`State`](crate::State), which is duplicated with [`Clone`] whenever
//! the search branches. A propagator therefore has to be [`Clone`] itself, and all state it keeps
//! between calls is copied together with the domains it was derived from.

mod constructor;
mod contexts;
mod propagator;
mod propagator_id;

pub use constructor::*;
pub use contexts::*;
pub use propagator::*;
pub use propagator_id::PropagatorId;

pub use crate::basic_types::Inconsistency;
pub use crate::basic_types::PropagationOutcome;
pub use crate::basic_types::PropagationStatusCP;
pub use crate::basic_types::PropagatorConflict;
pub use crate::engine::notifications::DomainEvent;
pub use crate::engine::notifications::DomainEvents;
