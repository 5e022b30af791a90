//! Contains the propagator implementations.
//!
//! See [`crate::propagation`] for info on propagators.

pub(crate) mod arithmetic;
pub(crate) mod modulo;

pub(crate) use arithmetic::*;
pub use modulo::Congruence;
pub use modulo::CongruencePruning;
pub use modulo::ModuloOptions;
pub(crate) use modulo::ModuloPropagatorArgs;
