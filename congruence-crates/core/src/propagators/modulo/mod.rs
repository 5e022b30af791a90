//! The modular congruence propagator for `Σ aᵢ·xᵢ = c`.
//!
//! Besides the bounds of the variables, such an equation constrains their residues: every `xᵢ`
//! has to satisfy `aᵢ·xᵢ ≡ c (mod g)`, where `g` is the gcd of the other coefficients. See
//! [`ModuloPropagator`] for how these congruences are derived and applied.
mod congruence;
mod gcd_chain;
mod modulo_propagator;
mod options;
mod pruning;
mod term_set;

pub use congruence::Congruence;
pub(crate) use modulo_propagator::*;
pub use options::CongruencePruning;
pub use options::ModuloOptions;
