//! # Congruence
//! A finite-domain constraint solver built around a propagator which narrows the domains of the
//! variables of a linear equation `Σ aᵢ·xᵢ = c` by reasoning about divisibility.
//!
//! Every `xᵢ` has to satisfy `aᵢ·xᵢ ≡ c (mod g)` where `g` is the gcd of the other coefficients.
//! This congruence can remove values which bounds reasoning alone keeps, and can prove an
//! equation infeasible before any search takes place.
//!
//! # Example
//! ```rust
//! # use congruence_core::constraints;
//! # use congruence_core::options::ModuloOptions;
//! # use congruence_core::results::EnumerationResult;
//! # use congruence_core::termination::Indefinite;
//! # use congruence_core::Solver;
//! let mut solver = Solver::default();
//!
//! let x = solver.new_bounded_integer(0, 20);
//! let y = solver.new_bounded_integer(0, 20);
//!
//! // 6x + 10y = 64
//! solver
//!     .add_constraint(constraints::modulo_equals(
//!         [6, 10],
//!         [x, y],
//!         64,
//!         ModuloOptions::default(),
//!     ))
//!     .post()
//!     .expect("the equation has solutions");
//!
//! // 6x ≡ 64 (mod 10) implies x ≡ 4 (mod 5).
//! assert_eq!(4, solver.lower_bound(&x));
//!
//! let mut brancher = solver.default_brancher(&[x, y]);
//! let mut solutions = vec![];
//! let result = solver.enumerate_solutions(&mut brancher, &mut Indefinite, None, |solution| {
//!     solutions.push((solution.value(x), solution.value(y)));
//! });
//!
//! assert_eq!(EnumerationResult::Complete { num_solutions: 2 }, result);
//! solutions.sort();
//! assert_eq!(vec![(4, 4), (9, 1)], solutions);
//! ```
//!
//! Statistics of the search and of the propagators are written through the functions in
//! [`statistics`], once [`statistics::configure_statistic_logging`] has been called.
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod math;
pub mod propagation;
pub(crate) mod propagators;

#[doc(hidden)]
pub mod asserts;

pub mod branching;
pub mod constraints;
pub mod statistics;

pub use convert_case;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use congruence_core::Solver;`
// vs.
// `use congruence_core::api::Solver;`
mod api;

pub use api::*;

pub use crate::api::solver::Solver;
pub use crate::basic_types::ConstraintOperationError;
pub use crate::engine::Conflict;
pub use crate::engine::State;
pub use crate::propagators::Congruence;
