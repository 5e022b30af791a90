//! # Congruence Solver
//! Solves systems of linear equations `Σ a_i · x_i = c` over bounded integer variables, read
//! from batch instance files.
//!
//! The solving itself happens in [`congruence_core`], re-exported as [`core`]. This crate adds
//! the [`instance`] file format and the configuration of a single instance, which is turned into
//! variables and constraints of a [`Solver`] with [`instance::InstanceConfiguration::build`].
//!
//! # Example
//! ```
//! # use congruence_solver::instance::parse_instances;
//! # use congruence_solver::instance::PropagationMode;
//! # use congruence_solver::core::options::ModuloOptions;
//! # use congruence_solver::core::results::SatisfactionResult;
//! # use congruence_solver::core::termination::Indefinite;
//! # use congruence_solver::Solver;
//! let source = "
//! 0 20
//! 64 6 10
//! ";
//! let instances = parse_instances(source.as_bytes()).expect("valid instance file");
//!
//! let mut solver = Solver::default();
//! let variables = instances[0]
//!     .build(&mut solver, PropagationMode::Modulo, ModuloOptions::default())
//!     .expect("not infeasible at the root");
//!
//! let mut brancher = solver.default_brancher(&variables);
//! let result = solver.satisfy(&mut brancher, &mut Indefinite);
//! let SatisfactionResult::Satisfiable(solution) = result else {
//!     panic!("6x + 10y = 64 has solutions");
//! };
//!
//! let values = solution.values_of(&variables).collect::<Vec<_>>();
//! assert_eq!(64, 6 * values[0] + 10 * values[1]);
//! ```
pub mod instance;

pub use congruence_core as core;
pub use congruence_core::Solver;
