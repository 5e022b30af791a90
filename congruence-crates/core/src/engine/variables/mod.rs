//! A variable, in the context of the solver, is a handle onto a domain stored in the
//! [`Assignments`](crate::engine::Assignments).

mod domain_id;
mod integer_variable;

pub use domain_id::DomainId;
pub use integer_variable::IntegerVariable;
