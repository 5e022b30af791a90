//! Atomic constraints over a single [`DomainId`](crate::engine::variables::DomainId), used as the
//! decisions of the search.
mod predicate;
pub(crate) mod predicate_constructor;

pub use predicate::Predicate;
pub use predicate_constructor::PredicateConstructor;
