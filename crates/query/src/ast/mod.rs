//! AST module for query conditions and predicates.

mod condition;
mod predicate;

pub use condition::{BoundCondition, Condition};
pub use predicate::{EvalType, Predicate};
