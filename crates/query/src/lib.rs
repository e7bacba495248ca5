//! Sylph Query - Query engine for the sylph table engine.
//!
//! This crate evaluates conditions against a `RowStore`:
//!
//! - `ast`: Predicates and conditions
//! - `planner`: Access path selection (unique probe, index probe, full scan)
//! - `executor`: Candidate production and condition filtering
//!
//! # Example
//!
//! ```ignore
//! use sylph_query::{find, Condition, Predicate};
//!
//! let cond = Condition::new()
//!     .eq("city", "Oslo")
//!     .with("age", Predicate::between(20, 40)?);
//! let rows = find(&store, &cond)?;
//! ```

#![no_std]

extern crate alloc;

pub mod ast;
pub mod executor;
pub mod planner;

pub use ast::{BoundCondition, Condition, EvalType, Predicate};
pub use executor::{count, explain, find, find_one, find_rows};
pub use planner::AccessPath;
