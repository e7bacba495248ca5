//! Schema module for sylph tables.
//!
//! This module contains the caller-facing field definitions, the closed set of
//! default kinds, and the validator that turns them into an immutable schema.

mod default;
mod field;
mod table;

pub use default::{DefaultKind, DefaultResolver, LiteralResolver, ResolveError};
pub use field::FieldDef;
pub use table::{TableConfig, TableSchema};
