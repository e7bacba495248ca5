//! Sylph Core - Core types and schema definitions for the sylph table engine.
//!
//! This crate provides the foundational types shared by every other crate:
//!
//! - `DataType`: Field types (String, Number, Boolean, Date)
//! - `Value`: Runtime values that can be stored in a row
//! - `Row`: A fixed-width value array with an arena handle
//! - `Entity`: The field-name-keyed view handed to callers
//! - `schema`: Field definitions, default kinds and the schema validator
//! - `Error`: Error types for table operations
//!
//! # Example
//!
//! ```rust
//! use sylph_core::{DataType, Value};
//! use sylph_core::schema::{FieldDef, LiteralResolver, TableConfig, TableSchema};
//!
//! let config = TableConfig::new("users")
//!     .field(FieldDef::new("id", DataType::Number).primary_key(true).auto_increment(true))
//!     .field(FieldDef::new("name", DataType::String).unique(true))
//!     .field(FieldDef::new("age", DataType::Number).default_value(18));
//!
//! let schema = TableSchema::normalize(&config, &LiteralResolver).unwrap();
//! assert_eq!(schema.pk_name(), "id");
//! assert_eq!(schema.field_index("age"), Some(2));
//! assert!(Value::Number(1.0).fits(DataType::Number, false));
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod entity;
mod error;
pub mod pattern_match;
mod row;
pub mod schema;
mod types;
mod value;

pub use entity::Entity;
pub use error::{Error, ErrorCategory, Result, SchemaRule};
pub use row::{Row, RowId};
pub use types::DataType;
pub use value::Value;
