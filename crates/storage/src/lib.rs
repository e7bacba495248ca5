//! Sylph Storage - Row storage for the sylph table engine.
//!
//! This crate provides the storage layer:
//!
//! - `RowStore`: Append-only row arena with primary-key, unique and plain index maintenance
//! - `ValueNormalizer`: Resolves partial insert payloads into full rows
//!
//! # Example
//!
//! ```rust
//! use sylph_core::schema::{FieldDef, LiteralResolver, TableConfig, TableSchema};
//! use sylph_core::{DataType, Entity, Value};
//! use sylph_storage::RowStore;
//!
//! let config = TableConfig::new("users")
//!     .field(FieldDef::new("id", DataType::Number).primary_key(true).auto_increment(true))
//!     .field(FieldDef::new("name", DataType::String));
//! let schema = TableSchema::normalize(&config, &LiteralResolver).unwrap();
//!
//! let mut store = RowStore::new(schema);
//! store.insert(&Entity::new().with("name", "Alice"), &LiteralResolver).unwrap();
//!
//! assert_eq!(store.len(), 1);
//! assert!(store.get_by_pk(&Value::Number(1.0)).is_some());
//! ```

#![no_std]

extern crate alloc;

pub mod normalize;
pub mod row_store;

pub use normalize::ValueNormalizer;
pub use row_store::RowStore;
