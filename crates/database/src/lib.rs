//! Sylph - an embedded single-table engine.
//!
//! A `Table` holds rows of a fixed schema in memory, enforces types,
//! nullability, primary key and unique constraints on insert, answers
//! conditional queries through hash indexes where it can, and saves to and
//! loads from a plain text file.
//!
//! # Example
//!
//! ```
//! use sylph_database::{Condition, DataType, Entity, FieldDef, Predicate, Table, TableConfig};
//!
//! let config = TableConfig::new("users")
//!     .field(FieldDef::new("id", DataType::Number).primary_key(true).auto_increment(true))
//!     .field(FieldDef::new("name", DataType::String).unique(true))
//!     .field(FieldDef::new("age", DataType::Number).default_value(18));
//! let mut users = Table::create(&config)?;
//!
//! users.insert(&Entity::new().with("name", "Ann"))?;
//! users.insert(&Entity::new().with("name", "Bo").with("age", 30))?;
//!
//! let adults = users.find(&Condition::new().with("age", Predicate::between(20, 40)?))?;
//! assert_eq!(adults.len(), 1);
//! # Ok::<(), sylph_database::Error>(())
//! ```

mod display;
mod provider;
mod table;

pub use provider::{ProviderFn, ProviderRegistry};
pub use table::Table;

pub use sylph_core::schema::{DefaultKind, FieldDef, TableConfig, TableSchema};
pub use sylph_core::{DataType, Entity, Error, ErrorCategory, Result, SchemaRule, Value};
pub use sylph_query::{AccessPath, Condition, Predicate};
