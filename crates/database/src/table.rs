//! The table handle.
//!
//! This module provides the `Table` struct, which owns one table's rows,
//! indexes and default providers, and exposes insert, query and persistence.

use crate::provider::ProviderRegistry;
use std::path::Path;
use sylph_core::schema::{TableConfig, TableSchema};
use sylph_core::{Entity, Result, Value};
use sylph_query::{AccessPath, Condition};
use sylph_storage::RowStore;
use tracing::{debug, enabled, Level};

/// An in-memory table with optional file persistence.
///
/// Single-threaded: `insert` and `load` take `&mut self`, queries take `&self`.
#[derive(Debug)]
pub struct Table {
    store: RowStore,
    providers: ProviderRegistry,
}

impl Table {
    /// Creates a table whose defaults are literals, UUIDs or timestamps.
    pub fn create(config: &TableConfig) -> Result<Self> {
        Self::create_with_providers(config, ProviderRegistry::new())
    }

    /// Creates a table that may use named default providers from `providers`.
    pub fn create_with_providers(config: &TableConfig, providers: ProviderRegistry) -> Result<Self> {
        let schema = TableSchema::normalize(config, &providers)?;
        debug!(
            "Created table {} with {} fields (primary key {})",
            schema.name(),
            schema.len(),
            schema.pk_name()
        );
        Ok(Self {
            store: RowStore::new(schema),
            providers,
        })
    }

    pub fn name(&self) -> &str {
        self.store.schema().name()
    }

    pub fn schema(&self) -> &TableSchema {
        self.store.schema()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the last auto-increment key handed out (0 before the first insert).
    pub fn auto_increment_counter(&self) -> u64 {
        self.store.auto_increment_counter()
    }

    /// Inserts an entity and returns the stored row.
    ///
    /// On error the table is unchanged.
    pub fn insert(&mut self, entity: &Entity) -> Result<Entity> {
        let id = self.store.insert(entity, &self.providers)?;
        let row = &self.store.rows()[id];
        debug!("Inserted row {} into {}", id, self.name());
        Ok(self.store.to_entity(row))
    }

    /// Returns every row matching the condition, in insertion order.
    pub fn find(&self, condition: &Condition) -> Result<Vec<Entity>> {
        self.trace_plan(condition)?;
        sylph_query::find(&self.store, condition)
    }

    /// Returns the first row matching the condition.
    pub fn find_one(&self, condition: &Condition) -> Result<Option<Entity>> {
        self.trace_plan(condition)?;
        sylph_query::find_one(&self.store, condition)
    }

    /// Counts rows matching the condition.
    pub fn count(&self, condition: &Condition) -> Result<usize> {
        sylph_query::count(&self.store, condition)
    }

    /// Returns the access path a query would take.
    pub fn explain(&self, condition: &Condition) -> Result<AccessPath> {
        sylph_query::explain(&self.store, condition)
    }

    /// Looks up a row by primary key.
    pub fn get_by_pk(&self, key: &Value) -> Option<Entity> {
        self.store.get_by_pk(key).map(|row| self.store.to_entity(row))
    }

    /// Returns every row, in insertion order.
    pub fn entities(&self) -> Vec<Entity> {
        self.store
            .rows()
            .iter()
            .map(|row| self.store.to_entity(row))
            .collect()
    }

    /// Writes the table to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        sylph_format::save(path, &self.store)
    }

    /// Replaces the table contents with those saved at `path`.
    ///
    /// A missing file leaves the table as it is. So does any error: the file
    /// is fully parsed and checked before the current rows are replaced.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        if let Some(store) = sylph_format::load(path, self.store.schema())? {
            self.store = store;
        }
        Ok(self)
    }

    /// Renders the table as aligned text.
    pub fn display(&self) -> String {
        self.to_string()
    }

    pub(crate) fn store(&self) -> &RowStore {
        &self.store
    }

    fn trace_plan(&self, condition: &Condition) -> Result<()> {
        if enabled!(Level::DEBUG) {
            let path = sylph_query::explain(&self.store, condition)?;
            debug!("Query on {} uses {}", self.name(), path);
        }
        Ok(())
    }
}
