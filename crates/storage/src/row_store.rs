//! Row storage for sylph tables.
//!
//! This module provides the `RowStore` struct which owns the rows of a single
//! table, the index maps over them, and the auto-increment counter.

use crate::normalize::ValueNormalizer;
use alloc::vec::Vec;
use sylph_core::schema::{DefaultResolver, TableSchema};
use sylph_core::{Entity, Result, Row, RowId, Value};
use sylph_index::IndexSet;

/// Row storage for a single table.
///
/// Rows live in an append-only arena; a row's handle is its arena position.
/// Index maps refer to rows by handle only.
#[derive(Debug)]
pub struct RowStore {
    schema: TableSchema,
    rows: Vec<Row>,
    indexes: IndexSet,
    auto_increment: u64,
}

impl RowStore {
    /// Creates an empty row store for the given schema.
    pub fn new(schema: TableSchema) -> Self {
        let indexes = IndexSet::new(&schema);
        Self {
            schema,
            rows: Vec::new(),
            indexes,
            auto_increment: 0,
        }
    }

    /// Creates a row store over pre-existing rows, building every index in one pass.
    ///
    /// Each value array must already be aligned to the schema's field order.
    pub fn from_parts(
        schema: TableSchema,
        values: Vec<Vec<Value>>,
        auto_increment: u64,
    ) -> Result<Self> {
        let rows: Vec<Row> = values
            .into_iter()
            .enumerate()
            .map(|(id, v)| Row::new(id, v))
            .collect();
        let indexes = IndexSet::build(&schema, &rows)?;
        Ok(Self {
            schema,
            rows,
            indexes,
            auto_increment,
        })
    }

    /// Returns the table schema.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Returns the index maps.
    pub fn indexes(&self) -> &IndexSet {
        &self.indexes
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns all rows in insertion order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Gets a row by handle.
    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.get(id)
    }

    /// Gets a row by primary key.
    pub fn get_by_pk(&self, key: &Value) -> Option<&Row> {
        self.indexes
            .lookup_unique(self.schema.pk(), key)
            .and_then(|id| self.rows.get(id))
    }

    /// Returns the last auto-increment key handed out.
    pub fn auto_increment_counter(&self) -> u64 {
        self.auto_increment
    }

    /// Inserts an entity.
    ///
    /// Values are resolved and every unique map is probed before anything is
    /// written, so a rejected insert leaves rows, maps and counter unchanged.
    pub fn insert(&mut self, entity: &Entity, resolver: &dyn DefaultResolver) -> Result<RowId> {
        let next = self.auto_increment + 1;
        let values = ValueNormalizer::resolve(&self.schema, entity, resolver, next)?;
        self.indexes.check(&self.schema, &values)?;

        let id = self.rows.len();
        self.indexes.add(id, &values);
        self.rows.push(Row::new(id, values));
        if self.schema.is_auto_increment() {
            self.auto_increment = next;
        }
        Ok(id)
    }

    /// Builds the field-name-keyed view of a row.
    pub fn to_entity(&self, row: &Row) -> Entity {
        self.schema
            .fields()
            .iter()
            .zip(row.values())
            .map(|(name, value)| (name.as_str(), value.clone()))
            .collect()
    }
}
