//! The set of indexes a table keeps over its row arena.
//!
//! Maps hold row handles, never row copies: each row lives once in the arena
//! and every map entry that covers it refers back by position.

use crate::hash::HashIndex;
use crate::traits::Index;
use alloc::vec::Vec;
use sylph_core::schema::TableSchema;
use sylph_core::{Error, Result, Row, RowId, Value};

/// Primary-key, unique and plain index maps for one table.
#[derive(Debug)]
pub struct IndexSet {
    /// Field position → unique map. The primary key is always the first entry.
    uniques: Vec<(usize, HashIndex<Value>)>,
    /// Field position → plain map.
    plain: Vec<(usize, HashIndex<Value>)>,
}

impl IndexSet {
    /// Creates empty maps for every indexed field of the schema.
    pub fn new(schema: &TableSchema) -> Self {
        let mut uniques = Vec::with_capacity(schema.uniques().len() + 1);
        uniques.push((schema.pk(), HashIndex::new(true)));
        uniques.extend(schema.uniques().iter().map(|&pos| (pos, HashIndex::new(true))));

        let plain = schema
            .indexes()
            .iter()
            .map(|&pos| (pos, HashIndex::new(false)))
            .collect();

        Self { uniques, plain }
    }

    /// Builds all maps from scratch over existing rows.
    ///
    /// Fails on the first row whose unique or primary-key value collides with
    /// an earlier row, reporting that row's position.
    pub fn build<'a, I>(schema: &TableSchema, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Row>,
    {
        let mut set = Self::new(schema);
        for row in rows {
            for (pos, index) in set.uniques.iter_mut() {
                let value = &row.values()[*pos];
                if value.is_null() {
                    continue;
                }
                if index.add(value.clone(), row.id()).is_err() {
                    return Err(Error::DuplicateUniqueValue {
                        field: schema.fields()[*pos].clone(),
                        value: value.clone(),
                        row: Some(row.id()),
                    });
                }
            }
            for (pos, index) in set.plain.iter_mut() {
                let added = index.add(row.values()[*pos].clone(), row.id());
                debug_assert!(added.is_ok(), "plain maps never reject");
            }
        }
        Ok(set)
    }

    /// Checks that a candidate row would not collide with any unique map.
    ///
    /// Read-only; callers run this before mutating anything.
    pub fn check(&self, schema: &TableSchema, values: &[Value]) -> Result<()> {
        for (pos, index) in &self.uniques {
            let value = &values[*pos];
            if value.is_null() {
                continue;
            }
            let Some(owner) = index.get_one(value) else {
                continue;
            };
            let field = schema.fields()[*pos].clone();
            return Err(if *pos == schema.pk() {
                Error::DuplicatePrimaryKey {
                    field,
                    value: value.clone(),
                }
            } else {
                Error::DuplicateUniqueValue {
                    field,
                    value: value.clone(),
                    row: Some(owner),
                }
            });
        }
        Ok(())
    }

    /// Adds a row to every map. The row must already have passed `check`.
    pub fn add(&mut self, id: RowId, values: &[Value]) {
        for (pos, index) in self.uniques.iter_mut() {
            let value = &values[*pos];
            if !value.is_null() {
                let added = index.add(value.clone(), id);
                debug_assert!(added.is_ok(), "unique value was not checked before add");
            }
        }
        for (pos, index) in self.plain.iter_mut() {
            let added = index.add(values[*pos].clone(), id);
            debug_assert!(added.is_ok(), "plain maps never reject");
        }
    }

    /// Returns the unique map (primary key included) for a field position.
    pub fn unique(&self, pos: usize) -> Option<&HashIndex<Value>> {
        self.uniques.iter().find(|(p, _)| *p == pos).map(|(_, i)| i)
    }

    /// Returns the plain map for a field position.
    pub fn plain(&self, pos: usize) -> Option<&HashIndex<Value>> {
        self.plain.iter().find(|(p, _)| *p == pos).map(|(_, i)| i)
    }

    /// Probes a unique map. `None` if the field has no unique map or the value is absent.
    pub fn lookup_unique(&self, pos: usize, value: &Value) -> Option<RowId> {
        self.unique(pos).and_then(|index| index.get_one(value))
    }

    /// Probes a plain map. Empty if the field has no plain map or the value is absent.
    pub fn lookup_plain(&self, pos: usize, value: &Value) -> &[RowId] {
        self.plain(pos).map(|index| index.get(value)).unwrap_or(&[])
    }

    /// Returns the total number of map entries (handles) across all maps.
    pub fn entry_count(&self) -> usize {
        self.uniques.iter().map(|(_, i)| i.len()).sum::<usize>()
            + self.plain.iter().map(|(_, i)| i.len()).sum::<usize>()
    }
}
