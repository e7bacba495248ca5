//! Hash index implementation for the sylph table engine.
//!
//! This module provides a hash-based index for O(1) point queries.

use crate::traits::{Index, IndexError};
use alloc::vec::Vec;
use sylph_core::RowId;
use hashbrown::HashMap;

/// A hash-based index for O(1) point queries.
///
/// This index uses a HashMap internally and supports both unique and non-unique indexes.
/// Row handles under one key are kept in insertion order.
#[derive(Debug)]
pub struct HashIndex<K> {
    /// The underlying map from keys to row handles.
    map: HashMap<K, Vec<RowId>>,
    /// Whether this is a unique index.
    unique: bool,
    /// Total handles stored.
    rows: usize,
}

impl<K: Eq + core::hash::Hash> HashIndex<K> {
    /// Creates a new hash index.
    pub fn new(unique: bool) -> Self {
        Self {
            map: HashMap::new(),
            unique,
            rows: 0,
        }
    }

    /// Returns the single row for a key of a unique index.
    pub fn get_one(&self, key: &K) -> Option<RowId> {
        self.map.get(key).and_then(|rows| rows.first().copied())
    }
}

impl<K: Eq + core::hash::Hash> Index<K> for HashIndex<K> {
    fn add(&mut self, key: K, value: RowId) -> Result<(), IndexError> {
        if self.unique && self.contains_key(&key) {
            return Err(IndexError::DuplicateKey);
        }

        self.map.entry(key).or_insert_with(Vec::new).push(value);
        self.rows += 1;
        Ok(())
    }

    fn get(&self, key: &K) -> &[RowId] {
        self.map.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn len(&self) -> usize {
        self.rows
    }
}
