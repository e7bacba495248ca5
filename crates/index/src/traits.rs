//! Index trait definitions for the sylph table engine.
//!
//! This module defines the core `Index` trait that index implementations satisfy.

use sylph_core::RowId;

/// Core trait for index implementations.
///
/// Tables never delete or update rows, so indexes only grow.
pub trait Index<K> {
    /// Adds a key-value pair to the index.
    /// For unique indexes, this will fail if the key already exists.
    fn add(&mut self, key: K, value: RowId) -> Result<(), IndexError>;

    /// Gets all row handles associated with a key, in insertion order.
    fn get(&self, key: &K) -> &[RowId];

    /// Checks if the index contains the given key.
    fn contains_key(&self, key: &K) -> bool;

    /// Returns the number of row handles in the index.
    fn len(&self) -> usize;

    /// Returns the number of candidate rows an equality probe would yield.
    fn cost(&self, key: &K) -> usize {
        self.get(key).len()
    }
}

/// Error type for index operations.
#[derive(Clone, Debug, PartialEq)]
pub enum IndexError {
    /// Attempted to insert a duplicate key in a unique index.
    DuplicateKey,
}

impl core::fmt::Display for IndexError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IndexError::DuplicateKey => write!(f, "Duplicate key in unique index"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_index_error_display() {
        assert_eq!(IndexError::DuplicateKey.to_string(), "Duplicate key in unique index");
    }
}
