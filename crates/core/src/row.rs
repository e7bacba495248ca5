//! Row structure for sylph tables.
//!
//! This module defines the `Row` struct which represents a single record as a
//! fixed-width value array aligned to the schema's field order.

use crate::value::Value;
use alloc::vec::Vec;

/// Handle of a row: its position in the owning table's row arena.
pub type RowId = usize;

/// A row in a table.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Arena position of this row.
    id: RowId,
    /// Values stored in this row, indexed by field position.
    values: Vec<Value>,
}

impl Row {
    /// Creates a new row with the given handle and values.
    pub fn new(id: RowId, values: Vec<Value>) -> Self {
        Self { id, values }
    }

    /// Returns the row handle.
    #[inline]
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Returns a reference to the values.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Gets a value at the given field position.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_row_new() {
        let row = Row::new(1, vec![Value::Number(42.0), Value::String("Alice".into())]);
        assert_eq!(row.id(), 1);
        assert_eq!(row.values().len(), 2);
    }

    #[test]
    fn test_row_get_value() {
        let row = Row::new(1, vec![Value::Number(1.0), Value::String("Alice".into())]);
        assert_eq!(row.get(0), Some(&Value::Number(1.0)));
        assert_eq!(row.get(1), Some(&Value::String("Alice".into())));
        assert_eq!(row.get(2), None);
    }
}
