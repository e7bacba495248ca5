//! Data type definitions for sylph tables.
//!
//! This module defines the field types a table column may declare.

use crate::error::{Error, SchemaRule};
use core::fmt;
use core::str::FromStr;

/// Supported field types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// UTF-8 string
    String,
    /// 64-bit floating point number
    Number,
    /// Boolean (true/false)
    Boolean,
    /// Date and time stored as Unix timestamp (milliseconds)
    Date,
}

impl DataType {
    /// Returns the stable lower-case tag used in table files.
    pub fn tag(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::Date => "date",
        }
    }

    /// Returns whether values of this type accept ordering operators.
    pub fn is_comparable(&self) -> bool {
        matches!(self, DataType::Number | DataType::Date)
    }

    /// Parses a type tag, returning `None` for unsupported tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(DataType::String),
            "number" => Some(DataType::Number),
            "boolean" => Some(DataType::Boolean),
            "date" => Some(DataType::Date),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| Error::schema(s, SchemaRule::UnsupportedType))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_tags() {
        for dt in [DataType::String, DataType::Number, DataType::Boolean, DataType::Date] {
            assert_eq!(DataType::from_tag(dt.tag()), Some(dt));
        }
    }

    #[test]
    fn test_comparable() {
        assert!(DataType::Number.is_comparable());
        assert!(DataType::Date.is_comparable());
        assert!(!DataType::String.is_comparable());
        assert!(!DataType::Boolean.is_comparable());
    }

    #[test]
    fn test_unsupported_tag() {
        let err = "varchar".parse::<DataType>().unwrap_err();
        match err {
            Error::Schema { rule, .. } => assert_eq!(rule, SchemaRule::UnsupportedType),
            _ => panic!("Wrong error type"),
        }
    }
}
