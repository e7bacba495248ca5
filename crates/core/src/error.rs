//! Error types for the sylph table engine.

use crate::types::DataType;
use crate::value::Value;
use alloc::string::String;
use core::fmt;

/// Result type alias for sylph operations.
pub type Result<T> = core::result::Result<T, Error>;

/// The schema rule a rejected field definition violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SchemaRule {
    /// Table name is empty or not `[A-Za-z][A-Za-z0-9_]*`.
    InvalidTableName,
    /// Table declares no fields.
    NoFields,
    /// Field name is not `[A-Za-z][A-Za-z0-9_]*`.
    InvalidFieldName,
    /// Two fields share a name.
    DuplicateFieldName,
    /// Type tag is not one of string/number/boolean/date.
    UnsupportedType,
    /// No field is the primary key.
    MissingPrimaryKey,
    /// More than one field is the primary key.
    DuplicatePrimaryKey,
    /// Auto-increment on a non-primary-key field.
    AutoIncrementWithoutPrimaryKey,
    /// Auto-increment on a non-number field.
    AutoIncrementNotNumber,
    /// Auto-increment field also declares a default.
    AutoIncrementWithDefault,
    /// Field is both indexed and unique.
    IndexAndUnique,
    /// Primary key also declares index or unique.
    PrimaryKeyIndexed,
    /// Primary key is declared nullable.
    NullablePrimaryKey,
    /// Default resolves to null on a non-nullable field.
    NullDefault,
    /// Default resolves to a value of another type.
    DefaultTypeMismatch,
    /// Default provider raised while being evaluated.
    DefaultProviderFailed,
    /// Default names a provider that is not registered.
    UnknownProvider,
}

impl SchemaRule {
    fn describe(&self) -> &'static str {
        match self {
            SchemaRule::InvalidTableName => "table name must match [A-Za-z][A-Za-z0-9_]*",
            SchemaRule::NoFields => "table must declare at least one field",
            SchemaRule::InvalidFieldName => "field name must match [A-Za-z][A-Za-z0-9_]*",
            SchemaRule::DuplicateFieldName => "field name is declared more than once",
            SchemaRule::UnsupportedType => "unsupported field type",
            SchemaRule::MissingPrimaryKey => "exactly one field must be the primary key",
            SchemaRule::DuplicatePrimaryKey => "only one field may be the primary key",
            SchemaRule::AutoIncrementWithoutPrimaryKey => "auto-increment requires the primary key",
            SchemaRule::AutoIncrementNotNumber => "auto-increment requires number type",
            SchemaRule::AutoIncrementWithDefault => "auto-increment field cannot have a default",
            SchemaRule::IndexAndUnique => "field cannot be both indexed and unique",
            SchemaRule::PrimaryKeyIndexed => "primary key is implicitly unique; drop index/unique",
            SchemaRule::NullablePrimaryKey => "primary key cannot be nullable",
            SchemaRule::NullDefault => "default is null but field is not nullable",
            SchemaRule::DefaultTypeMismatch => "default does not match field type",
            SchemaRule::DefaultProviderFailed => "default provider failed during validation",
            SchemaRule::UnknownProvider => "default provider is not registered",
        }
    }
}

/// Broad classification of errors by the phase that raises them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Raised while constructing a table.
    Schema,
    /// Raised by insert/find/predicate construction for bad input.
    Validation,
    /// Raised by insert when a key is already taken.
    Integrity,
    /// Raised by save/load.
    Persistence,
}

/// Error types for sylph table operations.
#[derive(Debug)]
pub enum Error {
    /// Invalid table configuration.
    Schema {
        field: String,
        rule: SchemaRule,
    },
    /// Inserted value's type does not match the field.
    TypeMismatch {
        field: String,
        expected: DataType,
        got: DataType,
    },
    /// Null (or missing value without default) on a non-nullable field.
    NotNullable {
        field: String,
    },
    /// Default provider raised while resolving a missing value.
    ProviderFailed {
        field: String,
        message: String,
    },
    /// Entity or condition references a field the table does not have.
    UnknownField {
        field: String,
    },
    /// Condition has no fields.
    EmptyCondition,
    /// Condition operand does not fit the field's type or nullability.
    ConditionTypeMismatch {
        field: String,
        expected: DataType,
        got: Option<DataType>,
    },
    /// Ordering operator built on a non-number/date value.
    NotComparable {
        got: Option<DataType>,
    },
    /// Interval bounds are of different types or reversed.
    InvalidInterval {
        lower: Value,
        upper: Value,
    },
    /// Pattern operator built on a non-string value.
    NotString {
        got: Option<DataType>,
    },
    /// Membership operator built on an empty list.
    EmptyArray,
    /// Membership operator list mixes value types.
    MixedType {
        first: Option<DataType>,
        other: Option<DataType>,
    },
    /// Primary key value already present.
    DuplicatePrimaryKey {
        field: String,
        value: Value,
    },
    /// Unique field value already present. `row` is the position of the
    /// stored row holding the value, or on load the later duplicate row.
    DuplicateUniqueValue {
        field: String,
        value: Value,
        row: Option<usize>,
    },
    /// Stored schema diverges from the table schema.
    SchemaMismatch {
        property: String,
        expected_position: Option<usize>,
        loaded_position: Option<usize>,
        expected: String,
        got: String,
    },
    /// Malformed header or data line.
    CorruptFile {
        line: usize,
        message: String,
    },
    /// Auto-increment header value is not a non-negative integer, or is
    /// below a stored primary key.
    InvalidCounter {
        value: String,
    },
    /// Underlying I/O failure.
    Io {
        path: String,
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Schema { field, rule } => {
                write!(f, "Invalid schema at {}: {}", field, rule.describe())
            }
            Error::TypeMismatch { field, expected, got } => {
                write!(f, "Type mismatch on field {}: expected {}, got {}", field, expected, got)
            }
            Error::NotNullable { field } => {
                write!(f, "Field {} is not nullable", field)
            }
            Error::ProviderFailed { field, message } => {
                write!(f, "Default provider for field {} failed: {}", field, message)
            }
            Error::UnknownField { field } => {
                write!(f, "Unknown field: {}", field)
            }
            Error::EmptyCondition => f.write_str("Condition must reference at least one field"),
            Error::ConditionTypeMismatch { field, expected, got } => {
                write!(f, "Condition on field {} expects {}, got ", field, expected)?;
                write_type(f, *got)
            }
            Error::NotComparable { got } => {
                f.write_str("Ordering operators require number or date, got ")?;
                write_type(f, *got)
            }
            Error::InvalidInterval { lower, upper } => {
                write!(f, "Invalid interval: [{}, {}]", lower, upper)
            }
            Error::NotString { got } => {
                f.write_str("Pattern operator requires string, got ")?;
                write_type(f, *got)
            }
            Error::EmptyArray => f.write_str("Membership operator requires a non-empty list"),
            Error::MixedType { first, other } => {
                f.write_str("Membership list mixes types: ")?;
                write_type(f, *first)?;
                f.write_str(" and ")?;
                write_type(f, *other)
            }
            Error::DuplicatePrimaryKey { field, value } => {
                write!(f, "Duplicate primary key {}: {}", field, value)
            }
            Error::DuplicateUniqueValue { field, value, row } => {
                write!(f, "Duplicate value on unique field {}: {}", field, value)?;
                if let Some(row) = row {
                    write!(f, " (row {})", row)?;
                }
                Ok(())
            }
            Error::SchemaMismatch {
                property,
                expected_position,
                loaded_position,
                expected,
                got,
            } => {
                write!(f, "Schema mismatch on {}: expected {}", property, expected)?;
                if let Some(pos) = expected_position {
                    write!(f, " at {}", pos)?;
                }
                write!(f, ", got {}", got)?;
                if let Some(pos) = loaded_position {
                    write!(f, " at {}", pos)?;
                }
                Ok(())
            }
            Error::CorruptFile { line, message } => {
                write!(f, "Corrupt file at line {}: {}", line, message)
            }
            Error::InvalidCounter { value } => {
                write!(f, "Invalid auto-increment value: {}", value)
            }
            Error::Io { path, message } => {
                write!(f, "I/O error on {}: {}", path, message)
            }
        }
    }
}

fn write_type(f: &mut fmt::Formatter<'_>, dt: Option<DataType>) -> fmt::Result {
    match dt {
        Some(dt) => write!(f, "{}", dt),
        None => f.write_str("null"),
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates a schema error.
    pub fn schema(field: impl Into<String>, rule: SchemaRule) -> Self {
        Error::Schema {
            field: field.into(),
            rule,
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(field: impl Into<String>, expected: DataType, got: DataType) -> Self {
        Error::TypeMismatch {
            field: field.into(),
            expected,
            got,
        }
    }

    /// Creates a not-nullable error.
    pub fn not_nullable(field: impl Into<String>) -> Self {
        Error::NotNullable { field: field.into() }
    }

    /// Creates an unknown field error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Error::UnknownField { field: field.into() }
    }

    /// Creates a schema mismatch error.
    pub fn schema_mismatch(
        property: impl Into<String>,
        expected_position: Option<usize>,
        loaded_position: Option<usize>,
        expected: impl Into<String>,
        got: impl Into<String>,
    ) -> Self {
        Error::SchemaMismatch {
            property: property.into(),
            expected_position,
            loaded_position,
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Creates a corrupt file error. `line` is 0-based.
    pub fn corrupt(line: usize, message: impl Into<String>) -> Self {
        Error::CorruptFile {
            line,
            message: message.into(),
        }
    }

    /// Returns the phase this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Schema { .. } => ErrorCategory::Schema,
            Error::TypeMismatch { .. }
            | Error::NotNullable { .. }
            | Error::ProviderFailed { .. }
            | Error::UnknownField { .. }
            | Error::EmptyCondition
            | Error::ConditionTypeMismatch { .. }
            | Error::NotComparable { .. }
            | Error::InvalidInterval { .. }
            | Error::NotString { .. }
            | Error::EmptyArray
            | Error::MixedType { .. } => ErrorCategory::Validation,
            Error::DuplicatePrimaryKey { .. } | Error::DuplicateUniqueValue { .. } => {
                ErrorCategory::Integrity
            }
            Error::SchemaMismatch { .. }
            | Error::CorruptFile { .. }
            | Error::InvalidCounter { .. }
            | Error::Io { .. } => ErrorCategory::Persistence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::type_mismatch("age", DataType::Number, DataType::String);
        assert!(err.to_string().contains("Type mismatch"));
        assert!(err.to_string().contains("age"));

        let err = Error::not_nullable("name");
        assert!(err.to_string().contains("name"));

        let err = Error::schema("id", SchemaRule::MissingPrimaryKey);
        assert!(err.to_string().contains("primary key"));
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            Error::schema("x", SchemaRule::NoFields).category(),
            ErrorCategory::Schema
        );
        assert_eq!(Error::EmptyArray.category(), ErrorCategory::Validation);
        assert_eq!(
            Error::DuplicatePrimaryKey {
                field: "id".into(),
                value: Value::Number(1.0),
            }
            .category(),
            ErrorCategory::Integrity
        );
        assert_eq!(Error::corrupt(3, "bad").category(), ErrorCategory::Persistence);
    }

    #[test]
    fn test_schema_mismatch_display() {
        let err = Error::schema_mismatch("types", Some(1), Some(2), "number", "string");
        let msg = err.to_string();
        assert!(msg.contains("types"));
        assert!(msg.contains("at 1"));
        assert!(msg.contains("at 2"));
    }
}
