//! Field definition for sylph table schemas.

use super::default::DefaultKind;
use crate::error::{Error, Result, SchemaRule};
use crate::types::DataType;
use crate::value::Value;
use alloc::string::String;

/// A field definition as supplied by the caller, before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDef {
    name: String,
    data_type: DataType,
    nullable: bool,
    default: Option<DefaultKind>,
    index: bool,
    unique: bool,
    primary_key: bool,
    auto_increment: bool,
}

impl FieldDef {
    /// Creates a non-nullable, unindexed field definition.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: false,
            default: None,
            index: false,
            unique: false,
            primary_key: false,
            auto_increment: false,
        }
    }

    /// Creates a field definition from a type tag (`"string"`, `"number"`, ...).
    pub fn parse(name: impl Into<String>, type_tag: &str) -> Result<Self> {
        let name = name.into();
        match DataType::from_tag(type_tag) {
            Some(dt) => Ok(Self::new(name, dt)),
            None => Err(Error::schema(name, SchemaRule::UnsupportedType)),
        }
    }

    /// Sets whether this field accepts null.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets a literal default value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultKind::Literal(value.into()));
        self
    }

    /// Sets a default of any kind.
    pub fn default_kind(mut self, kind: DefaultKind) -> Self {
        self.default = Some(kind);
        self
    }

    /// Sets whether this field has a plain (non-unique) index.
    pub fn index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }

    /// Sets whether this field has a unique index.
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Sets whether this field is the primary key.
    pub fn primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = primary_key;
        self
    }

    /// Sets whether this field takes auto-incremented values.
    pub fn auto_increment(mut self, auto_increment: bool) -> Self {
        self.auto_increment = auto_increment;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[inline]
    pub fn get_default(&self) -> Option<&DefaultKind> {
        self.default.as_ref()
    }

    #[inline]
    pub fn is_index(&self) -> bool {
        self.index
    }

    #[inline]
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    #[inline]
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    #[inline]
    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_new() {
        let f = FieldDef::new("id", DataType::Number);
        assert_eq!(f.name(), "id");
        assert_eq!(f.data_type(), DataType::Number);
        assert!(!f.is_nullable());
        assert!(!f.is_unique());
        assert!(f.get_default().is_none());
    }

    #[test]
    fn test_field_builder() {
        let f = FieldDef::new("name", DataType::String)
            .nullable(true)
            .unique(true)
            .default_value("unknown");

        assert!(f.is_nullable());
        assert!(f.is_unique());
        assert_eq!(
            f.get_default(),
            Some(&DefaultKind::Literal(Value::String("unknown".into())))
        );
    }

    #[test]
    fn test_field_parse() {
        let f = FieldDef::parse("born", "date").unwrap();
        assert_eq!(f.data_type(), DataType::Date);

        match FieldDef::parse("blob", "bytes") {
            Err(Error::Schema { field, rule }) => {
                assert_eq!(field, "blob");
                assert_eq!(rule, SchemaRule::UnsupportedType);
            }
            _ => panic!("Expected schema error"),
        }
    }
}
