//! Table configuration and schema validation.
//!
//! `TableConfig` is what the caller hands in; `TableSchema` is the validated,
//! immutable result that every other component reads. Validation happens once,
//! in `TableSchema::normalize`, and a table is never constructed from a
//! configuration that failed it.

use super::default::{DefaultKind, DefaultResolver, ResolveError};
use super::field::FieldDef;
use crate::error::{Error, Result, SchemaRule};
use crate::types::DataType;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Construction config for a table.
#[derive(Clone, Debug, Default)]
pub struct TableConfig {
    table_name: String,
    fields: Vec<FieldDef>,
}

impl TableConfig {
    /// Creates an empty config for the named table.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field definition.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends several field definitions.
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(fields);
        self
    }

    #[inline]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    #[inline]
    pub fn field_defs(&self) -> &[FieldDef] {
        &self.fields
    }
}

/// A validated table schema.
///
/// All per-field vectors are aligned to field position.
#[derive(Clone, Debug, PartialEq)]
pub struct TableSchema {
    name: String,
    fields: Vec<String>,
    types: Vec<DataType>,
    nullables: Vec<bool>,
    defaults: Vec<Option<DefaultKind>>,
    indexes: Vec<usize>,
    uniques: Vec<usize>,
    pk: usize,
    auto_increment: bool,
    field_index: BTreeMap<String, usize>,
}

impl TableSchema {
    /// Validates a table config into a schema.
    ///
    /// Generated defaults are resolved once here to check their type; the
    /// resolved value is discarded.
    pub fn normalize(config: &TableConfig, resolver: &dyn DefaultResolver) -> Result<Self> {
        let name = config.table_name();
        if !is_valid_name(name) {
            return Err(Error::schema(name, SchemaRule::InvalidTableName));
        }
        let defs = config.field_defs();
        if defs.is_empty() {
            return Err(Error::schema(name, SchemaRule::NoFields));
        }

        let mut field_index = BTreeMap::new();
        let mut pk = None;
        let mut indexes = Vec::new();
        let mut uniques = Vec::new();

        for (pos, def) in defs.iter().enumerate() {
            if !is_valid_name(def.name()) {
                return Err(Error::schema(def.name(), SchemaRule::InvalidFieldName));
            }
            if field_index.insert(def.name().to_string(), pos).is_some() {
                return Err(Error::schema(def.name(), SchemaRule::DuplicateFieldName));
            }

            if def.is_primary_key() {
                if pk.is_some() {
                    return Err(Error::schema(def.name(), SchemaRule::DuplicatePrimaryKey));
                }
                if def.is_index() || def.is_unique() {
                    return Err(Error::schema(def.name(), SchemaRule::PrimaryKeyIndexed));
                }
                if def.is_nullable() {
                    return Err(Error::schema(def.name(), SchemaRule::NullablePrimaryKey));
                }
                pk = Some(pos);
            }

            if def.is_auto_increment() {
                if !def.is_primary_key() {
                    return Err(Error::schema(
                        def.name(),
                        SchemaRule::AutoIncrementWithoutPrimaryKey,
                    ));
                }
                if def.data_type() != DataType::Number {
                    return Err(Error::schema(def.name(), SchemaRule::AutoIncrementNotNumber));
                }
                if def.get_default().is_some() {
                    return Err(Error::schema(def.name(), SchemaRule::AutoIncrementWithDefault));
                }
            }

            // Per-field flags make the index and unique sets disjoint by construction
            // once this holds.
            if def.is_index() && def.is_unique() {
                return Err(Error::schema(def.name(), SchemaRule::IndexAndUnique));
            }
            if def.is_index() {
                indexes.push(pos);
            }
            if def.is_unique() {
                uniques.push(pos);
            }

            if let Some(kind) = def.get_default() {
                check_default(def, kind, resolver)?;
            }
        }

        let pk = pk.ok_or_else(|| Error::schema(name, SchemaRule::MissingPrimaryKey))?;

        Ok(Self {
            name: name.to_string(),
            fields: defs.iter().map(|d| d.name().to_string()).collect(),
            types: defs.iter().map(|d| d.data_type()).collect(),
            nullables: defs.iter().map(|d| d.is_nullable()).collect(),
            defaults: defs.iter().map(|d| d.get_default().cloned()).collect(),
            indexes,
            uniques,
            pk,
            auto_increment: defs[pk].is_auto_increment(),
            field_index,
        })
    }

    /// Returns the table name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns field names in position order.
    #[inline]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[inline]
    pub fn types(&self) -> &[DataType] {
        &self.types
    }

    #[inline]
    pub fn nullables(&self) -> &[bool] {
        &self.nullables
    }

    #[inline]
    pub fn defaults(&self) -> &[Option<DefaultKind>] {
        &self.defaults
    }

    /// Positions of plain-indexed fields.
    #[inline]
    pub fn indexes(&self) -> &[usize] {
        &self.indexes
    }

    /// Positions of unique fields, excluding the primary key.
    #[inline]
    pub fn uniques(&self) -> &[usize] {
        &self.uniques
    }

    /// Position of the primary key.
    #[inline]
    pub fn pk(&self) -> usize {
        self.pk
    }

    /// Name of the primary key field.
    pub fn pk_name(&self) -> &str {
        &self.fields[self.pk]
    }

    #[inline]
    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }

    /// Returns the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false for a validated schema.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Gets a field position by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.field_index.get(name).copied()
    }

    /// Returns true if the field at `pos` is the primary key or declared unique.
    pub fn is_unique_at(&self, pos: usize) -> bool {
        pos == self.pk || self.uniques.contains(&pos)
    }

    /// Returns true if the field at `pos` has a plain index.
    pub fn is_indexed_at(&self, pos: usize) -> bool {
        self.indexes.contains(&pos)
    }
}

fn check_default(def: &FieldDef, kind: &DefaultKind, resolver: &dyn DefaultResolver) -> Result<()> {
    let value = match resolver.resolve(kind) {
        Ok(value) => value,
        Err(ResolveError::Unknown(_)) => {
            return Err(Error::schema(def.name(), SchemaRule::UnknownProvider))
        }
        Err(ResolveError::Failed(_)) => {
            return Err(Error::schema(def.name(), SchemaRule::DefaultProviderFailed))
        }
    };
    match value.data_type() {
        None if !def.is_nullable() => Err(Error::schema(def.name(), SchemaRule::NullDefault)),
        Some(dt) if dt != def.data_type() => {
            Err(Error::schema(def.name(), SchemaRule::DefaultTypeMismatch))
        }
        _ => Ok(()),
    }
}

/// Checks `[A-Za-z][A-Za-z0-9_]*`.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
