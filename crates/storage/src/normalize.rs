//! Value normalization for inserts.
//!
//! Turns a partial entity into a full, schema-aligned value array: fills
//! auto-increment keys and defaults, and enforces type and nullability. It
//! reads the schema only and never touches table state.

use alloc::format;
use alloc::vec::Vec;
use sylph_core::schema::{DefaultResolver, ResolveError, TableSchema};
use sylph_core::{DataType, Entity, Error, Result, Value};

/// Resolves insert payloads against a schema.
pub struct ValueNormalizer;

impl ValueNormalizer {
    /// Checks that every entity key names a schema field.
    pub fn check_fields(schema: &TableSchema, entity: &Entity) -> Result<()> {
        for (name, _) in entity.iter() {
            if schema.field_index(name).is_none() {
                return Err(Error::unknown_field(name));
            }
        }
        Ok(())
    }

    /// Resolves one value per schema field, in field order.
    ///
    /// `next_auto_increment` is the key the auto-increment primary key gets if
    /// the schema has one; any caller-supplied value for that field is ignored.
    pub fn resolve(
        schema: &TableSchema,
        entity: &Entity,
        resolver: &dyn DefaultResolver,
        next_auto_increment: u64,
    ) -> Result<Vec<Value>> {
        Self::check_fields(schema, entity)?;

        let mut values = Vec::with_capacity(schema.len());
        for pos in 0..schema.len() {
            values.push(Self::resolve_field(schema, pos, entity, resolver, next_auto_increment)?);
        }
        Ok(values)
    }

    fn resolve_field(
        schema: &TableSchema,
        pos: usize,
        entity: &Entity,
        resolver: &dyn DefaultResolver,
        next_auto_increment: u64,
    ) -> Result<Value> {
        let name = &schema.fields()[pos];
        let data_type = schema.types()[pos];
        let nullable = schema.nullables()[pos];

        if schema.is_auto_increment() && pos == schema.pk() {
            return Ok(Value::Number(next_auto_increment as f64));
        }

        match entity.get(name) {
            None => match &schema.defaults()[pos] {
                Some(kind) => {
                    let value = resolver.resolve(kind).map_err(|e| Error::ProviderFailed {
                        field: name.clone(),
                        message: match e {
                            ResolveError::Unknown(provider) => {
                                format!("no provider registered as {}", provider)
                            }
                            ResolveError::Failed(message) => message,
                        },
                    })?;
                    Self::check_value(name, data_type, nullable, value)
                }
                None if nullable => Ok(Value::Null),
                None => Err(Error::not_nullable(name)),
            },
            Some(value) => Self::check_value(name, data_type, nullable, value.clone()),
        }
    }

    fn check_value(
        name: &str,
        data_type: DataType,
        nullable: bool,
        value: Value,
    ) -> Result<Value> {
        match value.data_type() {
            None if nullable => Ok(value),
            None => Err(Error::not_nullable(name)),
            Some(dt) if dt == data_type => Ok(value),
            Some(dt) => Err(Error::type_mismatch(name, data_type, dt)),
        }
    }
}
