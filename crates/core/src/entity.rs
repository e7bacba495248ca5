//! Field-name-keyed records.
//!
//! An `Entity` is the only shape rows take outside the table: insert payloads
//! are entities (possibly partial), and query results are full entities in
//! schema field order.

use crate::value::Value;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// An ordered field-name → value map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entity {
    fields: Vec<(String, Value)>,
}

impl Entity {
    /// Creates an empty entity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing an earlier value for the same name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a field, replacing an earlier value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Returns true if the field is present (even if null).
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the entity has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Entity {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut entity = Entity::new();
        for (name, value) in iter {
            entity.set(name, value);
        }
        entity
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_entity_set_replaces() {
        let e = Entity::new().with("age", 1).with("age", 2);
        assert_eq!(e.len(), 1);
        assert_eq!(e.get("age"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn test_entity_null_is_present() {
        let e = Entity::new().with("nick", Value::Null);
        assert!(e.contains("nick"));
        assert!(!e.contains("name"));
    }

    #[test]
    fn test_entity_display() {
        let e: Entity = [("id", Value::from(1)), ("name", Value::from("Ann"))]
            .into_iter()
            .collect();
        assert_eq!(e.to_string(), "{id: 1, name: \"Ann\"}");
    }
}
