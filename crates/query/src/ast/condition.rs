//! Query conditions.
//!
//! A `Condition` maps field names to predicates; a row matches when every
//! predicate holds. Binding a condition to a schema resolves field positions
//! and checks operand types.

use super::predicate::{EvalType, Predicate};
use alloc::string::String;
use alloc::vec::Vec;
use sylph_core::schema::TableSchema;
use sylph_core::{Error, Result, Row, Value};

/// Field name to predicate map, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Condition {
    terms: Vec<(String, Predicate)>,
}

impl Condition {
    /// Creates an empty condition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality predicate on a field.
    pub fn eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(field, Predicate::equal(value))
    }

    /// Adds a predicate on a field, replacing any earlier one for that field.
    pub fn with(mut self, field: impl Into<String>, predicate: Predicate) -> Self {
        let field = field.into();
        match self.terms.iter_mut().find(|(name, _)| *name == field) {
            Some(term) => term.1 = predicate,
            None => self.terms.push((field, predicate)),
        }
        self
    }

    /// Gets the predicate for a field.
    pub fn get(&self, field: &str) -> Option<&Predicate> {
        self.terms
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, p)| p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Predicate)> {
        self.terms.iter().map(|(name, p)| (name.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Resolves field positions against a schema and validates operands.
    ///
    /// Every operand must have the field's type; null operands are allowed
    /// only on nullable fields.
    pub fn bind(&self, schema: &TableSchema) -> Result<BoundCondition<'_>> {
        if self.terms.is_empty() {
            return Err(Error::EmptyCondition);
        }

        let mut terms = Vec::with_capacity(self.terms.len());
        for (name, predicate) in &self.terms {
            let pos = schema
                .field_index(name)
                .ok_or_else(|| Error::unknown_field(name.as_str()))?;
            let expected = schema.types()[pos];
            let nullable = schema.nullables()[pos];

            for operand in predicate.operands() {
                let fits = match operand.data_type() {
                    None => nullable && predicate.eval_type() != EvalType::Like,
                    Some(dt) => dt == expected,
                };
                if !fits {
                    return Err(Error::ConditionTypeMismatch {
                        field: name.clone(),
                        expected,
                        got: operand.data_type(),
                    });
                }
            }
            terms.push((pos, predicate));
        }
        Ok(BoundCondition { terms })
    }
}

impl<N: Into<String>> FromIterator<(N, Predicate)> for Condition {
    fn from_iter<T: IntoIterator<Item = (N, Predicate)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Condition::new(), |cond, (name, p)| cond.with(name, p))
    }
}

/// A condition whose fields are resolved to schema positions.
#[derive(Clone, Debug)]
pub struct BoundCondition<'a> {
    terms: Vec<(usize, &'a Predicate)>,
}

impl<'a> BoundCondition<'a> {
    /// Returns `(field position, predicate)` pairs in condition order.
    pub fn terms(&self) -> &[(usize, &'a Predicate)] {
        &self.terms
    }

    /// Returns true if every predicate holds for the row.
    pub fn matches(&self, row: &Row) -> bool {
        self.terms
            .iter()
            .all(|(pos, p)| row.get(*pos).map_or(false, |v| p.eval(v)))
    }
}
