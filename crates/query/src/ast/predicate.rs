//! Operator predicates for query conditions.
//!
//! A `Predicate` can only be built through its constructors, which validate
//! operands up front: ordering operators need numbers or dates, intervals need
//! ordered bounds of one type, patterns need strings, and membership lists
//! need at least one value and a single value type.

use alloc::vec::Vec;
use core::cmp::Ordering;
use sylph_core::pattern_match::like;
use sylph_core::{Error, Result, Value};

/// Evaluation type for predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalType {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    Between,
    NotBetween,
    Like,
    In,
    NotIn,
}

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Single(EvalType, Value),
    Interval(EvalType, [Value; 2]),
    List(EvalType, Vec<Value>),
}

/// A validated predicate over one field's value.
#[derive(Clone, Debug, PartialEq)]
pub struct Predicate(Op);

impl Predicate {
    /// Strict equality.
    pub fn equal(value: impl Into<Value>) -> Self {
        Predicate(Op::Single(EvalType::Eq, value.into()))
    }

    /// Strict inequality.
    pub fn not_equal(value: impl Into<Value>) -> Self {
        Predicate(Op::Single(EvalType::Ne, value.into()))
    }

    pub fn greater_than(value: impl Into<Value>) -> Result<Self> {
        Self::ordering(EvalType::Gt, value.into())
    }

    pub fn less_than(value: impl Into<Value>) -> Result<Self> {
        Self::ordering(EvalType::Lt, value.into())
    }

    pub fn greater_than_or_equal(value: impl Into<Value>) -> Result<Self> {
        Self::ordering(EvalType::Ge, value.into())
    }

    pub fn less_than_or_equal(value: impl Into<Value>) -> Result<Self> {
        Self::ordering(EvalType::Le, value.into())
    }

    /// Inclusive interval `lower <= v <= upper`.
    pub fn between(lower: impl Into<Value>, upper: impl Into<Value>) -> Result<Self> {
        Self::interval(EvalType::Between, lower.into(), upper.into())
    }

    /// Complement of `between` over values of the bounds' type.
    pub fn not_between(lower: impl Into<Value>, upper: impl Into<Value>) -> Result<Self> {
        Self::interval(EvalType::NotBetween, lower.into(), upper.into())
    }

    /// SQL LIKE match; `%` matches any run of characters, `_` exactly one.
    pub fn like(pattern: impl Into<Value>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.as_str().is_none() {
            return Err(Error::NotString {
                got: pattern.data_type(),
            });
        }
        Ok(Predicate(Op::Single(EvalType::Like, pattern)))
    }

    /// Membership in a non-empty list of values sharing one type.
    pub fn in_list<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::list(EvalType::In, values.into_iter().map(Into::into).collect())
    }

    /// Non-membership in a non-empty list of values sharing one type.
    pub fn not_in_list<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::list(EvalType::NotIn, values.into_iter().map(Into::into).collect())
    }

    fn ordering(eval_type: EvalType, value: Value) -> Result<Self> {
        if !value.is_comparable() {
            return Err(Error::NotComparable {
                got: value.data_type(),
            });
        }
        Ok(Predicate(Op::Single(eval_type, value)))
    }

    fn interval(eval_type: EvalType, lower: Value, upper: Value) -> Result<Self> {
        for bound in [&lower, &upper] {
            if !bound.is_comparable() {
                return Err(Error::NotComparable {
                    got: bound.data_type(),
                });
            }
        }
        match lower.compare(&upper) {
            Some(Ordering::Less) | Some(Ordering::Equal) => {
                Ok(Predicate(Op::Interval(eval_type, [lower, upper])))
            }
            _ => Err(Error::InvalidInterval { lower, upper }),
        }
    }

    fn list(eval_type: EvalType, values: Vec<Value>) -> Result<Self> {
        let first = match values.first() {
            Some(v) => v.data_type(),
            None => return Err(Error::EmptyArray),
        };
        if let Some(other) = values.iter().find(|v| v.data_type() != first) {
            return Err(Error::MixedType {
                first,
                other: other.data_type(),
            });
        }
        Ok(Predicate(Op::List(eval_type, values)))
    }

    /// Returns the operator.
    pub fn eval_type(&self) -> EvalType {
        match &self.0 {
            Op::Single(t, _) | Op::Interval(t, _) | Op::List(t, _) => *t,
        }
    }

    /// Returns the operand values (one, two bounds, or the list).
    pub fn operands(&self) -> &[Value] {
        match &self.0 {
            Op::Single(_, v) => core::slice::from_ref(v),
            Op::Interval(_, bounds) => bounds,
            Op::List(_, values) => values,
        }
    }

    /// Returns the equality operand if this is an `Eq` predicate.
    pub fn equality_key(&self) -> Option<&Value> {
        match &self.0 {
            Op::Single(EvalType::Eq, v) => Some(v),
            _ => None,
        }
    }

    /// Evaluates the predicate against a field value.
    pub fn eval(&self, value: &Value) -> bool {
        match &self.0 {
            Op::Single(EvalType::Eq, x) => value == x,
            Op::Single(EvalType::Ne, x) => value != x,
            Op::Single(EvalType::Gt, x) => value.compare(x) == Some(Ordering::Greater),
            Op::Single(EvalType::Lt, x) => value.compare(x) == Some(Ordering::Less),
            Op::Single(EvalType::Ge, x) => {
                matches!(value.compare(x), Some(Ordering::Greater | Ordering::Equal))
            }
            Op::Single(EvalType::Le, x) => {
                matches!(value.compare(x), Some(Ordering::Less | Ordering::Equal))
            }
            Op::Single(EvalType::Like, pattern) => match (value.as_str(), pattern.as_str()) {
                (Some(s), Some(p)) => like(s, p),
                _ => false,
            },
            Op::Interval(EvalType::Between, [lower, upper]) => within(value, lower, upper) == Some(true),
            Op::Interval(EvalType::NotBetween, [lower, upper]) => {
                within(value, lower, upper) == Some(false)
            }
            Op::List(EvalType::In, values) => values.contains(value),
            Op::List(EvalType::NotIn, values) => !values.contains(value),
            _ => false,
        }
    }
}

/// `None` when `value` is not comparable with the bounds.
fn within(value: &Value, lower: &Value, upper: &Value) -> Option<bool> {
    let lo = value.compare(lower)?;
    let hi = value.compare(upper)?;
    Some(lo != Ordering::Less && hi != Ordering::Greater)
}

impl From<Value> for Predicate {
    fn from(value: Value) -> Self {
        Predicate::equal(value)
    }
}
