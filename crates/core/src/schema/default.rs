//! Default value sources.
//!
//! A default is a closed set of kinds rather than an arbitrary callable, so it
//! can be written to a table file as a tag plus payload and read back without
//! evaluating code. Kinds that need a clock, randomness or user code are
//! resolved through a `DefaultResolver` supplied by the embedding crate.

use crate::value::Value;
use alloc::string::String;

/// Where a field's value comes from when an insert omits it.
#[derive(Clone, Debug, PartialEq)]
pub enum DefaultKind {
    /// A fixed value.
    Literal(Value),
    /// A random v4 UUID rendered as a string.
    RandomUuid,
    /// The current time as a date.
    CurrentTimestamp,
    /// A zero-argument generator registered under this name.
    Provider(String),
}

impl DefaultKind {
    /// Returns the tag stored in the DEFAULT_KIND header.
    pub fn tag(&self) -> &'static str {
        match self {
            DefaultKind::Literal(v) => v.data_type().map_or("null", |dt| dt.tag()),
            DefaultKind::RandomUuid => "uuid",
            DefaultKind::CurrentTimestamp => "timestamp",
            DefaultKind::Provider(_) => "provider",
        }
    }
}

/// Why a default could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// No provider is registered under the requested name.
    Unknown(String),
    /// The provider raised.
    Failed(String),
}

/// Turns a `DefaultKind` into a value.
pub trait DefaultResolver {
    /// Resolves a default to a value. Called once per insert that needs it.
    fn resolve(&self, kind: &DefaultKind) -> Result<Value, ResolveError>;
}

/// Resolver that only understands literal defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct LiteralResolver;

impl DefaultResolver for LiteralResolver {
    fn resolve(&self, kind: &DefaultKind) -> Result<Value, ResolveError> {
        match kind {
            DefaultKind::Literal(v) => Ok(v.clone()),
            DefaultKind::RandomUuid => Err(ResolveError::Unknown("uuid".into())),
            DefaultKind::CurrentTimestamp => Err(ResolveError::Unknown("timestamp".into())),
            DefaultKind::Provider(name) => Err(ResolveError::Unknown(name.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tags() {
        assert_eq!(DefaultKind::Literal(Value::Number(1.0)).tag(), "number");
        assert_eq!(DefaultKind::Literal(Value::Null).tag(), "null");
        assert_eq!(DefaultKind::RandomUuid.tag(), "uuid");
        assert_eq!(DefaultKind::CurrentTimestamp.tag(), "timestamp");
        assert_eq!(DefaultKind::Provider("seq".into()).tag(), "provider");
    }

    #[test]
    fn test_literal_resolver() {
        let r = LiteralResolver;
        assert_eq!(
            r.resolve(&DefaultKind::Literal(Value::Boolean(true))),
            Ok(Value::Boolean(true))
        );
        assert_eq!(
            r.resolve(&DefaultKind::Provider("seq".into())),
            Err(ResolveError::Unknown("seq".into()))
        );
    }
}
