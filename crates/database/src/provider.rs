//! Default value providers.
//!
//! `ProviderRegistry` resolves every `DefaultKind`: literals directly, random
//! UUIDs and timestamps from the system, and named providers from closures
//! registered by the embedding application.

use hashbrown::HashMap;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use sylph_core::schema::{DefaultKind, DefaultResolver, ResolveError};
use sylph_core::Value;
use uuid::Uuid;

/// A zero-argument value generator.
pub type ProviderFn = Box<dyn Fn() -> Result<Value, String>>;

/// Named default providers.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, ProviderFn>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider, replacing any provider with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, provider: F) -> &mut Self
    where
        F: Fn() -> Result<Value, String> + 'static,
    {
        self.providers.insert(name.into(), Box::new(provider));
        self
    }

    /// Builder form of `register`.
    pub fn with<F>(mut self, name: impl Into<String>, provider: F) -> Self
    where
        F: Fn() -> Result<Value, String> + 'static,
    {
        self.register(name, provider);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl DefaultResolver for ProviderRegistry {
    fn resolve(&self, kind: &DefaultKind) -> Result<Value, ResolveError> {
        match kind {
            DefaultKind::Literal(v) => Ok(v.clone()),
            DefaultKind::RandomUuid => Ok(Value::String(Uuid::new_v4().to_string())),
            DefaultKind::CurrentTimestamp => now_millis().map(Value::Date),
            DefaultKind::Provider(name) => match self.providers.get(name) {
                Some(provider) => provider().map_err(ResolveError::Failed),
                None => Err(ResolveError::Unknown(name.clone())),
            },
        }
    }
}

fn now_millis() -> Result<i64, ResolveError> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| ResolveError::Failed(e.to_string()))?;
    i64::try_from(elapsed.as_millis()).map_err(|e| ResolveError::Failed(e.to_string()))
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ProviderRegistry")
            .field("providers", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_literal_and_generated() {
        let registry = ProviderRegistry::new();
        assert_eq!(
            registry.resolve(&DefaultKind::Literal(Value::from(3))),
            Ok(Value::from(3))
        );

        let id = registry.resolve(&DefaultKind::RandomUuid).unwrap();
        let text = id.as_str().unwrap();
        assert_eq!(text.len(), 36);
        assert!(Uuid::parse_str(text).is_ok());
        assert_ne!(registry.resolve(&DefaultKind::RandomUuid).unwrap(), id);

        let now = registry.resolve(&DefaultKind::CurrentTimestamp).unwrap();
        assert!(now.as_date().unwrap() > 1_600_000_000_000);
    }

    #[test]
    fn test_named_providers() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let registry = ProviderRegistry::new()
            .with("seq", move || {
                counter.set(counter.get() + 1);
                Ok(Value::from(counter.get()))
            })
            .with("broken", || Err("offline".to_string()));

        assert!(registry.contains("seq"));
        assert_eq!(registry.len(), 2);

        let seq = DefaultKind::Provider("seq".into());
        assert_eq!(registry.resolve(&seq), Ok(Value::from(1)));
        assert_eq!(registry.resolve(&seq), Ok(Value::from(2)));
        assert_eq!(calls.get(), 2);

        assert_eq!(
            registry.resolve(&DefaultKind::Provider("broken".into())),
            Err(ResolveError::Failed("offline".into()))
        );
        assert_eq!(
            registry.resolve(&DefaultKind::Provider("missing".into())),
            Err(ResolveError::Unknown("missing".into()))
        );
        assert_eq!(format!("{:?}", registry), r#"ProviderRegistry { providers: ["broken", "seq"] }"#);
    }
}
