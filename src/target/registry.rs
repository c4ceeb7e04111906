//! Explicit target registration.
//!
//! The host discovers available targets through an explicit table mapping
//! target name to a factory closure, populated at a well-defined point
//! (program start or config load). Nothing registers itself implicitly.
//!
//! Each [`TargetRegistry::resolve`] call runs the factory and hands back a
//! fresh descriptor: one descriptor instance per build invocation, owned by
//! the caller and discarded once the host has read it.

use std::collections::BTreeMap;

use thiserror::Error;

use super::descriptor::{TargetContext, TargetDescriptor, TargetType};

/// Factory producing a descriptor from a host context.
pub type TargetFactory = Box<dyn Fn(&TargetContext) -> TargetDescriptor>;

/// Error type for registry operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// Two factories registered under the same name
    #[error("Name collision: target '{name}' is already registered")]
    NameCollision { name: String },
    /// Target name contains reserved characters
    #[error("Target name '{name}' contains reserved character '{ch}' (names cannot contain ':' or '/' or whitespace)")]
    InvalidName { name: String, ch: char },
}

/// Table of known build targets for one project.
///
/// Uses a `BTreeMap` so `names()` and iteration order are deterministic.
#[derive(Default)]
pub struct TargetRegistry {
    factories: BTreeMap<String, TargetFactory>,
}

impl std::fmt::Debug for TargetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetRegistry").field("targets", &self.names()).finish()
    }
}

impl TargetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { factories: BTreeMap::new() }
    }

    /// Create a registry pre-seeded with the four standard flavors
    /// ("editor", "game", "client", "server").
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        // Infallible: the four names are distinct and reserved-char free.
        let _ = registry.register("editor", Box::new(TargetDescriptor::editor));
        let _ = registry.register("game", Box::new(TargetDescriptor::game));
        let _ = registry.register("client", Box::new(TargetDescriptor::client));
        let _ = registry.register("server", Box::new(TargetDescriptor::server));
        registry
    }

    /// Register a factory under a name.
    ///
    /// Registration is strict: a second factory under the same name is a
    /// collision error, not a silent replacement.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: TargetFactory,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        validate_target_name(&name)?;

        if self.factories.contains_key(&name) {
            return Err(RegistryError::NameCollision { name });
        }
        self.factories.insert(name, factory);
        Ok(())
    }

    /// Construct the descriptor registered under `name` for the given context.
    ///
    /// Returns `None` for unregistered names. Repeated calls with the same
    /// context yield field-for-field identical descriptors.
    pub fn resolve(&self, name: &str, ctx: &TargetContext) -> Option<TargetDescriptor> {
        self.factories.get(name).map(|factory| factory(ctx))
    }

    /// Construct every registered descriptor, in name order.
    pub fn resolve_all(&self, ctx: &TargetContext) -> Vec<TargetDescriptor> {
        self.factories.values().map(|factory| factory(ctx)).collect()
    }

    /// Registered target names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Whether a target name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// Validate that a target name is usable as a registry key.
fn validate_target_name(name: &str) -> Result<(), RegistryError> {
    for ch in [':', '/'] {
        if name.contains(ch) {
            return Err(RegistryError::InvalidName { name: name.to_string(), ch });
        }
    }
    if let Some(ch) = name.chars().find(|c| c.is_whitespace()) {
        return Err(RegistryError::InvalidName { name: name.to_string(), ch });
    }
    Ok(())
}

/// Register a custom flavor that wraps [`TargetDescriptor::new`].
///
/// Convenience for callers that only need a name and a type, without
/// writing the closure by hand.
pub fn simple_factory(name: &str, target_type: TargetType) -> TargetFactory {
    let name = name.to_string();
    Box::new(move |ctx| TargetDescriptor::new(name.clone(), target_type, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry = TargetRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.names().is_empty());
    }

    #[test]
    fn test_with_defaults_registers_four_flavors() {
        let registry = TargetRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["client", "editor", "game", "server"]);
    }

    #[test]
    fn test_resolve_constructs_descriptor() {
        let registry = TargetRegistry::with_defaults();
        let ctx = TargetContext::new("sandbox0");

        let desc = registry.resolve("editor", &ctx).unwrap();
        assert_eq!(desc.target_type, TargetType::Editor);
        assert_eq!(desc.modules, vec!["sandbox0".to_string()]);
    }

    #[test]
    fn test_resolve_unregistered_returns_none() {
        let registry = TargetRegistry::with_defaults();
        let ctx = TargetContext::new("sandbox0");
        assert!(registry.resolve("nightly", &ctx).is_none());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let registry = TargetRegistry::with_defaults();
        let ctx = TargetContext::new("sandbox0");

        let a = registry.resolve("server", &ctx).unwrap();
        let b = registry.resolve("server", &ctx).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_register_collision_is_error() {
        let mut registry = TargetRegistry::with_defaults();
        let result = registry.register("editor", simple_factory("editor", TargetType::Editor));

        match result.unwrap_err() {
            RegistryError::NameCollision { name } => assert_eq!(name, "editor"),
            e => panic!("Expected NameCollision, got {:?}", e),
        }
    }

    #[test]
    fn test_register_reserved_char_is_error() {
        let mut registry = TargetRegistry::new();
        let result = registry.register("bad:name", simple_factory("bad", TargetType::Game));
        assert!(matches!(result.unwrap_err(), RegistryError::InvalidName { ch: ':', .. }));

        let result = registry.register("bad name", simple_factory("bad", TargetType::Game));
        assert!(matches!(result.unwrap_err(), RegistryError::InvalidName { ch: ' ', .. }));
    }

    #[test]
    fn test_custom_factory() {
        let mut registry = TargetRegistry::new();
        registry
            .register(
                "nightly",
                Box::new(|ctx| TargetDescriptor::editor(ctx).with_module("nightly_tools")),
            )
            .unwrap();

        let ctx = TargetContext::new("sandbox0");
        let desc = registry.resolve("nightly", &ctx).unwrap();
        assert_eq!(desc.modules, vec!["sandbox0", "nightly_tools"]);
    }

    #[test]
    fn test_resolve_all_in_name_order() {
        let registry = TargetRegistry::with_defaults();
        let ctx = TargetContext::new("sandbox0");

        let all = registry.resolve_all(&ctx);
        let names: Vec<_> = all.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["client", "editor", "game", "server"]);
    }

    #[test]
    fn test_simple_factory() {
        let factory = simple_factory("dedicated", TargetType::Server);
        let ctx = TargetContext::new("sandbox0");

        let desc = factory(&ctx);
        assert_eq!(desc.name, "dedicated");
        assert_eq!(desc.target_type, TargetType::Server);
        assert_eq!(desc.primary_module(), "sandbox0");
    }
}
