//! Registry of named component specs.

use std::collections::HashMap;

use crate::props::Props;
use crate::theme::Theme;

use super::resolve::Resolution;
use super::spec::ComponentSpec;

/// A collection of specs keyed by their names.
///
/// This is the dispatch surface a render host works against: given a
/// component name from the composition tree, look up its spec and resolve
/// it for the instance's props and the ambient theme.
///
/// # Example
///
/// ```rust
/// use veneer::{ComponentSpec, Components, Props, StyleRule, Theme};
///
/// let button = ComponentSpec::new("button", StyleRule::new().set("cursor", "pointer"));
/// let primary = button.extend("primary-button", StyleRule::new().set("border", "none"));
///
/// let components = Components::new().add(button).add(primary);
///
/// let resolution = components
///     .resolve("primary-button", &Props::new(), &Theme::new())
///     .unwrap();
/// assert_eq!(resolution.declarations().get("cursor"), Some("pointer"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Components {
    specs: HashMap<String, ComponentSpec>,
}

impl Components {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a spec under its name, returning `self` for chaining.
    ///
    /// A spec with the same name is replaced.
    pub fn add(mut self, spec: ComponentSpec) -> Self {
        self.specs.insert(spec.name().to_string(), spec);
        self
    }

    /// Returns the spec registered under `name`.
    pub fn get(&self, name: &str) -> Option<&ComponentSpec> {
        self.specs.get(name)
    }

    /// Returns true if a spec with the given name exists.
    pub fn has(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    /// Resolves the named spec, or `None` if it isn't registered.
    pub fn resolve(&self, name: &str, props: &Props, theme: &Theme) -> Option<Resolution> {
        self.specs.get(name).map(|spec| spec.resolve(props, theme))
    }

    /// The registered names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    /// Returns the number of registered specs.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns true if no specs are registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
