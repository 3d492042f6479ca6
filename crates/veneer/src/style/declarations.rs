//! The resolved output handed to the render host.

use indexmap::IndexMap;
use serde::Serialize;

/// A flat, ordered `property → value` mapping.
///
/// This is the whole render-host boundary: one `Declarations` per component
/// instance per render pass. Properties keep the position of their first
/// write; a later write for the same property replaces the value in place
/// (last-write-wins, no merging of partial values).
///
/// The type serializes as a plain JSON/YAML object for hosts on the other
/// side of a process boundary.
///
/// # Example
///
/// ```rust
/// use veneer::{ComponentSpec, Props, StyleRule, Theme};
///
/// let spec = ComponentSpec::new(
///     "button",
///     StyleRule::new()
///         .set("padding", "12px 24px")
///         .set("padding", "16px 25px"),
/// );
/// let declarations = spec.resolve(&Props::new(), &Theme::new()).into_declarations();
///
/// assert_eq!(declarations.get("padding"), Some("16px 25px"));
/// assert_eq!(declarations.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Declarations {
    entries: IndexMap<String, String>,
}

impl Declarations {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any earlier value in place.
    pub(crate) fn set(&mut self, property: &str, value: String) {
        self.entries.insert(property.to_string(), value);
    }

    /// Returns the resolved value for a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries.get(property).map(String::as_str)
    }

    /// Returns true if the property has a resolved value.
    pub fn contains(&self, property: &str) -> bool {
        self.entries.contains_key(property)
    }

    /// Iterates `(property, value)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Returns the number of resolved properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing resolved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the mapping as CSS declaration text, one per line.
    ///
    /// A convenience for hosts (and debugging) that want the block form
    /// back; the mapping itself remains the interface.
    pub fn to_css_block(&self) -> String {
        let mut out = String::new();
        for (property, value) in self.iter() {
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out
    }
}

impl<'a> IntoIterator for &'a Declarations {
    type Item = (&'a str, &'a str);
    type IntoIter = std::vec::IntoIter<(&'a str, &'a str)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().collect::<Vec<_>>().into_iter()
    }
}
