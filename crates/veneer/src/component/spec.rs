//! Component style definitions and variant composition.

use std::rc::Rc;

use crate::props::Props;
use crate::style::StyleRule;
use crate::theme::Theme;

use super::resolve::{resolve, Resolution};

/// A named style definition with at most one parent.
///
/// A spec carries no behavior, only a rule chain and a name the render
/// host can dispatch layout semantics on (e.g. "renders as a clickable
/// control"). Variants are derived with [`extend`](ComponentSpec::extend),
/// the single composition primitive: the effective rules of a spec are its
/// parent's effective rules followed by its own.
///
/// Specs are defined once (typically at module load), never mutated, and
/// cheap to clone: the chain is shared.
///
/// # Example
///
/// ```rust
/// use veneer::{ComponentSpec, Props, StyleRule, Theme};
///
/// let button = ComponentSpec::new(
///     "button",
///     StyleRule::new().set("padding", "12px 24px").set("border-radius", "2px"),
/// );
/// let primary = button.extend(
///     "primary-button",
///     StyleRule::new().token("background-color", "primary").set("border", "none"),
/// );
///
/// let theme = Theme::new().set("primary", "hotpink");
/// let declarations = primary.resolve(&Props::new(), &theme).into_declarations();
/// assert_eq!(declarations.get("padding"), Some("12px 24px"));
/// assert_eq!(declarations.get("background-color"), Some("hotpink"));
/// ```
#[derive(Debug, Clone)]
pub struct ComponentSpec {
    inner: Rc<Inner>,
}

#[derive(Debug)]
struct Inner {
    name: String,
    rules: StyleRule,
    parent: Option<ComponentSpec>,
}

impl ComponentSpec {
    /// Creates a base spec with no parent.
    pub fn new(name: impl Into<String>, rules: StyleRule) -> Self {
        Self {
            inner: Rc::new(Inner {
                name: name.into(),
                rules,
                parent: None,
            }),
        }
    }

    /// Derives a variant whose parent is this spec.
    ///
    /// The variant's own rules are appended after the inherited chain, so
    /// they override same-named properties. Single-parent chains only;
    /// there is no multiple inheritance to reason about.
    pub fn extend(&self, name: impl Into<String>, rules: StyleRule) -> Self {
        Self {
            inner: Rc::new(Inner {
                name: name.into(),
                rules,
                parent: Some(self.clone()),
            }),
        }
    }

    /// The identity the render host dispatches on.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// This spec's own rules (excluding inherited ones).
    pub fn rules(&self) -> &StyleRule {
        &self.inner.rules
    }

    /// The parent spec, if this is a variant.
    pub fn parent(&self) -> Option<&ComponentSpec> {
        self.inner.parent.as_ref()
    }

    /// The full chain, oldest ancestor first.
    pub fn chain(&self) -> Vec<&ComponentSpec> {
        let mut chain = Vec::new();
        let mut current = Some(self);
        while let Some(spec) = current {
            chain.push(spec);
            current = spec.parent();
        }
        chain.reverse();
        chain
    }

    /// Chain length, counting this spec.
    pub fn depth(&self) -> usize {
        self.chain().len()
    }

    /// Resolves this spec's style for the given props and theme.
    ///
    /// Convenience for [`resolve`](crate::resolve).
    pub fn resolve(&self, props: &Props, theme: &Theme) -> Resolution {
        resolve(self, props, theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_new_has_no_parent() {
        let button = ComponentSpec::new("button", StyleRule::new());
        assert_eq!(button.name(), "button");
        assert!(button.parent().is_none());
        assert_eq!(button.depth(), 1);
    }

    #[test]
    fn test_extend_links_parent() {
        let button = ComponentSpec::new("button", StyleRule::new());
        let primary = button.extend("primary-button", StyleRule::new());

        assert_eq!(primary.name(), "primary-button");
        assert_eq!(primary.parent().unwrap().name(), "button");
        assert_eq!(primary.depth(), 2);
    }

    #[test]
    fn test_chain_is_oldest_first() {
        let base = ComponentSpec::new("base", StyleRule::new());
        let mid = base.extend("mid", StyleRule::new());
        let leaf = mid.extend("leaf", StyleRule::new());

        let names: Vec<&str> = leaf.chain().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["base", "mid", "leaf"]);
    }

    #[test]
    fn test_extend_shares_parent_chain() {
        let button = ComponentSpec::new("button", StyleRule::new().set("padding", "12px"));
        let primary = button.extend("primary-button", StyleRule::new());
        let secondary = button.extend("secondary-button", StyleRule::new());

        // Both variants point at the same base.
        assert!(Rc::ptr_eq(
            &primary.parent().unwrap().inner,
            &secondary.parent().unwrap().inner
        ));
    }
}
