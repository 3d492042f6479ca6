//! Ordered rule sets attached to component kinds.

use std::rc::Rc;

use crate::props::Props;
use crate::theme::Theme;

use super::css::parse_declaration_block;
use super::declaration::{DeclValue, Declaration};
use super::error::{CssError, MissingThemeKey};

/// An ordered, immutable sequence of declarations.
///
/// Declarations cascade by position: a later declaration for the same
/// property fully replaces an earlier one. There is no specificity and no
/// partial merging of values.
///
/// # Example
///
/// ```rust
/// use veneer::StyleRule;
///
/// let rule = StyleRule::new()
///     .set("padding", "12px 24px")
///     .set("border-radius", "2px")
///     .token("background-color", "primary")
///     .token_or("color", "buttonText", "white")
///     .with("padding", |props, _theme| {
///         Ok(if props.truthy("large") { "16px 25px" } else { "12px 24px" }.into())
///     });
///
/// assert_eq!(rule.len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleRule {
    declarations: Vec<Declaration>,
}

impl StyleRule {
    /// Creates an empty rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a CSS declaration block into a rule.
    ///
    /// The input is the text between braces: `property: value;` pairs.
    /// A whole-value `var(--name)` becomes a theme-token reference and
    /// `var(--name, fallback)` a reference with a hard-coded fallback.
    /// Nested rules (such as `&:hover { .. }` blocks) are not declarations
    /// and are rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veneer::{Props, StyleRule, Theme};
    ///
    /// let rule = StyleRule::from_css(
    ///     "padding: 12px 24px; background-color: var(--primary);",
    /// ).unwrap();
    ///
    /// let theme = Theme::new().set("primary", "hotpink");
    /// let decl = &rule.declarations()[1];
    /// assert_eq!(decl.evaluate(&Props::new(), &theme).unwrap(), "hotpink");
    /// ```
    pub fn from_css(css: &str) -> Result<Self, CssError> {
        Ok(Self {
            declarations: parse_declaration_block(css)?,
        })
    }

    /// Appends a literal declaration, returning `self` for chaining.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations
            .push(Declaration::new(property, DeclValue::Literal(value.into())));
        self
    }

    /// Appends a theme-token reference.
    ///
    /// Resolution fails with [`MissingThemeKey`] for that declaration when
    /// the path has no value.
    pub fn token(mut self, property: impl Into<String>, path: impl Into<String>) -> Self {
        self.declarations.push(Declaration::new(
            property,
            DeclValue::Token {
                path: path.into(),
                fallback: None,
            },
        ));
        self
    }

    /// Appends a theme-token reference with a hard-coded fallback.
    pub fn token_or(
        mut self,
        property: impl Into<String>,
        path: impl Into<String>,
        fallback: impl Into<String>,
    ) -> Self {
        self.declarations.push(Declaration::new(
            property,
            DeclValue::Token {
                path: path.into(),
                fallback: Some(fallback.into()),
            },
        ));
        self
    }

    /// Appends a computed declaration.
    pub fn with<F>(mut self, property: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Props, &Theme) -> Result<String, MissingThemeKey> + 'static,
    {
        self.declarations
            .push(Declaration::new(property, DeclValue::Computed(Rc::new(f))));
        self
    }

    /// Appends an already-built declaration.
    pub fn push(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Returns a rule containing this rule's declarations followed by
    /// `other`'s.
    pub fn concat(&self, other: &StyleRule) -> StyleRule {
        let mut declarations = self.declarations.clone();
        declarations.extend(other.declarations.iter().cloned());
        StyleRule { declarations }
    }

    /// The declarations in cascade order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Returns the number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if the rule has no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_new_is_empty() {
        let rule = StyleRule::new();
        assert!(rule.is_empty());
        assert_eq!(rule.len(), 0);
    }

    #[test]
    fn test_rule_preserves_order() {
        let rule = StyleRule::new()
            .set("padding", "12px")
            .token("color", "textColor")
            .set("padding", "24px");

        let properties: Vec<&str> = rule.declarations().iter().map(|d| d.property()).collect();
        assert_eq!(properties, vec!["padding", "color", "padding"]);
    }

    #[test]
    fn test_concat_appends() {
        let base = StyleRule::new().set("padding", "12px");
        let extra = StyleRule::new().set("color", "white");
        let combined = base.concat(&extra);

        assert_eq!(combined.len(), 2);
        assert_eq!(combined.declarations()[0].property(), "padding");
        assert_eq!(combined.declarations()[1].property(), "color");
        // Inputs are untouched.
        assert_eq!(base.len(), 1);
        assert_eq!(extra.len(), 1);
    }

    #[test]
    fn test_with_captures_props_logic() {
        let rule = StyleRule::new().with("padding", |props, _theme| {
            Ok(if props.truthy("large") {
                "16px 25px"
            } else {
                "12px 24px"
            }
            .into())
        });

        let theme = Theme::new();
        let decl = &rule.declarations()[0];
        assert_eq!(
            decl.evaluate(&Props::new().set("large", true), &theme).unwrap(),
            "16px 25px"
        );
        assert_eq!(decl.evaluate(&Props::new(), &theme).unwrap(), "12px 24px");
    }
}
