//! Single property declarations: literal, theme-token reference, or computed.

use std::fmt;
use std::rc::Rc;

use crate::props::Props;
use crate::theme::Theme;

use super::error::MissingThemeKey;

/// Signature for computed declarations.
///
/// Shared with `Rc`: resolution is single-threaded and rules are cloned
/// freely along spec chains.
pub type ComputeFn = Rc<dyn Fn(&Props, &Theme) -> Result<String, MissingThemeKey>>;

/// The value side of a declaration.
///
/// Literals pass through unchanged. Token references read the theme by
/// dotted path; an optional hard-coded fallback makes the reference total.
/// Computed values are functions of `(props, theme)` and may fail with
/// [`MissingThemeKey`] when they require an absent token.
#[derive(Clone)]
pub enum DeclValue {
    /// A literal value, emitted as-is.
    Literal(String),
    /// A theme-token reference by dotted path.
    Token {
        /// Dotted token path (`primary`, `spacing.md`).
        path: String,
        /// Hard-coded value used when the path is absent.
        fallback: Option<String>,
    },
    /// A function of the instance props and the ambient theme.
    Computed(ComputeFn),
}

impl DeclValue {
    /// Evaluates this value against the given props and theme.
    pub fn evaluate(&self, props: &Props, theme: &Theme) -> Result<String, MissingThemeKey> {
        match self {
            DeclValue::Literal(value) => Ok(value.clone()),
            DeclValue::Token { path, fallback } => match theme.get(path) {
                Some(value) => Ok(value.to_string()),
                None => fallback
                    .clone()
                    .ok_or_else(|| MissingThemeKey::new(path.clone())),
            },
            DeclValue::Computed(f) => f(props, theme),
        }
    }
}

impl fmt::Debug for DeclValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclValue::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            DeclValue::Token { path, fallback } => f
                .debug_struct("Token")
                .field("path", path)
                .field("fallback", fallback)
                .finish(),
            DeclValue::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

/// One property declaration within a rule.
#[derive(Debug, Clone)]
pub struct Declaration {
    property: String,
    value: DeclValue,
}

impl Declaration {
    /// Creates a declaration for `property`.
    pub fn new(property: impl Into<String>, value: DeclValue) -> Self {
        Self {
            property: property.into(),
            value,
        }
    }

    /// The property name this declaration sets.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The declaration's value.
    pub fn value(&self) -> &DeclValue {
        &self.value
    }

    /// Evaluates the declaration's value against props and theme.
    pub fn evaluate(&self, props: &Props, theme: &Theme) -> Result<String, MissingThemeKey> {
        self.value.evaluate(props, theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_passes_through() {
        let decl = Declaration::new("padding", DeclValue::Literal("12px 24px".into()));
        let value = decl.evaluate(&Props::new(), &Theme::new()).unwrap();
        assert_eq!(value, "12px 24px");
    }

    #[test]
    fn test_token_reads_theme() {
        let theme = Theme::new().set("primary", "hotpink");
        let decl = Declaration::new(
            "background-color",
            DeclValue::Token {
                path: "primary".into(),
                fallback: None,
            },
        );
        assert_eq!(decl.evaluate(&Props::new(), &theme).unwrap(), "hotpink");
    }

    #[test]
    fn test_token_fallback_on_absent_path() {
        let decl = Declaration::new(
            "color",
            DeclValue::Token {
                path: "buttonText".into(),
                fallback: Some("white".into()),
            },
        );
        assert_eq!(decl.evaluate(&Props::new(), &Theme::new()).unwrap(), "white");
    }

    #[test]
    fn test_token_missing_without_fallback() {
        let decl = Declaration::new(
            "border",
            DeclValue::Token {
                path: "buttonBorder".into(),
                fallback: None,
            },
        );
        let err = decl.evaluate(&Props::new(), &Theme::new()).unwrap_err();
        assert_eq!(err, MissingThemeKey::new("buttonBorder"));
    }

    #[test]
    fn test_computed_sees_props_and_theme() {
        let theme = Theme::new().set("primary", "hotpink");
        let decl = Declaration::new(
            "background-color",
            DeclValue::Computed(Rc::new(|props: &Props, theme: &Theme| {
                if props.truthy("hovered") {
                    theme.require("primary").map(str::to_string)
                } else {
                    Ok("none".to_string())
                }
            })),
        );

        let idle = decl.evaluate(&Props::new(), &theme).unwrap();
        assert_eq!(idle, "none");

        let hovered = decl
            .evaluate(&Props::new().set("hovered", true), &theme)
            .unwrap();
        assert_eq!(hovered, "hotpink");
    }

    #[test]
    fn test_debug_hides_closures() {
        let decl = Declaration::new(
            "color",
            DeclValue::Computed(Rc::new(|_: &Props, _: &Theme| Ok("x".into()))),
        );
        assert!(format!("{:?}", decl).contains("Computed(<fn>)"));
    }
}
