//! Error types for style rules and resolution.
//!
//! Resolution has a single failure kind, [`MissingThemeKey`]: a declaration
//! dereferenced a theme path with no value. It is always local to one
//! declaration and never aborts resolution of siblings. [`CssError`] covers
//! the parsing boundary of [`StyleRule::from_css`](crate::StyleRule::from_css)
//! only.

use thiserror::Error;

/// A declaration dereferenced a theme path that has no value.
///
/// Raised by token references without a fallback and by computed
/// declarations that require a theme token. Reported per declaration; the
/// affected property is omitted from the output so the render host can fall
/// back to its own default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("theme has no value at '{path}'")]
pub struct MissingThemeKey {
    /// The dotted token path that failed to resolve.
    pub path: String,
}

impl MissingThemeKey {
    /// Creates a failure for the given token path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Error type for CSS declaration-block parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssError {
    /// Tokenizer or structure error (includes nested rules, which are not
    /// part of a declaration block).
    #[error("failed to parse declarations: {message}")]
    Parse {
        /// Error detail from the CSS tokenizer.
        message: String,
    },

    /// `var()` appeared alongside other value tokens.
    ///
    /// A theme reference must be the entire declaration value; anything more
    /// belongs in a computed declaration.
    #[error("declaration '{property}' mixes var() with other tokens")]
    MixedVar {
        /// Property whose value was rejected.
        property: String,
    },

    /// A `var()` argument was not a custom-property name.
    #[error("declaration '{property}' references '{name}': custom properties must start with '--'")]
    InvalidVarName {
        /// Property whose value was rejected.
        property: String,
        /// The offending argument.
        name: String,
    },

    /// A declaration had no value tokens.
    #[error("declaration '{property}' has an empty value")]
    EmptyValue {
        /// Property whose value was rejected.
        property: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_theme_key_display() {
        let err = MissingThemeKey::new("buttonBorder");
        assert_eq!(err.to_string(), "theme has no value at 'buttonBorder'");
    }

    #[test]
    fn test_css_error_display() {
        let err = CssError::MixedVar {
            property: "border".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("border"));
        assert!(msg.contains("var()"));
    }
}
