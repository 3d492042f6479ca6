//! Theme-related error types.
//!
//! These cover the file boundary (parsing themes from YAML/JSON) and token
//! validation. Resolution itself has a single error kind,
//! [`MissingThemeKey`](crate::MissingThemeKey), which lives with the style
//! types.

use thiserror::Error;

/// Error returned when token validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenValidationError {
    /// An alias references a token that doesn't exist.
    #[error("token '{from}' aliases non-existent token '{to}'")]
    UnresolvedAlias {
        /// The alias token.
        from: String,
        /// The missing target path.
        to: String,
    },

    /// An alias references a group; aliases must target values.
    #[error("token '{from}' aliases group '{to}'")]
    AliasToGroup {
        /// The alias token.
        from: String,
        /// The group path.
        to: String,
    },

    /// A cycle was detected in alias resolution.
    #[error("cycle detected in token aliases: {}", .path.join(" -> "))]
    CycleDetected {
        /// The alias chain that loops.
        path: Vec<String>,
    },
}

/// Error type for theme parsing and loading failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// YAML/JSON parse error.
    #[error("failed to parse theme: {message}")]
    Parse {
        /// Error message from the underlying parser.
        message: String,
    },

    /// A token entry had an unsupported shape.
    #[error("invalid token '{token}': {message}")]
    InvalidToken {
        /// Dotted path of the offending entry.
        token: String,
        /// Description of what was wrong.
        message: String,
    },

    /// File loading error.
    #[error("failed to load theme: {message}")]
    Load {
        /// Error message from the file loader.
        message: String,
    },

    /// Alias validation error (dangling reference or cycle).
    #[error(transparent)]
    Validation(#[from] TokenValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_alias_display() {
        let err = TokenValidationError::UnresolvedAlias {
            from: "accent".to_string(),
            to: "missing".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("accent"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_cycle_display() {
        let err = TokenValidationError::CycleDetected {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        assert!(err.to_string().contains("a -> b -> a"));
    }

    #[test]
    fn test_theme_error_wraps_validation() {
        let err: ThemeError = TokenValidationError::UnresolvedAlias {
            from: "x".to_string(),
            to: "y".to_string(),
        }
        .into();
        assert!(matches!(err, ThemeError::Validation(_)));
    }
}
