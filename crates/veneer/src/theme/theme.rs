//! The ambient token map driving style choices.
//!
//! Themes are named collections of design tokens (colors, dimensions) that
//! flow down a composition tree. They support both programmatic
//! construction and YAML/JSON file loading.
//!
//! # Construction Methods
//!
//! ## Programmatic (Builder API)
//!
//! ```rust
//! use veneer::Theme;
//!
//! let theme = Theme::new()
//!     .set("primary", "hotpink")
//!     .set("buttonText", "white")
//!     // Aliases reference other tokens
//!     .alias("accent", "primary")
//!     // Dotted paths create nested groups
//!     .set("spacing.md", "16px");
//!
//! assert_eq!(theme.get("accent"), Some("hotpink"));
//! assert_eq!(theme.get("spacing.md"), Some("16px"));
//! ```
//!
//! ## From YAML
//!
//! ```rust
//! use veneer::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! primary: hotpink
//! buttonText: white
//! accent: $primary
//! modes:
//!   dark:
//!     pageBackground: "#1e1e1e"
//! "##).unwrap();
//!
//! assert_eq!(theme.get("modes.dark.pageBackground"), Some("#1e1e1e"));
//! ```
//!
//! # Immutability
//!
//! A theme is never mutated once provided to a scope: switching modes or
//! applying user overrides produces a new theme ([`Theme::for_mode`],
//! [`Theme::merge`]) that supersedes the old one wholesale.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::style::MissingThemeKey;

use super::adaptive::ColorMode;
use super::error::{ThemeError, TokenValidationError};

/// Reserved top-level group holding per-mode token overrides.
pub const MODES_GROUP: &str = "modes";

/// A single token entry in a theme.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// A literal value (color string, dimension, any CSS-ready text).
    Value(String),
    /// A reference to another token by dotted path.
    Alias(String),
    /// A nested group of tokens (e.g. `modes`, `spacing`).
    Group(HashMap<String, TokenValue>),
}

/// An ambient named-value mapping driving style choices.
///
/// Tokens are addressed by dotted path and may alias one another. Lookup
/// follows alias chains; a dangling alias or a cycle resolves to nothing
/// (use [`validate`](Theme::validate) for early detection).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    /// Theme name (optional, typically derived from a filename).
    name: Option<String>,
    /// The token tree.
    tokens: HashMap<String, TokenValue>,
}

impl Theme {
    /// Creates an empty, unnamed theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            tokens: HashMap::new(),
        }
    }

    /// Sets the name on this theme, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the theme name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets a token value at a dotted path, returning `self` for chaining.
    ///
    /// Intermediate groups are created as needed; an existing token at the
    /// path is replaced.
    pub fn set(mut self, path: &str, value: impl Into<String>) -> Self {
        self.insert(path, TokenValue::Value(value.into()));
        self
    }

    /// Sets an alias token referencing another token by dotted path.
    pub fn alias(mut self, path: &str, target: impl Into<String>) -> Self {
        self.insert(path, TokenValue::Alias(target.into()));
        self
    }

    /// Inserts another theme's tokens as a group at a dotted path.
    ///
    /// This is how per-mode sub-themes are attached:
    ///
    /// ```rust
    /// use veneer::Theme;
    ///
    /// let theme = Theme::new()
    ///     .set("pageBackground", "#ffffff")
    ///     .group("modes.dark", Theme::new().set("pageBackground", "#1e1e1e"));
    ///
    /// assert_eq!(theme.get("modes.dark.pageBackground"), Some("#1e1e1e"));
    /// ```
    pub fn group(mut self, path: &str, theme: Theme) -> Self {
        self.insert(path, TokenValue::Group(theme.tokens));
        self
    }

    fn insert(&mut self, path: &str, value: TokenValue) {
        let mut segments: Vec<&str> = path.split('.').collect();
        let last = match segments.pop() {
            Some(last) => last,
            None => return,
        };

        let mut map = &mut self.tokens;
        for segment in segments {
            let entry = map
                .entry(segment.to_string())
                .or_insert_with(|| TokenValue::Group(HashMap::new()));
            if !matches!(entry, TokenValue::Group(_)) {
                *entry = TokenValue::Group(HashMap::new());
            }
            map = match entry {
                TokenValue::Group(inner) => inner,
                _ => unreachable!("normalized to a group above"),
            };
        }
        map.insert(last.to_string(), value);
    }

    /// Returns the raw entry at a dotted path, without following aliases.
    pub fn raw(&self, path: &str) -> Option<&TokenValue> {
        let mut segments = path.split('.');
        let mut current = self.tokens.get(segments.next()?)?;
        for segment in segments {
            match current {
                TokenValue::Group(map) => current = map.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Looks up a token value by dotted path, following alias chains.
    ///
    /// Returns `None` for absent paths, for groups (a group is not a
    /// value), and for dangling or cyclic aliases. Note that an empty
    /// string is a present value, not an absence.
    pub fn get(&self, path: &str) -> Option<&str> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut current = path.to_string();

        loop {
            if !visited.insert(current.clone()) {
                return None; // Cycle detected
            }
            match self.raw(&current)? {
                TokenValue::Value(value) => return Some(value),
                TokenValue::Alias(next) => current = next.clone(),
                TokenValue::Group(_) => return None,
            }
        }
    }

    /// Looks up a token value, failing with [`MissingThemeKey`] if absent.
    ///
    /// This is the lookup computed declarations compose with `?`.
    pub fn require(&self, path: &str) -> Result<&str, MissingThemeKey> {
        self.get(path).ok_or_else(|| MissingThemeKey::new(path))
    }

    /// Validates that all alias tokens resolve to values.
    ///
    /// Returns the first dangling alias, alias-to-group, or cycle found.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veneer::Theme;
    ///
    /// let valid = Theme::new().set("primary", "hotpink").alias("accent", "primary");
    /// assert!(valid.validate().is_ok());
    ///
    /// let dangling = Theme::new().alias("accent", "missing");
    /// assert!(dangling.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), TokenValidationError> {
        let mut aliases = Vec::new();
        collect_aliases(&self.tokens, "", &mut aliases);
        for (name, target) in &aliases {
            self.validate_alias_chain(name, target)?;
        }
        Ok(())
    }

    /// Validates a single alias chain starting from `name` -> `target`.
    fn validate_alias_chain(&self, name: &str, target: &str) -> Result<(), TokenValidationError> {
        let mut current = target.to_string();
        let mut path = vec![name.to_string()];

        loop {
            // Check if the target exists
            let value =
                self.raw(&current)
                    .ok_or_else(|| TokenValidationError::UnresolvedAlias {
                        from: path.last().unwrap().clone(),
                        to: current.clone(),
                    })?;

            path.push(current.clone());

            // Check for a cycle (the name already appeared in our path)
            if path[..path.len() - 1].contains(&current) {
                return Err(TokenValidationError::CycleDetected { path });
            }

            match value {
                TokenValue::Value(_) => return Ok(()),
                TokenValue::Group(_) => {
                    return Err(TokenValidationError::AliasToGroup {
                        from: path[path.len() - 2].clone(),
                        to: current,
                    })
                }
                TokenValue::Alias(next) => current = next.clone(),
            }
        }
    }

    /// Merges another theme into this one.
    ///
    /// Tokens from `other` take precedence; groups merge recursively. This
    /// allows layering themes, e.g. a base theme plus user overrides.
    pub fn merge(mut self, other: Theme) -> Self {
        merge_tokens(&mut self.tokens, other.tokens);
        self
    }

    /// Produces the wholesale theme for a color mode.
    ///
    /// Tokens from the `modes.<mode>` group are overlaid on the base
    /// tokens; the `modes` group itself is dropped from the result. The
    /// receiver is unchanged: mode switching supersedes the provided
    /// theme, it never mutates it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veneer::{ColorMode, Theme};
    ///
    /// let theme = Theme::new()
    ///     .set("pageBackground", "#ffffff")
    ///     .set("primary", "hotpink")
    ///     .group("modes.dark", Theme::new().set("pageBackground", "#1e1e1e"));
    ///
    /// let dark = theme.for_mode(ColorMode::Dark);
    /// assert_eq!(dark.get("pageBackground"), Some("#1e1e1e"));
    /// // Tokens without a mode override are unchanged.
    /// assert_eq!(dark.get("primary"), Some("hotpink"));
    /// ```
    pub fn for_mode(&self, mode: ColorMode) -> Theme {
        let mut tokens = self.tokens.clone();
        let modes = tokens.remove(MODES_GROUP);

        if let Some(TokenValue::Group(groups)) = modes {
            if let Some(TokenValue::Group(overrides)) = groups.get(mode.key()) {
                merge_tokens(&mut tokens, overrides.clone());
            }
        }

        Theme {
            name: self.name.clone(),
            tokens,
        }
    }

    /// Creates a theme from YAML content.
    ///
    /// Scalars become token values, `$name` strings become aliases, and
    /// nested mappings become groups:
    ///
    /// ```rust
    /// use veneer::Theme;
    ///
    /// let theme = Theme::from_yaml(r#"
    /// primary: hotpink
    /// accent: $primary
    /// spacing:
    ///   md: 16px
    /// "#).unwrap();
    ///
    /// assert_eq!(theme.get("spacing.md"), Some("16px"));
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
                message: e.to_string(),
            })?;
        if value.is_null() {
            return Ok(Self::new());
        }
        Ok(Self {
            name: None,
            tokens: yaml_tokens(&value, "")?,
        })
    }

    /// Creates a theme from JSON content.
    ///
    /// The same shape as [`from_yaml`](Theme::from_yaml): strings, numbers,
    /// and booleans become values, `$name` strings aliases, objects groups.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ThemeError::Parse {
                message: e.to_string(),
            })?;
        Ok(Self {
            name: None,
            tokens: json_tokens(&value, "")?,
        })
    }

    /// Loads a theme from a YAML or JSON file.
    ///
    /// The theme name is derived from the filename (without extension).
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the file cannot be read, has an
    /// unsupported extension, or fails to parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Load {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        let theme = match extension {
            "yaml" | "yml" => Self::from_yaml(&content)?,
            "json" => Self::from_json(&content)?,
            other => {
                return Err(ThemeError::Load {
                    message: format!(
                        "unsupported theme extension '{}' for {}",
                        other,
                        path.display()
                    ),
                })
            }
        };

        let name = path.file_stem().and_then(|s| s.to_str());
        Ok(match name {
            Some(name) => theme.with_name(name),
            None => theme,
        })
    }

    /// Returns the number of leaf tokens (values and aliases).
    pub fn len(&self) -> usize {
        count_leaves(&self.tokens)
    }

    /// Returns true if no tokens are defined.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn merge_tokens(base: &mut HashMap<String, TokenValue>, overlay: HashMap<String, TokenValue>) {
    for (key, value) in overlay {
        match base.entry(key) {
            Entry::Occupied(mut slot) => match (slot.get_mut(), value) {
                (TokenValue::Group(existing), TokenValue::Group(incoming)) => {
                    merge_tokens(existing, incoming);
                }
                (slot_value, value) => *slot_value = value,
            },
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}

fn count_leaves(map: &HashMap<String, TokenValue>) -> usize {
    map.values()
        .map(|value| match value {
            TokenValue::Group(inner) => count_leaves(inner),
            _ => 1,
        })
        .sum()
}

fn collect_aliases(
    map: &HashMap<String, TokenValue>,
    at: &str,
    out: &mut Vec<(String, String)>,
) {
    for (key, value) in map {
        let path = join_path(at, key);
        match value {
            TokenValue::Alias(target) => out.push((path, target.clone())),
            TokenValue::Group(inner) => collect_aliases(inner, &path, out),
            TokenValue::Value(_) => {}
        }
    }
}

fn join_path(at: &str, key: &str) -> String {
    if at.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", at, key)
    }
}

fn label(at: &str) -> String {
    if at.is_empty() {
        "(root)".to_string()
    } else {
        at.to_string()
    }
}

fn scalar_token(s: &str) -> TokenValue {
    match s.strip_prefix('$') {
        Some(target) => TokenValue::Alias(target.to_string()),
        None => TokenValue::Value(s.to_string()),
    }
}

fn yaml_tokens(
    value: &serde_yaml::Value,
    at: &str,
) -> Result<HashMap<String, TokenValue>, ThemeError> {
    let mapping = value.as_mapping().ok_or_else(|| ThemeError::InvalidToken {
        token: label(at),
        message: "expected a mapping".to_string(),
    })?;

    let mut tokens = HashMap::new();
    for (key, entry) in mapping {
        let key = key.as_str().ok_or_else(|| ThemeError::InvalidToken {
            token: label(at),
            message: "token names must be strings".to_string(),
        })?;
        let path = join_path(at, key);
        tokens.insert(key.to_string(), yaml_token(entry, &path)?);
    }
    Ok(tokens)
}

fn yaml_token(value: &serde_yaml::Value, at: &str) -> Result<TokenValue, ThemeError> {
    match value {
        serde_yaml::Value::String(s) => Ok(scalar_token(s)),
        serde_yaml::Value::Number(n) => Ok(TokenValue::Value(n.to_string())),
        serde_yaml::Value::Bool(b) => Ok(TokenValue::Value(b.to_string())),
        serde_yaml::Value::Mapping(_) => Ok(TokenValue::Group(yaml_tokens(value, at)?)),
        other => Err(ThemeError::InvalidToken {
            token: label(at),
            message: format!("expected a scalar or mapping, got {:?}", other),
        }),
    }
}

fn json_tokens(
    value: &serde_json::Value,
    at: &str,
) -> Result<HashMap<String, TokenValue>, ThemeError> {
    let object = value.as_object().ok_or_else(|| ThemeError::InvalidToken {
        token: label(at),
        message: "expected an object".to_string(),
    })?;

    let mut tokens = HashMap::new();
    for (key, entry) in object {
        let path = join_path(at, key);
        tokens.insert(key.clone(), json_token(entry, &path)?);
    }
    Ok(tokens)
}

fn json_token(value: &serde_json::Value, at: &str) -> Result<TokenValue, ThemeError> {
    match value {
        serde_json::Value::String(s) => Ok(scalar_token(s)),
        serde_json::Value::Number(n) => Ok(TokenValue::Value(n.to_string())),
        serde_json::Value::Bool(b) => Ok(TokenValue::Value(b.to_string())),
        serde_json::Value::Object(_) => Ok(TokenValue::Group(json_tokens(value, at)?)),
        other => Err(ThemeError::InvalidToken {
            token: label(at),
            message: format!("expected a scalar or object, got {:?}", other),
        }),
    }
}
