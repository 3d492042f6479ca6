//! Ambient theme scopes for composition trees.
//!
//! A [`ThemeContext`] is the explicit form of "the nearest enclosing
//! provider": a persistent stack of provided themes that a composition
//! passes down to its children. Providing a theme returns a *child* scope;
//! the parent scope is untouched, so siblings under different providers see
//! different themes and resolution stays pure. There is deliberately no
//! hidden global here.
//!
//! # Example
//!
//! ```rust
//! use veneer::{Theme, ThemeContext};
//!
//! let root = ThemeContext::root();
//! let app = root.provide(Theme::new().set("primary", "hotpink"));
//! let panel = app.provide(Theme::new().set("primary", "rebeccapurple"));
//!
//! // Each scope sees its nearest enclosing theme.
//! assert_eq!(app.current().get("primary"), Some("hotpink"));
//! assert_eq!(panel.current().get("primary"), Some("rebeccapurple"));
//!
//! // No provider: the default theme is empty, not an error.
//! assert!(root.current().is_empty());
//! ```

use std::rc::Rc;

use once_cell::sync::Lazy;

use super::theme::Theme;

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(Theme::new);

/// A lexical stack of provided themes.
///
/// Cheap to clone; child scopes share their ancestors' themes via `Rc`.
/// Scopes follow the composition tree, not the dynamic call stack: a scope
/// handed to a subtree applies to exactly that subtree.
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    stack: Vec<Rc<Theme>>,
}

impl ThemeContext {
    /// Creates the empty root scope (no provider).
    pub fn root() -> Self {
        Self::default()
    }

    /// Establishes `theme` for descendant resolutions, returning the child
    /// scope. The receiving scope is unchanged.
    pub fn provide(&self, theme: Theme) -> ThemeContext {
        let mut stack = self.stack.clone();
        stack.push(Rc::new(theme));
        ThemeContext { stack }
    }

    /// Returns the nearest enclosing theme.
    ///
    /// With no provider in scope this is the default theme (empty), so
    /// literal declarations and hard-coded fallbacks still resolve while
    /// bare token references report
    /// [`MissingThemeKey`](crate::MissingThemeKey). Missing providers are
    /// not an error.
    pub fn current(&self) -> &Theme {
        match self.stack.last() {
            Some(theme) => theme.as_ref(),
            None => &DEFAULT_THEME,
        }
    }

    /// Returns true if any provider encloses this scope.
    pub fn has_provider(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Returns the number of nested providers.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
