//! Style resolution: from a spec, props, and theme to flat declarations.

use crate::props::Props;
use crate::style::{Declarations, MissingThemeKey};
use crate::theme::Theme;

use super::spec::ComponentSpec;

/// A per-declaration resolution failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    /// Property whose declaration failed.
    pub property: String,
    /// The failure.
    pub error: MissingThemeKey,
}

/// Outcome of resolving one component instance for one render pass.
///
/// Resolution never aborts: declarations that dereference an absent theme
/// path are reported in [`missing`](Resolution::missing) and contribute no
/// value, exactly as if they were not written, so the render host falls
/// back to its own default for that property. Sibling declarations and
/// sibling components are unaffected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    declarations: Declarations,
    missing: Vec<Unresolved>,
}

impl Resolution {
    /// The resolved `property → value` mapping, in output order.
    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    /// Consumes the resolution, returning the declarations.
    pub fn into_declarations(self) -> Declarations {
        self.declarations
    }

    /// Declarations that failed with [`MissingThemeKey`], in chain order.
    pub fn missing(&self) -> &[Unresolved] {
        &self.missing
    }

    /// Returns true if every declaration resolved.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Resolves a spec's style for the given props and theme.
///
/// The pipeline, in order:
///
/// 1. Walk the spec's parent links, oldest ancestor first.
/// 2. Evaluate each declaration in chain order: literals pass through,
///    token references and computed declarations consult the theme and may
///    fail with [`MissingThemeKey`].
/// 3. A later declaration for a property fully replaces an earlier one
///    (last-write-wins; no partial merging). A failed declaration replaces
///    nothing.
///
/// Resolution is pure: identical inputs yield identical output, and
/// neither the spec, the props, nor the theme is mutated.
///
/// # Example
///
/// ```rust
/// use veneer::{resolve, ComponentSpec, Props, StyleRule, Theme};
///
/// let spec = ComponentSpec::new(
///     "badge",
///     StyleRule::new()
///         .set("border-radius", "2px")
///         .token("border", "buttonBorder"),
/// );
///
/// // `buttonBorder` is absent: the property is omitted, not an error.
/// let theme = Theme::new().set("primary", "");
/// let resolution = resolve(&spec, &Props::new(), &theme);
///
/// assert_eq!(resolution.declarations().get("border-radius"), Some("2px"));
/// assert_eq!(resolution.declarations().get("border"), None);
/// assert_eq!(resolution.missing()[0].error.path, "buttonBorder");
/// ```
pub fn resolve(spec: &ComponentSpec, props: &Props, theme: &Theme) -> Resolution {
    let mut declarations = Declarations::new();
    let mut missing = Vec::new();

    for ancestor in spec.chain() {
        for declaration in ancestor.rules().declarations() {
            match declaration.evaluate(props, theme) {
                Ok(value) => declarations.set(declaration.property(), value),
                Err(error) => missing.push(Unresolved {
                    property: declaration.property().to_string(),
                    error,
                }),
            }
        }
    }

    Resolution {
        declarations,
        missing,
    }
}
