//! Style rules, declarations, and their resolved output.
//!
//! A [`StyleRule`] is an ordered list of declarations. Each declaration is
//! a literal `(property, value)` pair, a theme-token reference (optionally
//! with a hard-coded fallback), or a computed function of
//! `(props, theme)`. Later declarations for the same property fully replace
//! earlier ones: cascade by declaration order, not specificity.
//!
//! Rules can be built with the chaining API or parsed from a CSS
//! declaration block (see [`StyleRule::from_css`]); the resolved output is
//! a flat, ordered [`Declarations`] mapping for the render host.

mod css;
mod declaration;
mod declarations;
mod error;
mod rule;

pub use declaration::{ComputeFn, DeclValue, Declaration};
pub use declarations::Declarations;
pub use error::{CssError, MissingThemeKey};
pub use rule::StyleRule;
