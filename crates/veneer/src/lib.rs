//! # Veneer: themeable style resolution for component trees
//!
//! `veneer` derives a component's rendered style from three inputs: its
//! static rule chain, its per-instance props, and the nearest enclosing
//! theme. The output is a flat, ordered `property → value` mapping that an
//! external render host turns into actual visuals; this crate draws
//! nothing itself.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: ambient token map (colors, spacing), swappable as a whole,
//!   with light/dark mode overlays and YAML/JSON loading
//! - [`ThemeContext`]: explicit, nestable provider scopes; a resolution
//!   always sees the nearest enclosing theme
//! - [`StyleRule`]: ordered declarations, literal or theme/props-dependent,
//!   with last-write-wins cascade by declaration order
//! - [`ComponentSpec`]: a named rule chain; [`ComponentSpec::extend`]
//!   derives variants along a single-parent chain
//! - [`resolve`]: the pure function from `(spec, props, theme)` to
//!   [`Declarations`]
//!
//! ## Quick Start
//!
//! ```rust
//! use veneer::{ComponentSpec, Props, StyleRule, Theme};
//!
//! let theme = Theme::new()
//!     .set("primary", "hotpink")
//!     .set("buttonText", "white");
//!
//! let button = ComponentSpec::new(
//!     "button",
//!     StyleRule::new()
//!         .set("padding", "12px 24px")
//!         .set("border-radius", "2px")
//!         .set("cursor", "pointer"),
//! );
//!
//! let primary = button.extend(
//!     "primary-button",
//!     StyleRule::new()
//!         .token("background-color", "primary")
//!         .token("color", "buttonText")
//!         .set("border", "none"),
//! );
//!
//! let declarations = primary.resolve(&Props::new(), &theme).into_declarations();
//! assert_eq!(declarations.get("background-color"), Some("hotpink"));
//! assert_eq!(declarations.get("padding"), Some("12px 24px"));
//! ```
//!
//! ## Rules from CSS
//!
//! Rule chains can be written as CSS declaration blocks; `var(--token)`
//! references the theme:
//!
//! ```rust
//! use veneer::{ComponentSpec, Props, StyleRule, Theme};
//!
//! let modal = ComponentSpec::new(
//!     "modal",
//!     StyleRule::from_css(
//!         "width: 800px; \
//!          box-shadow: 0 5px 16px rgba(0, 0, 0, 0.2); \
//!          background-color: var(--surface, white);",
//!     ).unwrap(),
//! );
//!
//! let resolution = modal.resolve(&Props::new(), &Theme::new());
//! assert_eq!(resolution.declarations().get("background-color"), Some("white"));
//! ```
//!
//! ## Props and Conditional Declarations
//!
//! ```rust
//! use veneer::{ComponentSpec, Props, StyleRule, Theme};
//!
//! let button = ComponentSpec::new(
//!     "button",
//!     StyleRule::new().with("padding", |props, _theme| {
//!         Ok(if props.truthy("large") { "16px 25px" } else { "12px 24px" }.into())
//!     }),
//! );
//!
//! let theme = Theme::new();
//! let large = button.resolve(&Props::new().set("large", true), &theme);
//! assert_eq!(large.declarations().get("padding"), Some("16px 25px"));
//! ```
//!
//! ## Missing Theme Tokens
//!
//! Resolution never fails as a whole. A declaration that dereferences an
//! absent theme path is reported per declaration and its property omitted,
//! letting the render host fall back to its own default:
//!
//! ```rust
//! use veneer::{ComponentSpec, Props, StyleRule, Theme};
//!
//! let spec = ComponentSpec::new(
//!     "button",
//!     StyleRule::new()
//!         .set("border-radius", "2px")
//!         .token("border", "buttonBorder"),
//! );
//!
//! let theme = Theme::new().set("primary", "");
//! let resolution = spec.resolve(&Props::new(), &theme);
//!
//! assert_eq!(resolution.declarations().get("border-radius"), Some("2px"));
//! assert!(!resolution.declarations().contains("border"));
//! assert_eq!(resolution.missing()[0].error.path, "buttonBorder");
//! ```

pub mod component;
pub mod prelude;
pub mod props;
pub mod style;
pub mod theme;

// Component module exports
pub use component::{resolve, ComponentSpec, Components, Resolution, Unresolved};

// Props exports
pub use props::{Handler, PropValue, Props};

// Style module exports
pub use style::{
    ComputeFn, CssError, DeclValue, Declaration, Declarations, MissingThemeKey, StyleRule,
};

// Theme module exports
pub use theme::{
    detect_color_mode, set_mode_detector, ColorMode, Theme, ThemeContext, ThemeError,
    TokenValidationError, TokenValue, MODES_GROUP,
};
