//! Convenience re-exports for the common path.
//!
//! ```rust
//! use veneer::prelude::*;
//!
//! let theme = Theme::new().set("primary", "hotpink");
//! let ctx = ThemeContext::root().provide(theme);
//! let badge = ComponentSpec::new("badge", StyleRule::new().token("color", "primary"));
//!
//! let resolution = badge.resolve(&Props::new(), ctx.current());
//! assert_eq!(resolution.declarations().get("color"), Some("hotpink"));
//! ```

pub use crate::component::{resolve, ComponentSpec, Components, Resolution};
pub use crate::props::{Props, PropValue};
pub use crate::style::{Declarations, MissingThemeKey, StyleRule};
pub use crate::theme::{detect_color_mode, ColorMode, Theme, ThemeContext};
