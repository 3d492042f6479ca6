//! Themes, theme scopes, and adaptive light/dark modes.
//!
//! A [`Theme`] is a swappable map of design tokens that flows down a
//! composition tree through a [`ThemeContext`]. Themes never mutate in
//! place: a light/dark toggle or a user-override layer produces a new theme
//! that supersedes the old one wholesale.
//!
//! ## Design Decision: Token-Level Adaptation
//!
//! Most tokens (spacing, radii, brand colors) look fine in both color
//! modes; only a handful need adjustment. Modes are therefore expressed as
//! overrides inside a single theme (a `modes.dark`/`modes.light` group)
//! rather than as two parallel theme files, and
//! [`Theme::for_mode`] overlays the relevant group:
//!
//! ```yaml
//! # Shared across modes
//! primary: hotpink
//!
//! # Mode-specific overrides
//! pageBackground: "#ffffff"
//! modes:
//!   dark:
//!     pageBackground: "#1e1e1e"
//! ```
//!
//! ## Color Mode Detection
//!
//! [`detect_color_mode`] queries the OS for the user's preferred scheme.
//! Override it for testing with [`set_mode_detector`].

mod adaptive;
mod context;
mod error;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, set_mode_detector, ColorMode};
pub use context::ThemeContext;
pub use error::{ThemeError, TokenValidationError};
pub use theme::{Theme, TokenValue, MODES_GROUP};
