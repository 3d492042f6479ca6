//! Color mode detection for adaptive themes.
//!
//! A theme may carry a `modes` group with per-mode token overrides (see
//! [`Theme::for_mode`](super::Theme::for_mode)). This module answers the
//! question of which mode to start in by querying the OS, with an
//! overridable detector for testing.
//!
//! ```rust
//! use veneer::{set_mode_detector, ColorMode};
//!
//! // Force dark mode for testing
//! set_mode_detector(|| ColorMode::Dark);
//! ```

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light mode (light background, dark text).
    Light,
    /// Dark mode (dark background, light text).
    Dark,
}

impl ColorMode {
    /// Returns the other mode.
    ///
    /// This is what a light/dark toggle flips between render passes.
    pub fn toggled(self) -> ColorMode {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// The key this mode reads from a theme's `modes` group.
    pub fn key(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to determine the user's preferred color mode.
///
/// This is useful for testing or when an application wants to force a
/// specific mode regardless of the OS setting.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Detects the user's preferred color mode.
///
/// Uses the `dark-light` crate to query the OS for the current theme
/// preference. The detector can be overridden via [`set_mode_detector`].
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_mode() {
        OsMode::Dark => ColorMode::Dark,
        OsMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_toggled_flips() {
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
    }

    #[test]
    fn test_mode_keys() {
        assert_eq!(ColorMode::Light.key(), "light");
        assert_eq!(ColorMode::Dark.key(), "dark");
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ColorMode::Dark).unwrap(), "\"dark\"");
        let mode: ColorMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ColorMode::Light);
    }

    #[test]
    #[serial]
    fn test_detect_color_mode_uses_override() {
        set_mode_detector(|| ColorMode::Dark);
        assert_eq!(detect_color_mode(), ColorMode::Dark);

        set_mode_detector(|| ColorMode::Light);
        assert_eq!(detect_color_mode(), ColorMode::Light);
    }
}
