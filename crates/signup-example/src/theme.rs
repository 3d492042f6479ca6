//! The application theme, with dark-mode overrides.

use anyhow::Result;
use veneer::Theme;

const APP_THEME: &str = r##"
primary: hotpink
buttonText: white
pageBackground: "#ffffff"
textColor: black
surface: "#ffffff"
modes:
  dark:
    pageBackground: "#1e1e1e"
    textColor: "#f8f8f8"
    surface: "#2b2b2b"
"##;

/// Builds the app theme and validates its token references up front.
pub fn app_theme() -> Result<Theme> {
    let theme = Theme::from_yaml(APP_THEME)?.with_name("signup");
    theme.validate()?;
    Ok(theme)
}
