//! Component specs for the sign-up flow.
//!
//! Literal blocks are written as CSS; theme-dependent declarations use
//! `var(--token)` or computed declarations. The hover face of the
//! secondary button is driven by a `hovered` prop rather than a
//! pseudo-class: the render host decides when an instance is hovered and
//! re-resolves with the prop set.

use anyhow::Result;
use veneer::{ComponentSpec, Components, StyleRule};

/// Builds every spec the app renders, keyed by name.
pub fn build() -> Result<Components> {
    let page = ComponentSpec::new(
        "page",
        StyleRule::from_css(
            "width: 90%; \
             margin: 0 auto; \
             font-family: 'Menlo', monospace; \
             background-color: var(--pageBackground, white); \
             color: var(--textColor, black);",
        )?,
    );

    let button = ComponentSpec::new(
        "button",
        StyleRule::from_css(
            "padding: 12px 24px; \
             font-size: 1rem; \
             border-radius: 2px; \
             min-width: 100px; \
             cursor: pointer; \
             font-family: 'Menlo', monospace;",
        )?,
    );

    let primary_button = button.extend(
        "primary-button",
        StyleRule::new()
            .token("background-color", "primary")
            .set("border", "none")
            .token_or("color", "buttonText", "white")
            .with("padding", |props, _theme| {
                Ok(if props.truthy("large") {
                    "16px 25px"
                } else {
                    "12px 24px"
                }
                .into())
            }),
    );

    let secondary_button = button.extend(
        "secondary-button",
        StyleRule::new()
            .set("background", "none")
            .set("border", "1px solid black")
            .token_or("color", "textColor", "black")
            .set(
                "transition",
                "background-color 0.2s linear, color 0.2s linear",
            )
            .with("background-color", |props, theme| {
                if props.truthy("hovered") {
                    theme.require("primary").map(str::to_string)
                } else {
                    Ok("none".to_string())
                }
            }),
    );

    let modal = ComponentSpec::new(
        "modal",
        StyleRule::from_css(
            "width: 800px; \
             height: 550px; \
             box-shadow: 0 5px 16px rgba(0, 0, 0, 0.2); \
             background-color: var(--surface, #ffffff); \
             color: var(--textColor, black); \
             display: flex; \
             flex-direction: column; \
             justify-content: center; \
             align-items: center; \
             position: relative; \
             border-radius: 2px; \
             font-family: 'Menlo', monospace;",
        )?,
    );

    let header = ComponentSpec::new(
        "sign-up-header",
        StyleRule::from_css("font-size: 2rem; margin-bottom: 0;")?,
    );

    let text = ComponentSpec::new(
        "sign-up-text",
        StyleRule::from_css("font-size: 1rem; max-width: 70%; text-align: center;")?,
    );

    Ok(Components::new()
        .add(page)
        .add(button)
        .add(primary_button)
        .add(secondary_button)
        .add(modal)
        .add(header)
        .add(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::app_theme;
    use veneer::{ColorMode, Props, Theme};

    #[test]
    fn registry_holds_every_spec() {
        let components = build().unwrap();
        for name in [
            "page",
            "button",
            "primary-button",
            "secondary-button",
            "modal",
            "sign-up-header",
            "sign-up-text",
        ] {
            assert!(components.has(name), "missing spec '{}'", name);
        }
    }

    #[test]
    fn primary_button_inherits_and_overrides() {
        let components = build().unwrap();
        let theme = app_theme().unwrap();

        let resolution = components
            .resolve("primary-button", &Props::new(), &theme)
            .unwrap();
        let declarations = resolution.declarations();

        assert_eq!(declarations.get("background-color"), Some("hotpink"));
        assert_eq!(declarations.get("color"), Some("white"));
        // Inherited from the base button.
        assert_eq!(declarations.get("cursor"), Some("pointer"));
        // Overridden by the computed padding.
        assert_eq!(declarations.get("padding"), Some("12px 24px"));
    }

    #[test]
    fn large_primary_button_widens_padding() {
        let components = build().unwrap();
        let theme = app_theme().unwrap();

        let resolution = components
            .resolve("primary-button", &Props::new().set("large", true), &theme)
            .unwrap();
        assert_eq!(resolution.declarations().get("padding"), Some("16px 25px"));
    }

    #[test]
    fn secondary_button_hover_face() {
        let components = build().unwrap();
        let theme = app_theme().unwrap();

        let idle = components
            .resolve("secondary-button", &Props::new(), &theme)
            .unwrap();
        assert_eq!(idle.declarations().get("background-color"), Some("none"));

        let hovered = components
            .resolve("secondary-button", &Props::new().set("hovered", true), &theme)
            .unwrap();
        assert_eq!(
            hovered.declarations().get("background-color"),
            Some("hotpink")
        );
    }

    #[test]
    fn specs_degrade_without_a_theme() {
        let components = build().unwrap();

        // No provider: fallbacks cover every theme-dependent declaration.
        let resolution = components
            .resolve("modal", &Props::new(), &Theme::new())
            .unwrap();
        assert!(resolution.is_complete());
        assert_eq!(
            resolution.declarations().get("background-color"),
            Some("#ffffff")
        );
    }

    #[test]
    fn dark_mode_restyles_surfaces_only() {
        let components = build().unwrap();
        let theme = app_theme().unwrap();

        let light = components
            .resolve("modal", &Props::new(), &theme.for_mode(ColorMode::Light))
            .unwrap();
        let dark = components
            .resolve("modal", &Props::new(), &theme.for_mode(ColorMode::Dark))
            .unwrap();

        assert_eq!(
            light.declarations().get("background-color"),
            Some("#ffffff")
        );
        assert_eq!(dark.declarations().get("background-color"), Some("#2b2b2b"));
        // Theme-independent declarations match across modes.
        assert_eq!(
            light.declarations().get("box-shadow"),
            dark.declarations().get("box-shadow")
        );
    }
}
