//! End-to-end resolution scenarios: rule chains, props, themes, and scopes.

use std::cell::Cell;
use std::rc::Rc;

use veneer::{resolve, ColorMode, ComponentSpec, Props, StyleRule, Theme, ThemeContext};

fn button() -> ComponentSpec {
    ComponentSpec::new(
        "button",
        StyleRule::new()
            .set("padding", "12px 24px")
            .set("font-size", "1rem")
            .set("border-radius", "2px"),
    )
}

fn app_theme() -> Theme {
    Theme::new()
        .set("primary", "hotpink")
        .set("buttonText", "white")
        .set("pageBackground", "#ffffff")
        .group(
            "modes.dark",
            Theme::new().set("pageBackground", "#1e1e1e"),
        )
}

#[test]
fn resolve_is_pure() {
    let primary = button().extend(
        "primary-button",
        StyleRule::new()
            .token("background-color", "primary")
            .with("padding", |props, _theme| {
                Ok(if props.truthy("large") {
                    "16px 25px"
                } else {
                    "12px 24px"
                }
                .into())
            }),
    );
    let theme = app_theme();
    let props = Props::new().set("large", true);

    let first = resolve(&primary, &props, &theme);
    let second = resolve(&primary, &props, &theme);
    assert_eq!(first, second);
}

#[test]
fn extend_appends_then_overrides() {
    let extra = StyleRule::new()
        .token("background-color", "primary")
        .set("border", "none")
        .set("padding", "16px 25px");
    let primary = button().extend("primary-button", extra.clone());
    let theme = app_theme();

    // Resolving the variant equals resolving the base with the extra rules
    // applied afterward.
    let combined = ComponentSpec::new("combined", button().rules().concat(&extra));
    let variant_out = primary.resolve(&Props::new(), &theme);
    let combined_out = combined.resolve(&Props::new(), &theme);
    assert_eq!(variant_out.declarations(), combined_out.declarations());

    // Same-named properties are overridden, the rest inherited.
    assert_eq!(variant_out.declarations().get("padding"), Some("16px 25px"));
    assert_eq!(variant_out.declarations().get("font-size"), Some("1rem"));
    assert_eq!(
        variant_out.declarations().get("background-color"),
        Some("hotpink")
    );
}

#[test]
fn missing_theme_key_omits_property_and_keeps_siblings() {
    let spec = ComponentSpec::new(
        "button",
        StyleRule::new()
            .set("color", "black")
            .token("border", "buttonBorder"),
    );
    // `primary` is present (empty string), `buttonBorder` is not.
    let theme = Theme::new().set("primary", "");

    let resolution = spec.resolve(&Props::new(), &theme);
    assert!(!resolution.declarations().contains("border"));
    assert_eq!(resolution.declarations().get("color"), Some("black"));
    assert_eq!(resolution.missing().len(), 1);
    assert_eq!(resolution.missing()[0].property, "border");
    assert_eq!(resolution.missing()[0].error.path, "buttonBorder");
    assert!(!resolution.is_complete());
}

#[test]
fn props_select_conditional_padding() {
    let spec = ComponentSpec::new(
        "button",
        StyleRule::new().with("padding", |props, _theme| {
            Ok(if props.truthy("large") {
                "16px 25px"
            } else {
                "12px 24px"
            }
            .into())
        }),
    );
    let theme = Theme::new();

    let large = spec.resolve(&Props::new().set("large", true), &theme);
    assert_eq!(large.declarations().get("padding"), Some("16px 25px"));

    let normal = spec.resolve(&Props::new(), &theme);
    assert_eq!(normal.declarations().get("padding"), Some("12px 24px"));
}

#[test]
fn theme_switch_changes_only_dependent_declarations() {
    let page = ComponentSpec::new(
        "page",
        StyleRule::new()
            .set("border-radius", "2px")
            .token("background-color", "pageBackground"),
    );
    let light = app_theme().for_mode(ColorMode::Light);
    let dark = app_theme().for_mode(ColorMode::Dark);

    let light_out = page.resolve(&Props::new(), &light);
    let dark_out = page.resolve(&Props::new(), &dark);

    assert_eq!(
        light_out.declarations().get("background-color"),
        Some("#ffffff")
    );
    assert_eq!(
        dark_out.declarations().get("background-color"),
        Some("#1e1e1e")
    );
    // Theme-independent declarations are unchanged between passes.
    assert_eq!(light_out.declarations().get("border-radius"), Some("2px"));
    assert_eq!(dark_out.declarations().get("border-radius"), Some("2px"));
}

#[test]
fn no_provider_resolves_literals_and_fallbacks_only() {
    let ctx = ThemeContext::root();
    let spec = ComponentSpec::new(
        "button",
        StyleRule::new()
            .set("cursor", "pointer")
            .token_or("color", "buttonText", "inherit")
            .token("border", "buttonBorder"),
    );

    let resolution = spec.resolve(&Props::new(), ctx.current());
    assert_eq!(resolution.declarations().get("cursor"), Some("pointer"));
    assert_eq!(resolution.declarations().get("color"), Some("inherit"));
    assert!(!resolution.declarations().contains("border"));
    assert_eq!(resolution.missing()[0].error.path, "buttonBorder");
}

#[test]
fn nested_scope_sees_nearest_theme() {
    let spec = ComponentSpec::new("badge", StyleRule::new().token("color", "primary"));

    let app = ThemeContext::root().provide(Theme::new().set("primary", "hotpink"));
    let panel = app.provide(Theme::new().set("primary", "rebeccapurple"));

    let in_app = spec.resolve(&Props::new(), app.current());
    let in_panel = spec.resolve(&Props::new(), panel.current());
    assert_eq!(in_app.declarations().get("color"), Some("hotpink"));
    assert_eq!(in_panel.declarations().get("color"), Some("rebeccapurple"));
}

#[test]
fn css_rules_resolve_like_built_rules() {
    let modal = ComponentSpec::new(
        "modal",
        StyleRule::from_css(
            "width: 800px; \
             box-shadow: 0 5px 16px rgba(0, 0, 0, 0.2); \
             background-color: var(--surface, #ffffff); \
             color: var(--textColor);",
        )
        .unwrap(),
    );

    let theme = Theme::new().set("textColor", "black");
    let resolution = modal.resolve(&Props::new(), &theme);

    assert_eq!(resolution.declarations().get("width"), Some("800px"));
    assert_eq!(
        resolution.declarations().get("box-shadow"),
        Some("0 5px 16px rgba(0, 0, 0, 0.2)")
    );
    // Fallback used: `surface` is absent from the theme.
    assert_eq!(
        resolution.declarations().get("background-color"),
        Some("#ffffff")
    );
    assert_eq!(resolution.declarations().get("color"), Some("black"));
    assert!(resolution.is_complete());
}

#[test]
fn handler_props_are_carried_but_never_invoked() {
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    let props = Props::new()
        .set("large", true)
        .handler("on_click", move || flag.set(true));

    let spec = ComponentSpec::new(
        "button",
        StyleRule::new()
            .set("cursor", "pointer")
            .with("padding", |props, _theme| {
                Ok(if props.truthy("large") {
                    "16px 25px"
                } else {
                    "12px 24px"
                }
                .into())
            }),
    );

    let resolution = spec.resolve(&props, &Theme::new());
    assert_eq!(resolution.declarations().get("padding"), Some("16px 25px"));
    // Resolution treated the handler opaquely.
    assert!(!fired.get());
}

#[test]
fn alias_tokens_resolve_through_references() {
    let theme = Theme::new()
        .set("primary", "hotpink")
        .alias("accent", "primary");
    let spec = ComponentSpec::new("badge", StyleRule::new().token("color", "accent"));

    let resolution = spec.resolve(&Props::new(), &theme);
    assert_eq!(resolution.declarations().get("color"), Some("hotpink"));
}

#[test]
fn deep_variant_chain_cascades_in_order() {
    let base = ComponentSpec::new("base", StyleRule::new().set("color", "black"));
    let mid = base.extend("mid", StyleRule::new().set("color", "gray").set("margin", "0"));
    let leaf = mid.extend("leaf", StyleRule::new().set("color", "white"));

    let resolution = leaf.resolve(&Props::new(), &Theme::new());
    assert_eq!(resolution.declarations().get("color"), Some("white"));
    assert_eq!(resolution.declarations().get("margin"), Some("0"));
}
