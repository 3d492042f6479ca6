//! The tutorial sign-up UI, resolved and painted to the terminal.
//!
//! The render host here is a terminal printer: each component instance's
//! resolved declarations are listed under its name. App state is a
//! `show_modal` boolean plus the color mode; the passes below flip them
//! the way click handlers would and re-render, re-providing the theme
//! wholesale each time.

mod components;
mod theme;

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};
use console::Style;
use veneer::{ColorMode, Components, Props, Resolution, Theme, ThemeContext};

fn main() -> Result<()> {
    let components = components::build()?;
    let theme = theme::app_theme()?;

    let show_modal = Rc::new(Cell::new(false));
    let mut mode = ColorMode::Light;

    banner("initial render");
    render(&components, &theme, mode, show_modal.get())?;

    // The sign-up button's click handler flips `show_modal`. The render
    // host would invoke it on click; do the same here.
    let sign_up = {
        let show = Rc::clone(&show_modal);
        Props::new()
            .set("large", true)
            .handler("on_click", move || show.set(true))
    };
    sign_up
        .get_handler("on_click")
        .context("sign-up button has an on_click handler")?
        .call();

    banner("after click: modal shown");
    render(&components, &theme, mode, show_modal.get())?;

    // The theme toggle swaps the provided theme wholesale.
    mode = mode.toggled();
    banner("after toggle: dark mode");
    render(&components, &theme, mode, show_modal.get())?;

    Ok(())
}

fn render(components: &Components, theme: &Theme, mode: ColorMode, show_modal: bool) -> Result<()> {
    let ctx = ThemeContext::root().provide(theme.for_mode(mode));
    let current = ctx.current();

    let page = components
        .resolve("page", &Props::new(), current)
        .context("page spec")?;
    paint("page", &page);

    let open_button = components
        .resolve("primary-button", &Props::new().set("large", true), current)
        .context("primary-button spec")?;
    paint("primary-button \"Sign Up\"", &open_button);

    if show_modal {
        let modal = components
            .resolve("modal", &Props::new(), current)
            .context("modal spec")?;
        paint("modal", &modal);

        let header = components
            .resolve("sign-up-header", &Props::new(), current)
            .context("sign-up-header spec")?;
        paint("sign-up-header \"Sign Up!\"", &header);

        let text = components
            .resolve("sign-up-text", &Props::new(), current)
            .context("sign-up-text spec")?;
        paint("sign-up-text", &text);

        let submit = components
            .resolve("primary-button", &Props::new(), current)
            .context("primary-button spec")?;
        paint("primary-button \"Submit\"", &submit);

        let cancel = components
            .resolve(
                "secondary-button",
                &Props::new().set("hovered", true),
                current,
            )
            .context("secondary-button spec")?;
        paint("secondary-button \"Cancel\" (hovered)", &cancel);

        // What an out-of-process render host would receive for the modal.
        let payload = serde_json::to_string_pretty(modal.declarations())?;
        println!("{}", Style::new().dim().apply_to("render host payload:"));
        println!("{}\n", payload);
    }

    Ok(())
}

fn banner(label: &str) {
    println!("{}\n", Style::new().bold().underlined().apply_to(label));
}

fn paint(name: &str, resolution: &Resolution) {
    println!("{}", Style::new().bold().cyan().apply_to(format!("<{}>", name)));
    for (property, value) in resolution.declarations().iter() {
        println!("  {}: {};", property, value);
    }
    let dim = Style::new().dim();
    for unresolved in resolution.missing() {
        println!(
            "  {}",
            dim.apply_to(format!("/* {}: {} */", unresolved.property, unresolved.error))
        );
    }
    println!();
}
