//! Navbar logo.

use super::ThemeMode;
use super::family::{Fragment, element, text_element};
use crate::config::LogoConfig;

/// CSS filter that keeps the logo image readable on either theme.
///
/// Only a resolved light theme gets full brightness; dark and unresolved
/// modes share the same default state.
pub fn logo_filter(mode: Option<ThemeMode>) -> String {
    let brightness = match mode {
        Some(ThemeMode::Light) => 100,
        Some(ThemeMode::Dark) | None => 0,
    };
    format!("brightness({brightness}) saturate(100%) invert(100%)")
}

/// Build the logo fragment: optional image followed by the bold label.
///
/// Empty when there is neither an image nor a label.
pub fn render_logo(config: &LogoConfig, mode: Option<ThemeMode>) -> Fragment {
    let image = &config.image;
    let mut fragment = Fragment::new();

    if image.enable {
        let mut img = element("img");
        if image.adapt_to_theme {
            img.set_attr("style", format!("filter: {}", logo_filter(mode)));
        }
        img.set_attr("width", image.width.to_string());
        img.set_attr("height", image.height.to_string());
        img.set_attr("alt", &image.alt);
        img.set_attr("src", &image.src);
        fragment.push(img);
    }

    if !config.text.is_empty() {
        let label = text_element("strong", &config.text);
        if image.enable {
            let mut span = element("span");
            span.push_elem(label);
            fragment.push(span);
        } else {
            fragment.push(label);
        }
    }

    fragment
}
