//! Top-of-page banner.

use serde::Serialize;

use super::family::{RawElement, element, text_element};
use crate::config::BannerConfig;

/// Banner record handed to the page engine.
///
/// The engine persists dismissal under `key` and must show the banner again
/// once the key changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub key: String,
    pub dismissible: bool,
    pub text: BannerLink,
}

/// Call-to-action link shown inside the banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerLink {
    pub label: String,
    pub href: String,
}

impl BannerLink {
    /// `<a href=.. target="_blank">label</a>`
    pub fn to_element(&self) -> RawElement {
        let mut link = text_element("a", &self.label);
        link.set_attr("href", &self.href);
        link.set_attr("target", "_blank");
        link
    }
}

impl Banner {
    pub fn from_config(config: &BannerConfig) -> Self {
        Self {
            key: config.key.clone(),
            dismissible: config.dismissible,
            text: BannerLink {
                label: config.text.label.clone(),
                href: config.text.href.clone(),
            },
        }
    }

    /// Banner container with the key exposed for the engine's storage.
    pub fn to_element(&self) -> RawElement {
        let mut container = element("div");
        container.set_attr("class", "banner");
        container.set_attr("data-banner-key", &self.key);
        container.push_elem(self.text.to_element());

        if self.dismissible {
            container.set_attr("data-dismissible", "true");
            let mut button = text_element("button", "×");
            button.set_attr("type", "button");
            button.set_attr("aria-label", "Dismiss banner");
            container.push_elem(button);
        }
        container
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::family::to_html;

    #[test]
    fn test_default_banner() {
        let banner = Banner::from_config(&BannerConfig::default());
        assert_eq!(banner.key, "dismake-dev");
        assert!(banner.dismissible);
        assert_eq!(banner.text.label, "💖 Contribute now →");
        assert!(banner.text.href.ends_with("/pulls"));
    }

    #[test]
    fn test_dismiss_control() {
        let elem = Banner::from_config(&BannerConfig::default()).to_element();
        assert!(elem.has_attr("data-dismissible"));
        let html = to_html([elem]);
        assert!(html.contains(r#"data-banner-key="dismake-dev""#));
        assert!(html.contains("<button"));
        assert!(html.contains(r#"target="_blank""#));

        let config = BannerConfig {
            dismissible: false,
            ..BannerConfig::default()
        };
        let elem = Banner::from_config(&config).to_element();
        assert!(!elem.has_attr("data-dismissible"));
        assert!(!to_html([elem]).contains("<button"));
    }

    #[test]
    fn test_key_stable_across_renders() {
        let config = BannerConfig::default();
        let first = Banner::from_config(&config);
        let second = Banner::from_config(&config);
        assert!(!first.key.is_empty());
        assert_eq!(first, second);
    }
}
