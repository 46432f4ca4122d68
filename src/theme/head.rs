//! Per-page `<head>` metadata.

use serde::Serialize;

use crate::config::HeadConfig;
use super::family::{Fragment, RawElement, element};
use crate::utils::mime;

/// One tag injected into `<head>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum HeadEntry {
    Meta {
        name: String,
        content: String,
    },
    Link {
        rel: String,
        href: String,
        #[serde(rename = "type")]
        mime: String,
    },
}

impl HeadEntry {
    fn meta(name: &str, content: &str) -> Self {
        Self::Meta {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn to_element(&self) -> RawElement {
        match self {
            Self::Meta { name, content } => {
                let mut meta = element("meta");
                meta.set_attr("name", name);
                meta.set_attr("content", content);
                meta
            }
            Self::Link { rel, href, mime } => {
                let mut link = element("link");
                link.set_attr("rel", rel);
                link.set_attr("href", href);
                link.set_attr("type", mime);
                link
            }
        }
    }
}

/// Head tags for a single page. Recomputed on every call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeadMetadata {
    pub entries: Vec<HeadEntry>,
}

impl HeadMetadata {
    /// Build the head tags for a page titled `title`.
    ///
    /// Order: description, og:description, og:title, icon, viewport.
    /// Only `og:title` depends on the page.
    pub fn build(config: &HeadConfig, title: &str) -> Self {
        let entries = vec![
            HeadEntry::meta("description", &config.description),
            HeadEntry::meta("og:description", &config.description),
            HeadEntry::meta("og:title", title),
            HeadEntry::Link {
                rel: "icon".into(),
                href: config.icon.clone(),
                mime: mime::for_icon_href(&config.icon).into(),
            },
            HeadEntry::meta("viewport", &config.viewport),
        ];
        Self { entries }
    }

    /// Content of the `meta` entry named `name`.
    pub fn meta(&self, name: &str) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            HeadEntry::Meta { name: n, content } if n == name => Some(content.as_str()),
            _ => None,
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.meta("og:title")
    }

    pub fn to_fragment(&self) -> Fragment {
        self.entries.iter().map(HeadEntry::to_element).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::head::DEFAULT_DESCRIPTION;
    use crate::theme::family::to_html;

    #[test]
    fn test_entry_order() {
        let head = HeadMetadata::build(&HeadConfig::default(), "Getting Started");
        let tags: Vec<_> = head
            .to_fragment()
            .iter()
            .map(|e| {
                e.get_attr("name")
                    .or_else(|| e.get_attr("rel"))
                    .map(|s| s.to_string())
                    .unwrap_or_default()
            })
            .collect();
        assert_eq!(
            tags,
            ["description", "og:description", "og:title", "icon", "viewport"]
        );
    }

    #[test]
    fn test_scenario_getting_started() {
        let head = HeadMetadata::build(&HeadConfig::default(), "Getting Started");
        assert_eq!(head.title(), Some("Getting Started"));
        assert_eq!(head.meta("description"), Some(DEFAULT_DESCRIPTION));
        assert_eq!(head.meta("og:description"), Some(DEFAULT_DESCRIPTION));
    }

    #[test]
    fn test_only_title_varies() {
        let config = HeadConfig::default();
        let titles = ["Intro", "", "Buttons & <Modals>", "Getting Started"];
        let heads: Vec<_> = titles.iter().map(|t| HeadMetadata::build(&config, t)).collect();

        for (head, title) in heads.iter().zip(titles) {
            let derived: Vec<_> = head
                .entries
                .iter()
                .filter(|e| matches!(e, HeadEntry::Meta { content, .. } if content == title))
                .collect();
            // an empty title still only matches og:title
            assert_eq!(derived.len(), 1, "title {title:?}");
            assert_eq!(head.meta("description"), heads[0].meta("description"));
            assert_eq!(head.entries[3], heads[0].entries[3]);
            assert_eq!(head.entries[4], heads[0].entries[4]);
        }
    }

    #[test]
    fn test_icon_type_from_extension() {
        let mut config = HeadConfig::default();
        let head = HeadMetadata::build(&config, "x");
        assert!(to_html(head.to_fragment()).contains(r#"type="image/png""#));

        config.icon = "/favicon.svg".into();
        let head = HeadMetadata::build(&config, "x");
        assert!(to_html(head.to_fragment()).contains(r#"type="image/svg+xml""#));
    }

    #[test]
    fn test_title_is_escaped() {
        let head = HeadMetadata::build(&HeadConfig::default(), "<script>");
        let html = to_html(head.to_fragment());
        assert!(html.contains(r#"name="og:title""#));
        assert!(!html.contains("<script>"));
    }
}
