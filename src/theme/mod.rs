//! Render hooks called by the documentation engine.
//!
//! The engine owns the page loop and calls into a [`ThemeRenderer`] at fixed
//! extension points, once per page. [`DocsTheme`] is the only implementation:
//! it borrows an immutable [`ThemeConfig`] and never fails, so a bad theme
//! signal or an odd page title cannot abort page generation.
//!
//! | Hook             | Input              | Output                       |
//! |------------------|--------------------|------------------------------|
//! | `render_logo`    | [`ThemeSignal`]    | image + bold label           |
//! | `render_head`    | [`PageMeta`]       | [`HeadMetadata`]             |
//! | `render_banner`  | -                  | [`Banner`] record            |
//! | `render_footer`  | [`Clock`] (owned)  | copyright line               |
//! | `seo_props`      | -                  | [`SeoProps`] title template  |
//! | `links`          | -                  | [`NavLinks`]                 |

mod banner;
mod clock;
pub mod family;
mod footer;
mod head;
mod links;
mod logo;
mod mode;

pub use banner::{Banner, BannerLink};
pub use clock::{Clock, FixedClock, SystemClock};
pub use head::{HeadEntry, HeadMetadata};
pub use links::{NavLinks, SeoProps};
pub use logo::logo_filter;
pub use mode::{ThemeMode, ThemeSignal};

use serde::Serialize;

use crate::config::ThemeConfig;
use family::{Fragment, RawElement, text_element, to_html};

/// Page information supplied by the engine at call time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    /// Source path relative to the docs root (e.g. `guide/intro.mdx`).
    pub path: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Extension points of the documentation theme.
pub trait ThemeRenderer {
    fn render_logo(&self, signal: ThemeSignal) -> Fragment;
    fn render_head(&self, page: &PageMeta) -> HeadMetadata;
    fn render_banner(&self) -> Banner;
    fn render_footer(&self) -> RawElement;
    fn seo_props(&self) -> SeoProps;
    fn links(&self) -> NavLinks;
}

/// Theme backed by `theme.toml`.
#[derive(Debug, Clone)]
pub struct DocsTheme<'a, C = SystemClock> {
    config: &'a ThemeConfig,
    clock: C,
}

impl<'a> DocsTheme<'a> {
    pub fn new(config: &'a ThemeConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl<'a, C: Clock> DocsTheme<'a, C> {
    /// Replace the year source (fixed clocks keep footers reproducible).
    pub fn with_clock<D: Clock>(self, clock: D) -> DocsTheme<'a, D> {
        DocsTheme {
            config: self.config,
            clock,
        }
    }

    pub fn config(&self) -> &ThemeConfig {
        self.config
    }
}

impl<C: Clock> ThemeRenderer for DocsTheme<'_, C> {
    fn render_logo(&self, signal: ThemeSignal) -> Fragment {
        logo::render_logo(&self.config.logo, signal.effective())
    }

    fn render_head(&self, page: &PageMeta) -> HeadMetadata {
        HeadMetadata::build(&self.config.head, &page.title)
    }

    fn render_banner(&self) -> Banner {
        Banner::from_config(&self.config.banner)
    }

    fn render_footer(&self) -> RawElement {
        footer::render_footer(&self.config.footer, self.clock.current_year())
    }

    fn seo_props(&self) -> SeoProps {
        SeoProps {
            title_template: self.config.seo.title_template.clone(),
        }
    }

    fn links(&self) -> NavLinks {
        NavLinks::from_config(self.config)
    }
}

// ============================================================================
// Page chrome
// ============================================================================

/// Everything the theme contributes to one page, serialized as HTML strings.
#[derive(Debug, Clone, Serialize)]
pub struct PageChrome {
    /// Page title after the SEO template is applied.
    pub title: String,
    pub logo: String,
    pub head: HeadMetadata,
    pub head_html: String,
    pub banner: Banner,
    pub banner_html: String,
    pub footer: String,
    pub links: NavLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<String>,
}

impl PageChrome {
    /// Call every hook of `theme` for `page`, the way the engine would.
    pub fn render(theme: &dyn ThemeRenderer, page: &PageMeta, signal: ThemeSignal) -> Self {
        let head = theme.render_head(page);
        let banner = theme.render_banner();
        let links = theme.links();
        let edit_link = page.path.as_deref().map(|path| links.edit_link(path));

        Self {
            title: theme.seo_props().format_title(&page.title),
            logo: to_html(theme.render_logo(signal)),
            head_html: to_html(head.to_fragment()),
            head,
            banner_html: to_html([banner.to_element()]),
            banner,
            footer: to_html([theme.render_footer()]),
            links,
            edit_link,
        }
    }

    /// `<title>` element carrying the templated title.
    pub fn title_html(&self) -> String {
        to_html([text_element("title", &self.title)])
    }
}
