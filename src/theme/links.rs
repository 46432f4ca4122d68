//! Navigation links and the SEO title template.

use serde::Serialize;

use crate::config::{TITLE_PLACEHOLDER, ThemeConfig};

/// Static links read by the page engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLinks {
    pub logo_link: String,
    pub project_link: String,
    pub chat_link: String,
    pub docs_repository_base: String,
}

impl NavLinks {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            logo_link: config.logo_link.clone(),
            project_link: config.project.link.clone(),
            chat_link: config.chat.link.clone(),
            docs_repository_base: config.docs_repository_base.clone(),
        }
    }

    /// "Edit this page" link for a page source path such as `guide/intro.mdx`.
    pub fn edit_link(&self, page_path: &str) -> String {
        format!(
            "{}/{}",
            self.docs_repository_base.trim_end_matches('/'),
            page_path.trim_start_matches('/')
        )
    }
}

/// Search-engine props: the template wrapped around every page title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoProps {
    pub title_template: String,
}

impl SeoProps {
    /// Replace the first `%s` with `title`.
    pub fn format_title(&self, title: &str) -> String {
        self.title_template.replacen(TITLE_PLACEHOLDER, title, 1)
    }
}
