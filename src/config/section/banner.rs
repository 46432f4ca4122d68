//! `[banner]` section configuration.
//!
//! ```toml
//! [banner]
//! key = "dismake-dev"
//! dismissible = true
//!
//! [banner.text]
//! label = "💖 Contribute now →"
//! href = "https://github.com/Apptic-Developement/dismake/pulls"
//! ```

use serde::{Deserialize, Serialize};

use super::links::DEFAULT_PROJECT_LINK;
use crate::config::util::validate_url;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Identifies the dismissal state stored by the page engine.
    /// Changing it shows the banner again to users who dismissed it.
    pub key: String,
    pub dismissible: bool,
    pub text: BannerText,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            key: "dismake-dev".into(),
            dismissible: true,
            text: BannerText::default(),
        }
    }
}

/// Banner content: a single link opened in a new tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerText {
    pub label: String,
    pub href: String,
}

impl Default for BannerText {
    fn default() -> Self {
        Self {
            label: "💖 Contribute now →".into(),
            href: format!("{DEFAULT_PROJECT_LINK}/pulls"),
        }
    }
}

pub struct BannerFields {
    pub key: FieldPath,
    pub text_label: FieldPath,
    pub text_href: FieldPath,
}

impl BannerConfig {
    pub const FIELDS: BannerFields = BannerFields {
        key: FieldPath::new("banner.key"),
        text_label: FieldPath::new("banner.text.label"),
        text_href: FieldPath::new("banner.text.href"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.dismissible && self.key.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.key,
                "dismissible banner needs a non-empty key",
                "dismissal is remembered per key, e.g. \"dismake-dev\"",
            );
        }
        if self.text.label.trim().is_empty() {
            diag.error(Self::FIELDS.text_label, "banner text must not be empty");
        }
        validate_url(Self::FIELDS.text_href, &self.text.href, diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.banner.key, "dismake-dev");
        assert!(config.banner.dismissible);
        assert!(config.banner.text.href.ends_with("/pulls"));
    }

    #[test]
    fn test_empty_key_rejected_when_dismissible() {
        let config = test_parse_config("[banner]\nkey = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.banner.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, BannerConfig::FIELDS.key);
    }

    #[test]
    fn test_empty_key_allowed_when_not_dismissible() {
        let config = test_parse_config("[banner]\nkey = \"\"\ndismissible = false");
        let mut diag = ConfigDiagnostics::new();
        config.banner.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
