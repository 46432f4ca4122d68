//! `[seo]` section: title template applied by the page engine.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Placeholder replaced with the page title.
pub const TITLE_PLACEHOLDER: &str = "%s";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    pub title_template: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            title_template: "%s | Dismake Docs".into(),
        }
    }
}

impl SeoConfig {
    pub const TITLE_TEMPLATE: FieldPath = FieldPath::new("seo.title_template");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.title_template.contains(TITLE_PLACEHOLDER) {
            diag.error_with_hint(
                Self::TITLE_TEMPLATE,
                format!("missing `{TITLE_PLACEHOLDER}` placeholder"),
                "e.g. \"%s | Dismake Docs\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_template_without_placeholder() {
        let config = test_parse_config("[seo]\ntitle_template = \"Dismake Docs\"");
        let mut diag = ConfigDiagnostics::new();
        config.seo.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
