//! `[head]` section: site-wide `<head>` metadata.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

pub const DEFAULT_DESCRIPTION: &str = "Dismake is a robust framework designed to assist you in \
developing stateless and independent Discord bots that employ Slash Commands. The framework is \
built on top of the FastAPI, a high-performance Python web framework, making it easy to use, \
efficient, and speedy.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadConfig {
    /// Shared by `description` and `og:description`; identical on every page.
    pub description: String,
    /// Favicon href (site-relative).
    pub icon: String,
    pub viewport: String,
}

impl Default for HeadConfig {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.into(),
            icon: "/logo.png".into(),
            viewport: "width=device-width, initial-scale=1.0".into(),
        }
    }
}

impl HeadConfig {
    pub const DESCRIPTION: FieldPath = FieldPath::new("head.description");
    pub const ICON: FieldPath = FieldPath::new("head.icon");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.description.trim().is_empty() {
            diag.warn(Self::DESCRIPTION, "empty description, search previews will be blank");
        }
        if self.icon.trim().is_empty() {
            diag.error(Self::ICON, "icon href must not be empty");
        }
    }
}
