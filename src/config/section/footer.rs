//! `[footer]` section configuration.

use serde::{Deserialize, Serialize};

use super::links::DEFAULT_PROJECT_LINK;
use crate::config::util::validate_url;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Copyright line: `{license} {year} © {holder}.` with the holder linked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub license: String,
    pub holder: String,
    pub link: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            license: "MIT".into(),
            holder: "Apptic Development".into(),
            link: DEFAULT_PROJECT_LINK.into(),
        }
    }
}

impl FooterConfig {
    pub const HOLDER: FieldPath = FieldPath::new("footer.holder");
    pub const LINK: FieldPath = FieldPath::new("footer.link");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.holder.trim().is_empty() {
            diag.error(Self::HOLDER, "copyright holder must not be empty");
        }
        validate_url(Self::LINK, &self.link, diag);
    }
}
