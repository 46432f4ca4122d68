//! `[project]` and `[chat]` sections: outbound links shown in the navbar.

use serde::{Deserialize, Serialize};

use crate::config::util::validate_url;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Default repository of the Dismake project.
pub const DEFAULT_PROJECT_LINK: &str = "https://github.com/Apptic-Developement/dismake";

/// `[project]`: repository link (rendered as the GitHub icon).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub link: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            link: DEFAULT_PROJECT_LINK.into(),
        }
    }
}

/// `[chat]`: community chat link (rendered as the Discord icon).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub link: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            link: "https://dsc.gg/apptic".into(),
        }
    }
}

impl ProjectConfig {
    pub const LINK: FieldPath = FieldPath::new("project.link");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_url(Self::LINK, &self.link, diag);
    }
}

impl ChatConfig {
    pub const LINK: FieldPath = FieldPath::new("chat.link");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_url(Self::LINK, &self.link, diag);
    }
}
