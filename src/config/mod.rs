//! Theme configuration management for `theme.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── banner     # [banner]
//! │   ├── footer     # [footer]
//! │   ├── head       # [head]
//! │   ├── links      # [project], [chat]
//! │   ├── logo       # [logo]
//! │   └── seo        # [seo]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # ThemeConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | (root)       | `logo_link`, `docs_repository_base`              |
//! | `[logo]`     | Navbar logo text and theme-aware image           |
//! | `[project]`  | Repository link                                  |
//! | `[chat]`     | Community chat link                              |
//! | `[banner]`   | Dismissible top-of-page notice                   |
//! | `[footer]`   | Copyright line                                   |
//! | `[head]`     | Description, favicon, viewport                   |
//! | `[seo]`      | Page title template                              |
//!
//! Every field has a default, so an empty file describes the Dismake site.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, validate_link, validate_url};

pub use section::{
    BannerConfig, BannerText, ChatConfig, FooterConfig, HeadConfig, LogoConfig, LogoImage,
    ProjectConfig, SeoConfig, TITLE_PLACEHOLDER,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "theme.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing theme.toml.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Target of the logo link (site-relative path or URL)
    pub logo_link: String,

    /// Base URL for "edit this page" links
    pub docs_repository_base: String,

    pub logo: LogoConfig,
    pub project: ProjectConfig,
    pub chat: ChatConfig,
    pub banner: BannerConfig,
    pub footer: FooterConfig,
    pub head: HeadConfig,
    pub seo: SeoConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            logo_link: "/".into(),
            docs_repository_base: "https://github.com/Apptic-Developement/dismake/docs/pages"
                .into(),
            logo: LogoConfig::default(),
            project: ProjectConfig::default(),
            chat: ChatConfig::default(),
            banner: BannerConfig::default(),
            footer: FooterConfig::default(),
            head: HeadConfig::default(),
            seo: SeoConfig::default(),
        }
    }
}

impl ThemeConfig {
    pub const LOGO_LINK: FieldPath = FieldPath::new("logo_link");
    pub const DOCS_REPOSITORY_BASE: FieldPath = FieldPath::new("docs_repository_base");

    /// Load configuration for the given command.
    ///
    /// `init` never reads a file. Other commands search upward from cwd; only
    /// the default `theme.toml` may be missing, in which case the built-in
    /// defaults are used. A path given with `--config` must exist.
    pub fn load(cli: &Cli) -> Result<Self> {
        if cli.is_init() {
            return Ok(Self::default());
        }

        match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                Self::from_path(&path)
            }
            None if cli.config.as_os_str() == CONFIG_FILE => {
                log!("warning"; "no {CONFIG_FILE} found, using built-in defaults");
                Ok(Self::default())
            }
            None => Err(ConfigError::Io(
                cli.config.clone(),
                io::Error::new(io::ErrorKind::NotFound, "config file not found"),
            )
            .into()),
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse '{}'", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Serialize to TOML (used by `init`).
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize theme config")
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect every problem in the configuration.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        validate_link(Self::LOGO_LINK, &self.logo_link, &mut diag);
        validate_url(
            Self::DOCS_REPOSITORY_BASE,
            &self.docs_repository_base,
            &mut diag,
        );
        self.logo.validate(&mut diag);
        self.project.validate(&mut diag);
        self.chat.validate(&mut diag);
        self.banner.validate(&mut diag);
        self.footer.validate(&mut diag);
        self.head.validate(&mut diag);
        self.seo.validate(&mut diag);

        diag
    }

    /// Validate configuration, printing warnings and failing on any error.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML. Panics on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ThemeConfig {
    let (parsed, ignored) = ThemeConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(ThemeConfig::from_str("[banner\nkey = \"x\"").is_err());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = ThemeConfig::from_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.logo_link, "/");
        assert_eq!(config.chat.link, "https://dsc.gg/apptic");
        assert_eq!(config.seo.title_template, "%s | Dismake Docs");
    }

    #[test]
    fn test_defaults_are_valid() {
        let diag = ThemeConfig::default().diagnostics();
        assert!(diag.is_empty(), "{diag}");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "logo_link = \"/\"\n[sidebar]\ncollapsed = true";
        let (config, ignored) = ThemeConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.logo_link, "/");
        assert!(ignored.iter().any(|f| f.contains("sidebar")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[banner]\nkey = \"v2\"\n[footer]\nlicense = \"Apache-2.0\"";
        let (config, ignored) = ThemeConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(config.banner.key, "v2");
        assert_eq!(config.footer.license, "Apache-2.0");
    }

    #[test]
    fn test_validation_reports_all_errors() {
        let config = test_parse_config(
            r#"logo_link = "home"
docs_repository_base = "ftp://example.com"

[banner]
key = ""

[seo]
title_template = "Dismake"
"#,
        );
        let diag = config.diagnostics();
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert_eq!(diag.len(), 4);
        assert!(fields.contains(&ThemeConfig::LOGO_LINK));
        assert!(fields.contains(&ThemeConfig::DOCS_REPOSITORY_BASE));
        assert!(fields.contains(&BannerConfig::FIELDS.key));
        assert!(fields.contains(&SeoConfig::TITLE_TEMPLATE));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let text = ThemeConfig::default().to_toml().unwrap();
        assert!(text.contains("[banner]"));
        assert_eq!(test_parse_config(&text), ThemeConfig::default());
    }

    #[test]
    fn test_from_path_sets_config_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[footer]\nholder = \"Someone\"").unwrap();

        let config = ThemeConfig::from_path(&path).unwrap();
        assert_eq!(config.config_path, path);
        assert_eq!(config.footer.holder, "Someone");
    }

    fn cli(args: &[&str]) -> Cli {
        use clap::Parser;
        Cli::try_parse_from(["dismake-docs"].iter().chain(args)).unwrap()
    }

    #[test]
    fn test_load_explicit_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nested").join(CONFIG_FILE);
        let missing = missing.to_str().unwrap();

        let err = ThemeConfig::load(&cli(&["-C", missing, "validate"])).unwrap_err();
        assert!(err.to_string().contains("IO error"));
        assert!(ThemeConfig::load(&cli(&["-C", "site/typo.toml", "validate"])).is_err());
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docs-theme.toml");
        fs::write(&path, "[banner]\nkey = \"v3\"").unwrap();

        let config = ThemeConfig::load(&cli(&["-C", path.to_str().unwrap(), "validate"])).unwrap();
        assert_eq!(config.banner.key, "v3");
        assert_eq!(config.config_path, path);
    }

    #[test]
    fn test_load_skips_file_for_init() {
        let config = ThemeConfig::load(&cli(&["-C", "/definitely/missing.toml", "init"])).unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ThemeConfig::from_path(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }
}
