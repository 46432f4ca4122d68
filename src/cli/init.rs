//! Theme config initialization.
//!
//! Writes a `theme.toml` holding every default, so the file documents all
//! available settings.

use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::{CONFIG_FILE, ThemeConfig};
use crate::log;

/// Generate theme.toml content with a header comment
pub fn generate_config_template() -> Result<String> {
    let mut out = format!(
        "# Dismake docs theme configuration (v{})\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str("# Every key is optional; omitted keys use the values below.\n\n");
    out.push_str(&ThemeConfig::default().to_toml()?);
    Ok(out)
}

/// Write a default theme.toml into `name` (or the current directory).
///
/// If `dry_run` is true, only prints the config template to stdout.
pub fn new_config(name: Option<&Path>, dry_run: bool) -> Result<()> {
    let template = generate_config_template()?;
    if dry_run {
        print!("{template}");
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let path = write_config(&target_dir(&cwd, name), &template)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

fn target_dir(cwd: &Path, name: Option<&Path>) -> PathBuf {
    match name {
        Some(name) => cwd.join(name),
        None => cwd.to_path_buf(),
    }
}

/// Write `content` to `<root>/theme.toml`, refusing to overwrite.
fn write_config(root: &Path, content: &str) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let template = generate_config_template().unwrap();
        assert!(template.starts_with("# Dismake docs theme configuration"));
        assert_eq!(ThemeConfig::from_str(&template).unwrap(), ThemeConfig::default());
    }

    #[test]
    fn test_write_config_creates_dir() {
        let dir = TempDir::new().unwrap();
        let root = target_dir(dir.path(), Some(Path::new("docs")));
        let path = write_config(&root, "").unwrap();
        assert_eq!(path, dir.path().join("docs").join(CONFIG_FILE));
        assert!(path.exists());
    }

    #[test]
    fn test_write_config_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "# mine").unwrap();

        assert!(write_config(dir.path(), "").is_err());
        let kept = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(kept, "# mine");
    }
}
