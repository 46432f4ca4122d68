//! Theme config validation command.

use anyhow::Result;

use crate::config::ThemeConfig;
use crate::log;

/// Validate the loaded config and report the outcome.
pub fn validate_config(config: &ThemeConfig) -> Result<()> {
    let source = if config.config_path.as_os_str().is_empty() {
        "built-in defaults".to_string()
    } else {
        config.config_path.display().to_string()
    };

    config.validate()?;
    log!("validate"; "{} is valid", source);
    Ok(())
}
