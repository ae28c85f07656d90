//! Core TOML config loading: read from path or platform default.

use crate::schema::PaperchatConfig;
use paperchat_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields fall back to serde defaults. Validation is left to the
/// caller so a config can be inspected before it is rejected.
pub fn load_from_path(path: &Path) -> Result<PaperchatConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: PaperchatConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/paperchat/config.toml`
/// On Linux: `~/.config/paperchat/config.toml`
///
/// If the file does not exist, creates a commented default file and returns defaults.
pub fn load_default() -> Result<PaperchatConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(PaperchatConfig::default());
    }

    load_from_path(&path)
}
