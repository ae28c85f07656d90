//! paperchat configuration system.
//!
//! TOML-based configuration with validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use paperchat_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("chat model: {}", config.chat.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::PaperchatConfig;

use std::path::Path;

use paperchat_common::ConfigError;

/// Load and validate the config.
///
/// With `path` set the file must exist; otherwise the platform default
/// path is used and created on first run.
pub fn load_config(path: Option<&Path>) -> Result<PaperchatConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
