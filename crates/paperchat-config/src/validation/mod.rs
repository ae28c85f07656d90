//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::PaperchatConfig;
use paperchat_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PaperchatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_chat(&mut errors, config);
    sections::validate_summarize(&mut errors, config);
    sections::validate_retry(&mut errors, config);
    sections::validate_fetch(&mut errors, config);
    sections::validate_pricing(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
