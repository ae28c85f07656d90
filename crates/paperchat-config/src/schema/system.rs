//! System configuration types: pricing and logging.

use serde::{Deserialize, Serialize};

/// Dollar rates used for the per-answer cost estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub prompt_per_million: f64,
    pub completion_per_million: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            prompt_per_million: 1.63,
            completion_per_million: 5.51,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}
