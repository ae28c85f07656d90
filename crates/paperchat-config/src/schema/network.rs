//! Network configuration types: retry backoff and paper fetching.

use serde::{Deserialize, Serialize};

/// Retry policy for LLM summarization calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Valid range: 1-20.
    pub max_attempts: u32,
    pub min_delay_secs: u64,
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            min_delay_secs: 1,
            max_delay_secs: 60,
        }
    }
}

/// HTTP settings for arXiv / ar5iv downloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    /// Valid range: 1-300.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".into(),
            timeout_secs: 10,
        }
    }
}
