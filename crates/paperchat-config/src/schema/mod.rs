//! Configuration schema types for paperchat.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod network;
mod summarize;
mod system;

pub use chat::*;
pub use network::*;
pub use summarize::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for paperchat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PaperchatConfig {
    pub chat: ChatConfig,
    pub summarize: SummarizeConfig,
    pub retry: RetryConfig,
    pub fetch: FetchConfig,
    pub pricing: PricingConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
