use serde::{Deserialize, Serialize};

/// Which completion backend produces section summaries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum SummaryProvider {
    #[default]
    Openai,
    Claude,
}

/// Chunked recursive summarization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizeConfig {
    pub provider: SummaryProvider,
    /// Must name a Claude model when `provider` is `claude`.
    pub model: String,
    /// Chat-completions endpoint for the `openai` provider.
    pub base_url: String,
    /// Chunk size in characters (valid range: 1000-200000).
    pub chunk_size: u32,
    /// Characters shared by successive chunks; must be below `chunk_size`.
    pub overlap: u32,
    /// Chunks summarized per pass (valid range: 1-20).
    pub max_chunks: u32,
    /// Recursion passes before a forced reduce (valid range: 1-32).
    pub max_depth: u32,
    /// Request timeout per summary call in seconds (valid range: 1-600).
    pub timeout_secs: u64,
    pub output_dir: String,
    pub default_url: String,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            provider: SummaryProvider::Openai,
            model: "gpt-3.5-turbo".into(),
            base_url: "https://api.openai.com/v1/chat/completions".into(),
            chunk_size: 10_000,
            overlap: 100,
            max_chunks: 5,
            max_depth: 8,
            timeout_secs: 120,
            output_dir: ".".into(),
            default_url: "https://ar5iv.labs.arxiv.org/html/2302.04761".into(),
        }
    }
}
