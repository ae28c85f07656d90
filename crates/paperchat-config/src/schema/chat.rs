use serde::{Deserialize, Serialize};

/// Interactive question-answering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Number of individual messages kept in the rolling history (valid range: 2-100).
    pub max_history: u32,
    pub streaming: bool,
    /// Request timeout for answers in seconds (valid range: 1-600).
    pub timeout_secs: u64,
    /// Paper opened when the URL prompt is left empty.
    pub sample_url: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: "claude-3-5-haiku-latest".into(),
            max_tokens: 2000,
            temperature: 0.0,
            max_history: 10,
            streaming: true,
            timeout_secs: 120,
            sample_url: "https://ar5iv.labs.arxiv.org/html/2305.10403".into(),
        }
    }
}
