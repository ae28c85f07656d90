//! LLM engine for paperchat.
//!
//! Provides Anthropic and OpenAI-compatible API clients with:
//! - Streaming (SSE) support
//! - Retry with jittered exponential backoff
//! - Rolling conversation history and the paper Q&A session
//! - Token counting, usage tracking and cost estimates

pub mod claude;
pub mod openai;
pub mod retry;
pub mod session;
pub mod streaming;
pub mod token_tracker;
pub mod tokens;

use async_trait::async_trait;

pub use claude::{ClaudeClient, ClaudeConfig};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use retry::RetryPolicy;
pub use session::{ConversationHistory, Exchange, HistoryEntry, PaperSession, Speaker};
pub use token_tracker::TokenTracker;
pub use tokens::{CostEstimate, Pricing, TokenCounter};

/// Callback receiving each streamed text delta.
pub type ChunkCallback = Box<dyn Fn(String) + Send + Sync>;

#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;

    async fn send_message_streaming(
        &self,
        messages: &[Message],
        on_chunk: ChunkCallback,
    ) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }

    pub fn is_empty(&self) -> bool {
        self.input_tokens == 0 && self.output_tokens == 0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Server error: {0}")]
    ServerError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Not configured: {0}")]
    NotConfigured(String),
    #[error("gave up after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: Box<AiError> },
}

impl AiError {
    /// Whether a later attempt at the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AiError::RateLimited
                | AiError::ServerError(_)
                | AiError::NetworkError(_)
                | AiError::Timeout
        )
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AiError::Timeout
        } else {
            AiError::NetworkError(err.to_string())
        }
    }
}

impl From<AiError> for paperchat_common::PaperchatError {
    fn from(err: AiError) -> Self {
        paperchat_common::PaperchatError::Ai(err.to_string())
    }
}

/// Map a non-success HTTP response to the matching `AiError`.
pub(crate) async fn error_for_status(response: reqwest::Response) -> AiError {
    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return AiError::RateLimited;
    }
    let text = response.text().await.unwrap_or_default();
    let text = text.chars().take(200).collect::<String>();
    if status.is_server_error() {
        AiError::ServerError(format!("HTTP {status}: {text}"))
    } else {
        AiError::ApiError(format!("HTTP {status}: {text}"))
    }
}
