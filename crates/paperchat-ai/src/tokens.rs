//! Local token counting and dollar cost estimates.

use crate::AiError;

/// Token counter using tiktoken-rs `cl100k_base` BPE.
pub struct TokenCounter {
    bpe: tiktoken_rs::CoreBPE,
}

impl TokenCounter {
    pub fn new() -> Result<Self, AiError> {
        let bpe = tiktoken_rs::cl100k_base()
            .map_err(|e| AiError::NotConfigured(format!("failed to load cl100k_base: {e}")))?;
        Ok(Self { bpe })
    }

    /// Count the number of tokens in a string.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }
}

/// Dollar rates per million tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    pub prompt_per_million: f64,
    pub completion_per_million: f64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            prompt_per_million: 1.63,
            completion_per_million: 5.51,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostEstimate {
    pub prompt: f64,
    pub completion: f64,
}

impl CostEstimate {
    pub fn price(prompt_tokens: u64, completion_tokens: u64, pricing: &Pricing) -> Self {
        Self {
            prompt: pricing.prompt_per_million * prompt_tokens as f64 / 1_000_000.0,
            completion: pricing.completion_per_million * completion_tokens as f64 / 1_000_000.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.prompt + self.completion
    }
}

impl std::fmt::Display for CostEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "${:.6} + ${:.6} = ${:.6}",
            self.prompt,
            self.completion,
            self.total()
        )
    }
}
