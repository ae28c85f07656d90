//! Token usage tracking across a session and providers.

use std::collections::HashMap;

use crate::TokenUsage;

/// Tracks cumulative token usage per provider.
pub struct TokenTracker {
    /// Total usage across all providers.
    total: TokenUsage,
    /// Usage broken down by provider name.
    by_provider: HashMap<String, TokenUsage>,
    /// Number of API calls made.
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self {
            total: TokenUsage::default(),
            by_provider: HashMap::new(),
            call_count: 0,
        }
    }

    /// Record token usage from an API call.
    pub fn record(&mut self, provider: &str, usage: &TokenUsage) {
        self.total.input_tokens += usage.input_tokens;
        self.total.output_tokens += usage.output_tokens;
        self.call_count += 1;

        let entry = self.by_provider.entry(provider.to_string()).or_default();
        entry.input_tokens += usage.input_tokens;
        entry.output_tokens += usage.output_tokens;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn for_provider(&self, provider: &str) -> Option<&TokenUsage> {
        self.by_provider.get(provider)
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

impl Default for TokenTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(input: u64, output: u64) -> TokenUsage {
        TokenUsage {
            input_tokens: input,
            output_tokens: output,
        }
    }

    #[test]
    fn accumulates_per_provider() {
        let mut tracker = TokenTracker::new();
        tracker.record("claude", &usage(100, 10));
        tracker.record("claude", &usage(50, 5));
        tracker.record("openai", &usage(7, 3));

        assert_eq!(tracker.call_count(), 3);
        assert_eq!(tracker.total(), &usage(157, 18));
        assert_eq!(tracker.for_provider("claude"), Some(&usage(150, 15)));
        assert_eq!(tracker.for_provider("openai"), Some(&usage(7, 3)));
        assert_eq!(tracker.for_provider("gemini"), None);
    }
}
