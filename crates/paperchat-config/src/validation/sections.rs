//! Per-section validators: chat, summarize, retry, fetch, and pricing.

use crate::schema::{PaperchatConfig, SummaryProvider};

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &PaperchatConfig) {
    validate_non_empty(errors, "chat.model", &config.chat.model);
    validate_range(
        errors,
        "chat.max_tokens",
        config.chat.max_tokens.into(),
        1,
        100_000,
    );
    validate_range_f64(errors, "chat.temperature", config.chat.temperature, 0.0, 1.0);
    validate_range(
        errors,
        "chat.max_history",
        config.chat.max_history.into(),
        2,
        100,
    );
    validate_range(errors, "chat.timeout_secs", config.chat.timeout_secs, 1, 600);
}

pub(crate) fn validate_summarize(errors: &mut Vec<String>, config: &PaperchatConfig) {
    let s = &config.summarize;
    validate_non_empty(errors, "summarize.model", &s.model);
    validate_non_empty(errors, "summarize.base_url", &s.base_url);
    if s.provider == SummaryProvider::Claude && !s.model.trim_start().starts_with("claude") {
        errors.push(format!(
            "summarize.model = {:?} is not a Claude model; set it when summarize.provider = \"claude\"",
            s.model
        ));
    }
    validate_range(errors, "summarize.chunk_size", s.chunk_size.into(), 1000, 200_000);
    if s.overlap >= s.chunk_size {
        errors.push(format!(
            "summarize.overlap = {} must be smaller than summarize.chunk_size = {}",
            s.overlap, s.chunk_size
        ));
    }
    validate_range(errors, "summarize.max_chunks", s.max_chunks.into(), 1, 20);
    validate_range(errors, "summarize.max_depth", s.max_depth.into(), 1, 32);
    validate_range(errors, "summarize.timeout_secs", s.timeout_secs, 1, 600);
}

pub(crate) fn validate_retry(errors: &mut Vec<String>, config: &PaperchatConfig) {
    let r = &config.retry;
    validate_range(errors, "retry.max_attempts", r.max_attempts.into(), 1, 20);
    validate_range(errors, "retry.max_delay_secs", r.max_delay_secs, 0, 3600);
    if r.min_delay_secs > r.max_delay_secs {
        errors.push(format!(
            "retry.min_delay_secs = {} exceeds retry.max_delay_secs = {}",
            r.min_delay_secs, r.max_delay_secs
        ));
    }
}

pub(crate) fn validate_fetch(errors: &mut Vec<String>, config: &PaperchatConfig) {
    validate_non_empty(errors, "fetch.user_agent", &config.fetch.user_agent);
    validate_range(errors, "fetch.timeout_secs", config.fetch.timeout_secs, 1, 300);
}

pub(crate) fn validate_pricing(errors: &mut Vec<String>, config: &PaperchatConfig) {
    validate_range_f64(
        errors,
        "pricing.prompt_per_million",
        config.pricing.prompt_per_million,
        0.0,
        1000.0,
    );
    validate_range_f64(
        errors,
        "pricing.completion_per_million",
        config.pricing.completion_per_million,
        0.0,
        1000.0,
    );
}
