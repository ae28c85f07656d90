//! OpenAI-compatible chat completion client (`/v1/chat/completions`).
//!
//! Covers OpenAI itself and any local or hosted server speaking the same
//! wire format. Used by the summarizer.

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
