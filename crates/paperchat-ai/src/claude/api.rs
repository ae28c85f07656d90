//! AiClient trait implementation for ClaudeClient (send_message + streaming).

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::streaming::{parse_sse_stream, SseEvent};
use crate::{error_for_status, AiClient, AiError, AiResponse, ChunkCallback, Message, TokenUsage};

use super::client::{ClaudeClient, ANTHROPIC_API_URL};

impl ClaudeClient {
    async fn post(&self, body: &serde_json::Value) -> Result<reqwest::Response, AiError> {
        let response = self
            .http
            .post(ANTHROPIC_API_URL)
            .headers(self.auth_headers()?)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(AiError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }
        Ok(response)
    }
}

#[async_trait]
impl AiClient for ClaudeClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages, false);

        debug!(model = %self.config.model, "Claude API request");

        let response = self.post(&body).await?;
        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }

    async fn send_message_streaming(
        &self,
        messages: &[Message],
        on_chunk: ChunkCallback,
    ) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages, true);

        debug!(model = %self.config.model, "Claude API streaming request");

        let response = self.post(&body).await?;

        let mut full_content = String::new();
        let mut usage = TokenUsage::default();
        let mut stream_error: Option<String> = None;

        parse_sse_stream(response, |event: SseEvent| {
            let event_type = event.event.as_deref().unwrap_or("");
            let Ok(data) = serde_json::from_str::<serde_json::Value>(&event.data) else {
                return;
            };

            match event_type {
                "content_block_delta" => {
                    if data["delta"]["type"] == "text_delta" {
                        if let Some(text) = data["delta"]["text"].as_str() {
                            full_content.push_str(text);
                            on_chunk(text.to_string());
                        }
                    }
                }
                "message_start" => {
                    if let Some(u) = data["message"].get("usage") {
                        usage.input_tokens = u["input_tokens"].as_u64().unwrap_or(0);
                    }
                }
                "message_delta" => {
                    if let Some(u) = data.get("usage") {
                        usage.output_tokens = u["output_tokens"].as_u64().unwrap_or(0);
                    }
                }
                "error" => {
                    stream_error = Some(
                        data["error"]["message"]
                            .as_str()
                            .unwrap_or("unknown stream error")
                            .to_string(),
                    );
                }
                _ => {}
            }
        })
        .await?;

        if let Some(message) = stream_error {
            return Err(AiError::ServerError(message));
        }

        if usage.is_empty() {
            warn!("No usage data received in streaming response");
        }

        Ok(AiResponse {
            content: full_content,
            usage,
        })
    }
}
