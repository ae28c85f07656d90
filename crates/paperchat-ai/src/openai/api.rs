//! AiClient trait implementation for OpenAiClient (send_message + streaming).

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::streaming::parse_sse_stream;
use crate::{error_for_status, AiClient, AiError, AiResponse, ChunkCallback, Message, TokenUsage};

use super::client::{ChatCompletionChunk, ChatCompletionRequest, ChatCompletionResponse, OpenAiClient};

impl OpenAiClient {
    async fn post(&self, request: &ChatCompletionRequest) -> Result<reqwest::Response, AiError> {
        let mut req = self.http.post(&self.config.base_url).json(request);
        if let Some(key) = &self.config.api_key {
            req = req.bearer_auth(key);
        }

        let response = req.send().await.map_err(AiError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }
        Ok(response)
    }
}

#[async_trait]
impl AiClient for OpenAiClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        let request = self.build_request(messages, false);

        debug!(model = %self.config.model, url = %self.config.base_url, "chat completion request");

        let response = self.post(&request).await?;
        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(parsed)
    }

    async fn send_message_streaming(
        &self,
        messages: &[Message],
        on_chunk: ChunkCallback,
    ) -> Result<AiResponse, AiError> {
        let request = self.build_request(messages, true);

        debug!(model = %self.config.model, url = %self.config.base_url, "chat completion streaming request");

        let response = self.post(&request).await?;

        let mut full_content = String::new();
        let mut usage = TokenUsage::default();

        parse_sse_stream(response, |event| {
            if event.data == "[DONE]" {
                return;
            }
            let chunk: ChatCompletionChunk = match serde_json::from_str(&event.data) {
                Ok(chunk) => chunk,
                Err(e) => {
                    trace!(error = %e, "skipping unparseable stream event");
                    return;
                }
            };
            if let Some(u) = chunk.usage {
                usage = u.into();
            }
            for choice in chunk.choices {
                if let Some(text) = choice.delta.content.filter(|t| !t.is_empty()) {
                    full_content.push_str(&text);
                    on_chunk(text);
                }
            }
        })
        .await?;

        Ok(AiResponse {
            content: full_content,
            usage,
        })
    }
}
