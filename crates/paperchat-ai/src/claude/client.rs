//! Claude API client struct, request building, and response parsing.

use std::time::Duration;

use crate::{AiError, AiResponse, Message, Role, TokenUsage};

use super::config::ClaudeConfig;

pub(crate) const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub(crate) const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude API client.
pub struct ClaudeClient {
    pub(crate) config: ClaudeConfig,
    pub(crate) http: reqwest::Client,
}

impl ClaudeClient {
    pub fn new(config: ClaudeConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build auth headers for the Messages API.
    pub(crate) fn auth_headers(&self) -> Result<reqwest::header::HeaderMap, AiError> {
        let mut headers = reqwest::header::HeaderMap::new();
        let key = self
            .config
            .api_key
            .parse::<reqwest::header::HeaderValue>()
            .map_err(|_| AiError::NotConfigured("API key is not a valid header value".into()))?;
        headers.insert("x-api-key", key);
        headers.insert(
            "anthropic-version",
            reqwest::header::HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        Ok(headers)
    }

    /// Build the JSON request body for the Messages API.
    pub(crate) fn build_request_body(&self, messages: &[Message], stream: bool) -> serde_json::Value {
        let mut msgs = Vec::new();
        let mut system = Vec::new();
        for msg in messages {
            let role = match msg.role {
                Role::User => "user",
                Role::Assistant => "assistant",
                Role::System => {
                    // system is separate in Claude API
                    system.push(msg.content.as_str());
                    continue;
                }
            };
            msgs.push(serde_json::json!({
                "role": role,
                "content": msg.content,
            }));
        }

        let mut body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "messages": msgs,
        });

        if !system.is_empty() {
            body["system"] = serde_json::json!(system.join("\n\n"));
        }

        if stream {
            body["stream"] = serde_json::json!(true);
        }

        body
    }

    /// Parse a non-streaming response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let blocks = json["content"]
            .as_array()
            .ok_or_else(|| AiError::ParseError("no content blocks in response".to_string()))?;

        let content = blocks
            .iter()
            .filter(|b| b["type"] == "text")
            .filter_map(|b| b["text"].as_str())
            .collect::<String>();

        let usage = TokenUsage {
            input_tokens: json["usage"]["input_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["output_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ClaudeClient {
        ClaudeClient::new(ClaudeConfig::new("test-key").with_model("claude-test")).unwrap()
    }

    #[test]
    fn system_messages_are_lifted() {
        let body = client().build_request_body(
            &[
                Message::system("You are an expert researcher."),
                Message::user("What is the paper about?"),
            ],
            false,
        );
        assert_eq!(body["system"], "You are an expert researcher.");
        assert_eq!(body["model"], "claude-test");
        assert_eq!(body["max_tokens"], 2000);
        let msgs = body["messages"].as_array().unwrap();
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0]["role"], "user");
        assert_eq!(msgs[0]["content"], "What is the paper about?");
        assert!(body.get("stream").is_none());
    }

    #[test]
    fn stream_flag_is_set() {
        let body = client().build_request_body(&[Message::user("hi")], true);
        assert_eq!(body["stream"], true);
        assert!(body.get("system").is_none());
    }

    #[test]
    fn parses_text_blocks_and_usage() {
        let json = serde_json::json!({
            "content": [
                { "type": "text", "text": "The paper " },
                { "type": "text", "text": "introduces PaLM 2." }
            ],
            "usage": { "input_tokens": 42, "output_tokens": 7 }
        });
        let response = client().parse_response(json).unwrap();
        assert_eq!(response.content, "The paper introduces PaLM 2.");
        assert_eq!(response.usage.input_tokens, 42);
        assert_eq!(response.usage.output_tokens, 7);
    }

    #[test]
    fn missing_content_is_a_parse_error() {
        let err = client()
            .parse_response(serde_json::json!({ "type": "error" }))
            .unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[test]
    fn auth_headers_carry_key_and_version() {
        let headers = client().auth_headers().unwrap();
        assert_eq!(headers["x-api-key"], "test-key");
        assert_eq!(headers["anthropic-version"], ANTHROPIC_VERSION);
    }
}
