//! Async question methods for PaperSession (non-streaming + streaming).

use std::time::{Duration, Instant};

use tracing::debug;

use crate::{AiClient, AiError, ChunkCallback, TokenUsage};

use super::manager::{prompt_text, PaperSession};

/// The outcome of one question.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub completion: String,
    /// Flattened prompt text, kept for local token counting.
    pub prompt: String,
    pub usage: TokenUsage,
    pub elapsed: Duration,
}

impl PaperSession {
    /// Ask a question and wait for the whole answer.
    pub async fn ask(&mut self, client: &dyn AiClient, question: &str) -> Result<Exchange, AiError> {
        let messages = self.build_prompt(question);
        let prompt = prompt_text(&messages);
        debug!(provider = %self.provider, prompt = %prompt, "sending prompt");
        let start = Instant::now();

        let response = client.send_message(&messages).await?;
        self.finish(question, prompt, response.content, response.usage, start)
    }

    /// Ask a question, passing each text delta to `on_chunk` as it arrives.
    pub async fn ask_streaming(
        &mut self,
        client: &dyn AiClient,
        question: &str,
        on_chunk: ChunkCallback,
    ) -> Result<Exchange, AiError> {
        let messages = self.build_prompt(question);
        let prompt = prompt_text(&messages);
        debug!(provider = %self.provider, prompt = %prompt, "sending prompt");
        let start = Instant::now();

        let response = client.send_message_streaming(&messages, on_chunk).await?;
        self.finish(question, prompt, response.content, response.usage, start)
    }

    fn finish(
        &mut self,
        question: &str,
        prompt: String,
        completion: String,
        usage: TokenUsage,
        start: Instant,
    ) -> Result<Exchange, AiError> {
        self.tracker.record(&self.provider, &usage);
        self.history.record_exchange(question, completion.clone());

        let elapsed = start.elapsed();
        debug!(
            provider = %self.provider,
            elapsed_ms = elapsed.as_millis() as u64,
            history = self.history.len(),
            "question answered"
        );

        Ok(Exchange {
            completion,
            prompt,
            usage,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::{AiResponse, Message};

    /// Replies with a fixed answer and remembers every prompt it saw.
    struct ScriptedClient {
        answer: &'static str,
        fail: bool,
        seen: Mutex<Vec<Vec<Message>>>,
    }

    impl ScriptedClient {
        fn new(answer: &'static str) -> Self {
            Self {
                answer,
                fail: false,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new("")
            }
        }

        fn reply(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
            self.seen.lock().unwrap().push(messages.to_vec());
            if self.fail {
                return Err(AiError::ApiError("HTTP 400: bad request".into()));
            }
            Ok(AiResponse {
                content: self.answer.to_string(),
                usage: TokenUsage {
                    input_tokens: 100,
                    output_tokens: 5,
                },
            })
        }
    }

    #[async_trait]
    impl AiClient for ScriptedClient {
        async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
            self.reply(messages)
        }

        async fn send_message_streaming(
            &self,
            messages: &[Message],
            on_chunk: ChunkCallback,
        ) -> Result<AiResponse, AiError> {
            let response = self.reply(messages)?;
            for word in response.content.split_inclusive(' ') {
                on_chunk(word.to_string());
            }
            Ok(response)
        }
    }

    #[tokio::test]
    async fn ask_records_history_and_usage() {
        let client = ScriptedClient::new("It is a language model.");
        let mut session = PaperSession::new("paper text", "claude");

        let exchange = session.ask(&client, "What is PaLM 2?").await.unwrap();
        assert_eq!(exchange.completion, "It is a language model.");
        assert_eq!(exchange.usage.input_tokens, 100);
        assert!(exchange.prompt.contains("paper text"));
        assert!(exchange.prompt.ends_with("What is PaLM 2?"));

        assert_eq!(session.history().len(), 2);
        assert_eq!(
            session.history().transcript(),
            "\n\nHuman: What is PaLM 2?\n\nAssistant: It is a language model."
        );
        assert_eq!(session.tracker().call_count(), 1);
        assert_eq!(session.tracker().for_provider("claude").unwrap().output_tokens, 5);
    }

    #[tokio::test]
    async fn exchange_prompt_is_the_text_sent() {
        let client = ScriptedClient::new("Answer.");
        let mut session = PaperSession::new("paper", "claude");
        let exchange = session.ask(&client, "Why?").await.unwrap();

        let seen = client.seen.lock().unwrap();
        assert_eq!(exchange.prompt, prompt_text(&seen[0]));
        assert!(exchange.prompt.starts_with(crate::session::SYSTEM_PROMPT));
    }

    #[tokio::test]
    async fn second_question_sees_first_exchange() {
        let client = ScriptedClient::new("Answer.");
        let mut session = PaperSession::new("paper", "claude");
        session.ask(&client, "First?").await.unwrap();
        session.ask(&client, "Second?").await.unwrap();

        let seen = client.seen.lock().unwrap();
        assert!(!seen[0][1].content.contains("Human: First?"));
        assert!(seen[1][1].content.contains("\n\nHuman: First?\n\nAssistant: Answer."));
    }

    #[tokio::test]
    async fn streaming_forwards_chunks_and_records_history() {
        let client = ScriptedClient::new("Streamed answer here.");
        let mut session = PaperSession::new("paper", "claude");
        let chunks = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&chunks);

        let exchange = session
            .ask_streaming(
                &client,
                "Q?",
                Box::new(move |chunk| sink.lock().unwrap().push(chunk)),
            )
            .await
            .unwrap();

        assert_eq!(chunks.lock().unwrap().concat(), "Streamed answer here.");
        assert_eq!(exchange.completion, "Streamed answer here.");
        assert_eq!(session.history().len(), 2);
    }

    #[tokio::test]
    async fn failed_question_leaves_history_untouched() {
        let client = ScriptedClient::failing();
        let mut session = PaperSession::new("paper", "claude");

        let err = session.ask(&client, "Q?").await.unwrap_err();
        assert!(matches!(err, AiError::ApiError(_)));
        assert!(session.history().is_empty());
        assert_eq!(session.tracker().call_count(), 0);
    }

    #[tokio::test]
    async fn history_is_capped() {
        let client = ScriptedClient::new("A.");
        let mut session = PaperSession::new("paper", "claude").with_max_history(4);
        for i in 0..4 {
            session.ask(&client, &format!("Q{i}?")).await.unwrap();
        }
        assert_eq!(session.history().len(), 4);
        assert_eq!(
            session.history().entries().next().unwrap().content,
            "Q2?"
        );
    }
}
