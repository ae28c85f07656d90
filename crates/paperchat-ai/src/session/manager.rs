//! PaperSession struct and prompt construction.

use crate::token_tracker::TokenTracker;
use crate::Message;

use super::history::ConversationHistory;

pub const SYSTEM_PROMPT: &str = "You are an expert researcher and summarizer.";

/// A question-answering session over one paper.
pub struct PaperSession {
    /// Extracted paper text, embedded in every prompt.
    pub(super) paper: String,
    pub(super) history: ConversationHistory,
    pub(super) tracker: TokenTracker,
    /// Provider name for token tracking.
    pub(super) provider: String,
}

impl PaperSession {
    pub fn new(paper: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            paper: paper.into(),
            history: ConversationHistory::default(),
            tracker: TokenTracker::new(),
            provider: provider.into(),
        }
    }

    pub fn with_max_history(mut self, cap: usize) -> Self {
        self.history = ConversationHistory::new(cap);
        self
    }

    /// Messages sent for `question`: the system prompt and one user turn
    /// carrying the paper, the recent transcript and the question.
    pub fn build_prompt(&self, question: &str) -> Vec<Message> {
        let user = format!(
            "You are provided a full paper below scraped from HTML format:\n\
             ```\n{paper}\n```\n\n\
             If provided, the most recent messages are provided below:\n\
             ```{transcript}\n```\n\n\
             Given the paper contents, answer the user's prompt or question.\n\
             Use a format suitable for a terminal or command line interface.\n\
             If you quote the paper directly, remove any HTML artifacts.\n\n\
             {question}",
            paper = self.paper,
            transcript = self.history.transcript(),
        );
        vec![Message::system(SYSTEM_PROMPT), Message::user(user)]
    }

    pub fn paper(&self) -> &str {
        &self.paper
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }
}

/// Flatten prompt messages into the text that is token-counted.
pub(super) fn prompt_text(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn prompt_embeds_paper_transcript_and_question() {
        let mut session = PaperSession::new("PaLM 2 is a language model.", "claude");
        session.history.record_exchange("Who wrote it?", "Google.");

        let messages = session.build_prompt("What is PaLM 2?");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);

        let user = &messages[1].content;
        assert_eq!(messages[1].role, Role::User);
        assert!(user.contains("```\nPaLM 2 is a language model.\n```"));
        assert!(user.contains("```\n\nHuman: Who wrote it?\n\nAssistant: Google.\n```"));
        assert!(user.contains("remove any HTML artifacts"));
        assert!(user.ends_with("What is PaLM 2?"));
    }

    #[test]
    fn empty_history_leaves_empty_fence() {
        let session = PaperSession::new("text", "claude");
        let messages = session.build_prompt("q");
        assert!(messages[1].content.contains("below:\n```\n```"));
    }

    #[test]
    fn prompt_text_joins_messages() {
        let text = prompt_text(&[Message::system("a"), Message::user("b")]);
        assert_eq!(text, "a\n\nb");
    }
}
