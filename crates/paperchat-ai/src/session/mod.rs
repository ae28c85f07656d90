//! Paper Q&A session management.
//!
//! A `PaperSession` holds the paper text and a rolling conversation
//! history, builds the prompt for each question, and records token usage.

mod chat;
mod history;
mod manager;

pub use chat::Exchange;
pub use history::{render_transcript, ConversationHistory, HistoryEntry, Speaker};
pub use manager::{PaperSession, SYSTEM_PROMPT};
