//! Rolling conversation history with FIFO eviction.

use std::collections::VecDeque;
use std::fmt;

/// Default number of history entries kept (five question/answer pairs).
pub const DEFAULT_MAX_HISTORY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Human,
    Assistant,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Speaker::Human => "Human",
            Speaker::Assistant => "Assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub speaker: Speaker,
    pub content: String,
}

impl HistoryEntry {
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Human,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            content: content.into(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n\n{}: {}", self.speaker.label(), self.content)
    }
}

/// Concatenate rendered entries with no separator between them.
pub fn render_transcript<'a>(entries: impl IntoIterator<Item = &'a HistoryEntry>) -> String {
    entries.into_iter().map(ToString::to_string).collect()
}

/// Bounded queue of recent entries. `len() <= cap()` always holds.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    entries: VecDeque<HistoryEntry>,
    cap: usize,
}

impl ConversationHistory {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(cap.saturating_add(1)),
            cap,
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.cap {
            self.entries.pop_front();
        }
    }

    /// Append a question then its answer.
    pub fn record_exchange(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.push(HistoryEntry::human(question));
        self.push(HistoryEntry::assistant(answer));
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn transcript(&self) -> String {
        render_transcript(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_matches_expected_format() {
        let entries = [
            HistoryEntry::human("Hello"),
            HistoryEntry::assistant("Hi"),
            HistoryEntry::human("How are you?"),
            HistoryEntry::assistant("Good, thanks!"),
        ];
        assert_eq!(
            render_transcript(&entries),
            "\n\nHuman: Hello\n\nAssistant: Hi\n\nHuman: How are you?\n\nAssistant: Good, thanks!"
        );
    }

    #[test]
    fn empty_history_renders_empty_string() {
        assert_eq!(ConversationHistory::default().transcript(), "");
    }

    #[test]
    fn oldest_entries_are_evicted() {
        let mut history = ConversationHistory::new(4);
        for i in 0..5 {
            history.record_exchange(format!("q{i}"), format!("a{i}"));
            assert!(history.len() <= history.cap());
        }
        let contents: Vec<_> = history.entries().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, ["q3", "a3", "q4", "a4"]);
        assert_eq!(history.entries().next().map(|e| e.speaker), Some(Speaker::Human));
    }

    #[test]
    fn odd_cap_can_start_with_an_answer() {
        let mut history = ConversationHistory::new(3);
        history.record_exchange("q0", "a0");
        history.record_exchange("q1", "a1");
        let speakers: Vec<_> = history.entries().map(|e| e.speaker).collect();
        assert_eq!(speakers, [Speaker::Assistant, Speaker::Human, Speaker::Assistant]);
    }

    #[test]
    fn zero_cap_keeps_nothing() {
        let mut history = ConversationHistory::new(0);
        history.record_exchange("q", "a");
        assert!(history.is_empty());
    }
}
