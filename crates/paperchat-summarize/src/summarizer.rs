//! Recursive map-reduce summarization over an `AiClient`.

use paperchat_ai::{AiClient, RetryPolicy};
use paperchat_paper::{filter_back_matter, PaperDocument, Section};
use tracing::{debug, info, warn};

use crate::chunk::ChunkSplitter;
use crate::error::SummarizeError;
use crate::prompts::{build_messages, REDUCE_PROMPT, SUMMARIZE_PROMPT};

/// Generated summary for one section (or `"Summary"` for the whole paper).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub title: String,
    pub summary: String,
}

/// `"<title>\n<summary>"` for every section, joined with `\n`.
pub fn joined_summaries(sections: &[SectionSummary]) -> String {
    sections
        .iter()
        .map(|s| format!("{}\n{}", s.title, s.summary))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reported around each section by [`Summarizer::summarize_sections`].
#[derive(Debug, Clone, Copy)]
pub enum SectionProgress<'a> {
    Started(&'a Section),
    Finished(&'a SectionSummary),
}

pub struct Summarizer {
    client: Box<dyn AiClient>,
    retry: RetryPolicy,
    splitter: ChunkSplitter,
    /// Chunks summarized per pass; the rest are dropped.
    max_chunks: usize,
    /// Split passes before a reduce is forced.
    max_depth: u32,
}

impl Summarizer {
    pub fn new(client: Box<dyn AiClient>) -> Self {
        Self {
            client,
            retry: RetryPolicy::default(),
            splitter: ChunkSplitter::default(),
            max_chunks: 5,
            max_depth: 8,
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_splitter(mut self, splitter: ChunkSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    pub fn with_max_chunks(mut self, max_chunks: usize) -> Self {
        self.max_chunks = max_chunks.max(1);
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    async fn complete(
        &self,
        prompt: &str,
        paper_title: &str,
        section_title: &str,
        text: &str,
    ) -> Result<String, SummarizeError> {
        let messages = build_messages(prompt, paper_title, section_title, text);
        let response = self
            .retry
            .run("summary", || self.client.send_message(&messages))
            .await?;
        Ok(response.content)
    }

    /// Summarize `text`: split, summarize the leading chunks, join, and
    /// either reduce the joined summaries or repeat on them while they are
    /// still at least one chunk long.
    pub async fn summarize_recursive(
        &self,
        paper_title: &str,
        section_title: &str,
        text: &str,
    ) -> Result<String, SummarizeError> {
        if text.trim().is_empty() {
            debug!(section = section_title, "empty text, nothing to summarize");
            return Ok(String::new());
        }

        let mut current = text.to_string();
        let mut depth = 1;
        loop {
            let chunks = self.splitter.split(&current);
            debug!(
                section = section_title,
                depth,
                chunks = chunks.len(),
                chars = current.chars().count(),
                "summarizing chunks"
            );

            let mut summaries = Vec::new();
            for (index, chunk) in chunks.iter().take(self.max_chunks).enumerate() {
                debug!(section = section_title, index, "summarizing chunk");
                summaries.push(
                    self.complete(SUMMARIZE_PROMPT, paper_title, section_title, chunk)
                        .await?,
                );
            }
            let joined = summaries.join("\n");

            if joined.chars().count() < self.splitter.chunk_size() {
                return self
                    .complete(REDUCE_PROMPT, paper_title, section_title, &joined)
                    .await;
            }
            if depth >= self.max_depth {
                warn!(
                    section = section_title,
                    depth,
                    chars = joined.chars().count(),
                    "summaries are not shrinking, reducing anyway"
                );
                return self
                    .complete(REDUCE_PROMPT, paper_title, section_title, &joined)
                    .await;
            }

            current = joined;
            depth += 1;
        }
    }

    pub async fn summarize_section(
        &self,
        paper_title: &str,
        section: &Section,
    ) -> Result<SectionSummary, SummarizeError> {
        info!(section = %section.title, chars = section.text.chars().count(), "summarizing section");
        let summary = self
            .summarize_recursive(paper_title, &section.title, &section.text)
            .await?;
        Ok(SectionSummary {
            title: section.title.clone(),
            summary,
        })
    }

    /// Summarize every section that is not back matter, in order.
    pub async fn summarize_sections<F>(
        &self,
        document: &PaperDocument,
        mut on_progress: F,
    ) -> Result<Vec<SectionSummary>, SummarizeError>
    where
        F: FnMut(SectionProgress<'_>),
    {
        let mut out = Vec::new();
        for section in filter_back_matter(document.sections.clone()) {
            on_progress(SectionProgress::Started(&section));
            let summary = self.summarize_section(&document.title, &section).await?;
            on_progress(SectionProgress::Finished(&summary));
            out.push(summary);
        }
        Ok(out)
    }

    /// Summarize the section summaries into one for the whole paper.
    pub async fn summarize_overall(
        &self,
        paper_title: &str,
        sections: &[SectionSummary],
    ) -> Result<String, SummarizeError> {
        self.summarize_recursive(paper_title, "", &joined_summaries(sections))
            .await
    }
}
