//! Chunked recursive summarization of paper sections.
//!
//! Long text is split into overlapping chunks, each chunk is summarized,
//! and the concatenated summaries are reduced (recursively when still too
//! long) into one summary per section and one for the whole paper.

pub mod chunk;
pub mod error;
pub mod prompts;
pub mod report;
pub mod summarizer;

pub use chunk::ChunkSplitter;
pub use error::SummarizeError;
pub use report::{file_stem, write_json, write_markdown};
pub use summarizer::{joined_summaries, SectionProgress, SectionSummary, Summarizer};
