//! JSON and Markdown summary reports.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::SummarizeError;
use crate::summarizer::SectionSummary;

/// Filesystem-friendly stem derived from a paper title.
pub fn file_stem(title: &str) -> String {
    title
        .replace(' ', "_")
        .replace([':', '?'], "")
        .replace('/', "_")
        .to_lowercase()
}

/// Write `[[title, summary], ...]` to `<dir>/<stem>.json`.
pub fn write_json(dir: &Path, stem: &str, sections: &[SectionSummary]) -> Result<PathBuf, SummarizeError> {
    let pairs: Vec<(&str, &str)> = sections
        .iter()
        .map(|s| (s.title.as_str(), s.summary.as_str()))
        .collect();

    let path = dir.join(format!("{stem}.json"));
    fs::create_dir_all(dir)?;
    fs::write(&path, serde_json::to_string(&pairs)?)?;
    info!(path = %path.display(), sections = sections.len(), "wrote section summaries");
    Ok(path)
}

pub fn render_markdown(paper_title: &str, sections: &[SectionSummary], overall: &str) -> String {
    let mut out = format!("# {paper_title}\n");
    let all = sections
        .iter()
        .map(|s| (s.title.as_str(), s.summary.as_str()))
        .chain(std::iter::once(("Summary", overall)));
    for (title, summary) in all {
        let _ = write!(out, "## {title}\n{summary}\n\n");
    }
    out
}

/// Write the section summaries plus the overall `Summary` to `<dir>/<stem>.md`.
pub fn write_markdown(
    dir: &Path,
    stem: &str,
    paper_title: &str,
    sections: &[SectionSummary],
    overall: &str,
) -> Result<PathBuf, SummarizeError> {
    let path = dir.join(format!("{stem}.md"));
    fs::create_dir_all(dir)?;
    fs::write(&path, render_markdown(paper_title, sections, overall))?;
    info!(path = %path.display(), "wrote markdown report");
    Ok(path)
}
