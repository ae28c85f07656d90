//! PDF text extraction and the PDF ingest flow.

use paperchat_common::PaperError;

use crate::fetch::PaperFetcher;
use crate::url::{ARXIV_ABS_PREFIX, ARXIV_PDF_PREFIX};

/// Text extracted from a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfText {
    pub pages: usize,
    pub text: String,
}

impl PdfText {
    fn from_pages(pages: Vec<String>) -> Self {
        Self {
            pages: pages.len(),
            text: pages.concat(),
        }
    }
}

/// Extract the text of every page. Bytes must start with `%PDF`.
pub fn extract_text(bytes: &[u8]) -> Result<PdfText, PaperError> {
    if !bytes.starts_with(b"%PDF") {
        return Err(PaperError::Pdf("response is not a valid PDF".into()));
    }
    pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map(PdfText::from_pages)
        .map_err(|e| PaperError::Pdf(e.to_string()))
}

/// Resolve a URL for the PDF ingest flow: abstract pages are rewritten to
/// their PDF, and only `https://arxiv.org/pdf/...pdf` is accepted.
pub fn pdf_url(input: &str) -> Result<String, PaperError> {
    let input = input.trim();
    let url = match input.strip_prefix(ARXIV_ABS_PREFIX) {
        Some(id) => format!("{ARXIV_PDF_PREFIX}{id}.pdf"),
        None => input.to_string(),
    };

    let has_id = url
        .strip_prefix(ARXIV_PDF_PREFIX)
        .and_then(|rest| rest.strip_suffix(".pdf"))
        .is_some_and(|id| !id.is_empty());
    if has_id {
        Ok(url)
    } else {
        Err(PaperError::InvalidUrl(input.to_string()))
    }
}

/// Download an arXiv PDF (or abstract link) and return its text.
pub async fn read_pdf(fetcher: &PaperFetcher, url: &str) -> Result<PdfText, PaperError> {
    let url = pdf_url(url)?;
    fetcher.download_pdf(&url).await
}
