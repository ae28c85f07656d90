//! HTTP retrieval of papers with PDF fallback.

use std::time::Duration;

use paperchat_common::PaperError;
use tracing::{debug, info, warn};

use crate::html::{self, PaperDocument};
use crate::pdf::{self, PdfText};
use crate::url::{ar5iv_to_pdf_url, is_abstract_redirect};

/// Where the text of a fetched paper came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSource {
    Html,
    /// ar5iv redirected to the abstract page, so the PDF was used.
    PdfFallback,
}

#[derive(Debug, Clone)]
pub struct FetchedPaper {
    pub url: String,
    /// Page title; only known for HTML renderings.
    pub title: Option<String>,
    pub text: String,
    pub source: PaperSource,
    /// Page count of the PDF the text came from.
    pub pages: Option<usize>,
}

/// A response to a request for an ar5iv page.
#[derive(Debug, PartialEq, Eq)]
enum Page {
    Html(String),
    /// ar5iv has no rendering; the paper is at this PDF URL.
    PdfFallback(String),
}

/// The PDF to read instead when a request for `requested` ended on
/// `final_url`, or `None` when the HTML rendering was served.
pub fn pdf_fallback(requested: &str, final_url: &str) -> Result<Option<String>, PaperError> {
    if is_abstract_redirect(final_url) {
        ar5iv_to_pdf_url(requested).map(Some)
    } else {
        Ok(None)
    }
}

pub struct PaperFetcher {
    http: reqwest::Client,
}

impl PaperFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, PaperError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| PaperError::Fetch(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, PaperError> {
        debug!(url, "GET");
        self.http
            .get(url)
            .send()
            .await
            .map_err(|e| PaperError::Fetch(e.to_string()))
    }

    fn check_status(response: &reqwest::Response) -> Result<(), PaperError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(PaperError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            })
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<Page, PaperError> {
        let response = self.get(url).await?;
        if let Some(pdf_url) = pdf_fallback(url, response.url().as_str())? {
            return Ok(Page::PdfFallback(pdf_url));
        }
        Self::check_status(&response)?;
        let body = response
            .text()
            .await
            .map_err(|e| PaperError::Fetch(e.to_string()))?;
        Ok(Page::Html(body))
    }

    /// Fetch an ar5iv page as plain text, falling back to the PDF.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPaper, PaperError> {
        let body = match self.fetch_page(url).await? {
            Page::Html(body) => body,
            Page::PdfFallback(pdf_url) => {
                warn!(url, pdf_url = %pdf_url, "no HTML rendering, falling back to PDF");
                let pdf = self.download_pdf(&pdf_url).await?;
                return Ok(FetchedPaper {
                    url: pdf_url,
                    title: None,
                    text: pdf.text,
                    source: PaperSource::PdfFallback,
                    pages: Some(pdf.pages),
                });
            }
        };

        let document = scraper::Html::parse_document(&body);
        let title = html::page_title(&document)?;
        let text = html::visible_text(&document);
        info!(url, chars = text.len(), "fetched HTML paper");

        Ok(FetchedPaper {
            url: url.to_string(),
            title,
            text,
            source: PaperSource::Html,
            pages: None,
        })
    }

    /// Fetch and parse an ar5iv page into title and sections.
    pub async fn fetch_document(&self, url: &str) -> Result<PaperDocument, PaperError> {
        let Page::Html(body) = self.fetch_page(url).await? else {
            return Err(PaperError::HtmlUnavailable(url.to_string()));
        };
        let document = PaperDocument::parse(&body)?;
        info!(url, title = %document.title, sections = document.sections.len(), "parsed paper");
        Ok(document)
    }

    /// Download a PDF and extract its text off the async thread.
    pub async fn download_pdf(&self, url: &str) -> Result<PdfText, PaperError> {
        let response = self.get(url).await?;
        Self::check_status(&response)?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| PaperError::Fetch(e.to_string()))?;

        debug!(url, bytes = bytes.len(), "extracting PDF text");
        let pdf = tokio::task::spawn_blocking(move || pdf::extract_text(&bytes))
            .await
            .map_err(|e| PaperError::Pdf(format!("extraction task failed: {e}")))??;
        info!(url, pages = pdf.pages, chars = pdf.text.len(), "extracted PDF text");
        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetcher_builds_with_custom_agent() {
        assert!(PaperFetcher::new("Mozilla/5.0", Duration::from_secs(10)).is_ok());
    }

    #[test]
    fn abstract_redirect_falls_back_to_pdf() {
        let pdf = pdf_fallback(
            "https://ar5iv.labs.arxiv.org/html/2305.10403",
            "https://arxiv.org/abs/2305.10403",
        )
        .unwrap();
        assert_eq!(pdf.as_deref(), Some("https://arxiv.org/pdf/2305.10403.pdf"));
    }

    #[test]
    fn served_html_needs_no_fallback() {
        let url = "https://ar5iv.labs.arxiv.org/html/2305.10403";
        assert_eq!(pdf_fallback(url, url).unwrap(), None);
        assert_eq!(
            pdf_fallback(url, "https://ar5iv.labs.arxiv.org/html/2305.10403v3").unwrap(),
            None
        );
    }

    #[test]
    fn redirect_from_a_non_ar5iv_url_is_an_error() {
        let err = pdf_fallback("https://example.com/paper", "https://arxiv.org/abs/2305.10403")
            .unwrap_err();
        assert!(matches!(err, PaperError::InvalidUrl(_)));
    }

    #[test]
    fn fallback_requires_an_ar5iv_url() {
        let err = ar5iv_to_pdf_url("https://arxiv.org/abs/1234.5678").unwrap_err();
        assert!(matches!(err, PaperError::InvalidUrl(_)));
    }
}
