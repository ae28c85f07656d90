//! Paper acquisition for paperchat.
//!
//! Resolves arXiv / ar5iv URLs, downloads the HTML rendering (falling back
//! to the PDF when ar5iv has none), and extracts titles, visible text and
//! top-level sections.

pub mod fetch;
pub mod html;
pub mod pdf;
pub mod sections;
pub mod url;

pub use fetch::{pdf_fallback, FetchedPaper, PaperFetcher, PaperSource};
pub use pdf::PdfText;
pub use html::PaperDocument;
pub use sections::{filter_back_matter, Section};
pub use url::{ar5iv_to_pdf_url, normalize_paper_url, SAMPLE_URL};
