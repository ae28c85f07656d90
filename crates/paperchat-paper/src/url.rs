//! arXiv / ar5iv URL rewriting.

use paperchat_common::PaperError;

pub const AR5IV_HTML_PREFIX: &str = "https://ar5iv.labs.arxiv.org/html/";
pub const ARXIV_ABS_PREFIX: &str = "https://arxiv.org/abs/";
pub const ARXIV_PDF_PREFIX: &str = "https://arxiv.org/pdf/";

/// Paper used when the user just presses enter.
pub const SAMPLE_URL: &str = "https://ar5iv.labs.arxiv.org/html/2305.10403";

/// Rewrite an arXiv abstract or PDF link to its ar5iv HTML rendering.
pub fn normalize_paper_url(input: &str) -> Result<String, PaperError> {
    let input = input.trim();

    let id = if let Some(id) = input.strip_prefix(AR5IV_HTML_PREFIX) {
        id
    } else if let Some(id) = input.strip_prefix(ARXIV_ABS_PREFIX) {
        id
    } else if let Some(rest) = input.strip_prefix(ARXIV_PDF_PREFIX) {
        rest.strip_suffix(".pdf").unwrap_or(rest)
    } else {
        return Err(PaperError::InvalidUrl(input.to_string()));
    };

    if id.is_empty() {
        return Err(PaperError::InvalidUrl(input.to_string()));
    }
    Ok(format!("{AR5IV_HTML_PREFIX}{id}"))
}

/// `https://ar5iv.labs.arxiv.org/html/<id>` → `https://arxiv.org/pdf/<id>.pdf`.
pub fn ar5iv_to_pdf_url(url: &str) -> Result<String, PaperError> {
    match url.strip_prefix(AR5IV_HTML_PREFIX) {
        Some(id) if !id.is_empty() => Ok(format!("{ARXIV_PDF_PREFIX}{id}.pdf")),
        _ => Err(PaperError::InvalidUrl(url.to_string())),
    }
}

/// True when a request for the HTML rendering ended on the abstract page.
pub fn is_abstract_redirect(final_url: &str) -> bool {
    final_url.starts_with(ARXIV_ABS_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ar5iv_url_is_kept() {
        assert_eq!(
            normalize_paper_url("https://ar5iv.labs.arxiv.org/html/2305.10403").unwrap(),
            "https://ar5iv.labs.arxiv.org/html/2305.10403"
        );
    }

    #[test]
    fn abstract_url_is_rewritten() {
        assert_eq!(
            normalize_paper_url("  https://arxiv.org/abs/2302.04761 \n").unwrap(),
            "https://ar5iv.labs.arxiv.org/html/2302.04761"
        );
    }

    #[test]
    fn pdf_url_loses_its_suffix() {
        assert_eq!(
            normalize_paper_url("https://arxiv.org/pdf/2302.13971.pdf").unwrap(),
            "https://ar5iv.labs.arxiv.org/html/2302.13971"
        );
        assert_eq!(
            normalize_paper_url("https://arxiv.org/pdf/2302.13971").unwrap(),
            "https://ar5iv.labs.arxiv.org/html/2302.13971"
        );
    }

    #[test]
    fn other_urls_are_rejected() {
        for bad in [
            "",
            "https://example.com/paper",
            "http://arxiv.org/abs/2302.04761",
            "https://arxiv.org/abs/",
        ] {
            assert!(
                matches!(normalize_paper_url(bad), Err(PaperError::InvalidUrl(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn ar5iv_maps_to_pdf() {
        assert_eq!(
            ar5iv_to_pdf_url(SAMPLE_URL).unwrap(),
            "https://arxiv.org/pdf/2305.10403.pdf"
        );
        assert!(ar5iv_to_pdf_url("https://arxiv.org/abs/2305.10403").is_err());
    }

    #[test]
    fn detects_abstract_redirect() {
        assert!(is_abstract_redirect("https://arxiv.org/abs/2305.10403"));
        assert!(!is_abstract_redirect(SAMPLE_URL));
    }
}
