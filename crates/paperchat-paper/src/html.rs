//! HTML text, title and section extraction.

use paperchat_common::PaperError;
use scraper::{ElementRef, Html, Selector};

use crate::sections::{Section, UNTITLED_SECTION};

const HEADINGS: &str = "h1, h2, h3, h4, h5, h6";

/// A parsed HTML paper: its title and top-level sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperDocument {
    pub title: String,
    pub sections: Vec<Section>,
}

impl PaperDocument {
    /// Parse an ar5iv page. The paper title comes from `h1.ltx_title`,
    /// falling back to the page `<title>`.
    pub fn parse(source: &str) -> Result<Self, PaperError> {
        let html = Html::parse_document(source);
        let title = match paper_title(&html)? {
            Some(title) => title,
            None => page_title(&html)?.unwrap_or_default(),
        };
        Ok(Self {
            title,
            sections: sections(&html)?,
        })
    }
}

fn selector(css: &str) -> Result<Selector, PaperError> {
    Selector::parse(css).map_err(|e| PaperError::Html(format!("bad selector {css:?}: {e:?}")))
}

/// Text with newlines removed and surrounding whitespace trimmed.
fn heading_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().replace('\n', "").trim().to_string()
}

/// Contents of the `<title>` element.
pub fn page_title(html: &Html) -> Result<Option<String>, PaperError> {
    let title = selector("title")?;
    Ok(html
        .select(&title)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string()))
}

pub fn paper_title(html: &Html) -> Result<Option<String>, PaperError> {
    let title = selector("h1.ltx_title")?;
    Ok(html.select(&title).next().map(heading_text))
}

/// All text nodes outside `<script>` and `<style>`.
pub fn visible_text(html: &Html) -> String {
    html.root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .parent()
                .and_then(|p| p.value().as_element().map(|e| e.name()))
                .is_some_and(|name| name == "script" || name == "style");
            (!hidden).then_some(&**text)
        })
        .collect()
}

/// Direct `section` children of every `article`, titled by their first heading.
pub fn sections(html: &Html) -> Result<Vec<Section>, PaperError> {
    let top_level = selector("article > section")?;
    let headings = selector(HEADINGS)?;

    Ok(html
        .select(&top_level)
        .map(|section| {
            let title = section
                .select(&headings)
                .next()
                .map(heading_text)
                .unwrap_or_else(|| UNTITLED_SECTION.to_string());
            Section::new(title, section.text().collect::<String>())
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>[2302.04761] Toolformer: Language Models Can Teach Themselves to Use Tools</title>
  <style>.ltx_title { color: red; }</style>
  <script>var tracking = 1;</script>
</head>
<body>
<article class="ltx_document">
  <h1 class="ltx_title ltx_title_document">Toolformer: Language Models
Can Teach Themselves to Use Tools</h1>
  <section class="ltx_section" id="S1">
    <h2 class="ltx_title"><span>1</span>
Introduction</h2>
    <p>Language models struggle with arithmetic.</p>
    <section class="ltx_subsection"><h3>1.1 Scope</h3><p>Nested text.</p></section>
  </section>
  <section class="ltx_section" id="S2">
    <p>No heading here.</p>
  </section>
  <section class="ltx_bibliography" id="bib">
    <h2>References</h2>
    <p>Brown et al.</p>
  </section>
</article>
</body>
</html>"#;

    #[test]
    fn extracts_paper_and_page_titles() {
        let html = Html::parse_document(PAGE);
        assert_eq!(
            paper_title(&html).unwrap().as_deref(),
            Some("Toolformer: Language ModelsCan Teach Themselves to Use Tools")
        );
        assert!(page_title(&html).unwrap().unwrap().starts_with("[2302.04761] Toolformer"));
    }

    #[test]
    fn visible_text_skips_script_and_style() {
        let text = visible_text(&Html::parse_document(PAGE));
        assert!(text.contains("Language models struggle with arithmetic."));
        assert!(!text.contains("tracking"));
        assert!(!text.contains("color: red"));
    }

    #[test]
    fn only_top_level_sections_are_returned() {
        let sections = sections(&Html::parse_document(PAGE)).unwrap();
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["1Introduction", UNTITLED_SECTION, "References"]);
        assert!(sections[0].text.contains("Nested text."));
        assert!(sections[1].text.contains("No heading here."));
    }

    #[test]
    fn document_parse_falls_back_to_page_title() {
        let doc = PaperDocument::parse("<html><head><title> Plain </title></head><body></body></html>")
            .unwrap();
        assert_eq!(doc.title, "Plain");
        assert!(doc.sections.is_empty());
    }
}
