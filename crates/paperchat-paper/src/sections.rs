//! Paper sections and back-matter filtering.

/// Title words marking sections that are not worth summarizing.
const BACK_MATTER: [&str; 5] = [
    "acknowledgment",
    "acknowledgement",
    "references",
    "appendix",
    "appendice",
];

pub const UNTITLED_SECTION: &str = "Untitled section";

/// A top-level section of a paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub text: String,
}

impl Section {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

pub fn is_back_matter(title: &str) -> bool {
    let title = title.to_lowercase();
    BACK_MATTER.iter().any(|word| title.contains(word))
}

/// Drop acknowledgements, references and appendices, keeping order.
pub fn filter_back_matter(sections: Vec<Section>) -> Vec<Section> {
    sections
        .into_iter()
        .filter(|s| !is_back_matter(&s.title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_matter_is_case_insensitive() {
        assert!(is_back_matter("Acknowledgments"));
        assert!(is_back_matter("7 Acknowledgement"));
        assert!(is_back_matter("REFERENCES"));
        assert!(is_back_matter("Appendix A Proofs"));
        assert!(is_back_matter("Appendices"));
        assert!(!is_back_matter("1 Introduction"));
        assert!(!is_back_matter("Related Work"));
    }

    #[test]
    fn filter_keeps_order() {
        let sections = vec![
            Section::new("1 Introduction", "a"),
            Section::new("Acknowledgments", "b"),
            Section::new("2 Method", "c"),
            Section::new("References", "d"),
            Section::new("Appendix A", "e"),
        ];
        let titles: Vec<_> = filter_back_matter(sections)
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, ["1 Introduction", "2 Method"]);
    }
}
