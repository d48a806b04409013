//! Symptom text normalization

/// Lowercased search corpus built from free text and selected tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomCorpus {
    text: String,
    tags: Vec<String>,
}

impl SymptomCorpus {
    /// Build the corpus: `lower(text) + " " + lower(tags joined by " ")`.
    pub fn new<S: AsRef<str>>(symptom_text: &str, selected: &[S]) -> Self {
        let tags: Vec<String> = selected.iter().map(|t| t.as_ref().to_lowercase()).collect();
        let text = format!("{} {}", symptom_text.to_lowercase(), tags.join(" "));
        Self { text, tags }
    }

    /// Full lowercased search text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased selected tags, in input order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// True if the keyword is a substring of the text or exactly equals a tag.
    ///
    /// Keywords in the rule tables are already lowercase.
    pub fn contains(&self, keyword: &str) -> bool {
        self.text.contains(keyword) || self.tags.iter().any(|t| t == keyword)
    }

    /// True if any keyword hits
    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| self.contains(kw))
    }
}
