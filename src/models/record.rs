// file: src/models/record.rs
// description: output record pairing a document title with its cleaned text
// reference: internal data structures

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    title: String,
    content: String,
}

impl Record {
    /// Builds a record from extracted text, trimming it. Returns `None` when
    /// nothing but whitespace was extracted.
    pub fn from_extraction(title: impl Into<String>, content: &str) -> Option<Self> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        Some(Self {
            title: title.into(),
            content: content.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation_trims() {
        let record = Record::from_extraction("budget", "  cat hat\n\n").unwrap();
        assert_eq!(record.title(), "budget");
        assert_eq!(record.content(), "cat hat");
    }

    #[test]
    fn test_blank_content_is_rejected() {
        assert!(Record::from_extraction("empty", "").is_none());
        assert!(Record::from_extraction("blank", "\n\n\n\n").is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let record = Record::from_extraction("a", "b").unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"title": "a", "content": "b"}));
    }
}
