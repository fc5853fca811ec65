// file: src/sanitizer/stopwords.rs
// description: default english stopword list and frozen stopword set
// reference: internal text cleaning rules

use std::collections::HashSet;

pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "an", "are", "as", "at", "by", "for", "from", "in", "into", "on", "onto", "that", "to",
    "with", "was", "were", "has", "have", "it", "its", "of", "the", "this", "those", "these",
    "and", "or", "but", "not", "so", "than", "then", "over", "under", "such", "do", "does", "did",
    "be", "been", "being", "if", "else", "no", "nor",
];

/// Read-only set of lowercased stopwords. Frozen once built.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: HashSet<String> = DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect();
        words.extend(
            extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        Self { words }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::with_extra(std::iter::empty::<&str>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let set = StopwordSet::default();
        assert_eq!(set.len(), DEFAULT_STOPWORDS.len());
        assert!(set.contains("the"));
        assert!(set.contains("nor"));
        assert!(!set.contains("cat"));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let set = StopwordSet::default();
        assert!(!set.contains("The"));
    }

    #[test]
    fn test_extra_words_are_lowercased() {
        let set = StopwordSet::with_extra(["Shall", "  ", "hereby"]);
        assert!(set.contains("shall"));
        assert!(set.contains("hereby"));
        assert_eq!(set.len(), DEFAULT_STOPWORDS.len() + 2);
    }
}
