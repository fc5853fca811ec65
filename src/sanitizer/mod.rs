// file: src/sanitizer/mod.rs
// description: text sanitization for extracted pdf page text
// reference: ascii filtering, tokenization and stopword removal

pub mod patterns;
pub mod stopwords;

pub use stopwords::{DEFAULT_STOPWORDS, StopwordSet};

use lazy_static::lazy_static;
use patterns::{NON_ASCII, WHITESPACE_RUN, WORD};

lazy_static! {
    static ref DEFAULT_SANITIZER: TextSanitizer = TextSanitizer::default();
}

/// Sanitizes `raw` with the default stopword set.
pub fn sanitize(raw: &str) -> String {
    DEFAULT_SANITIZER.sanitize(raw)
}

#[derive(Debug, Clone, Default)]
pub struct TextSanitizer {
    stopwords: StopwordSet,
}

impl TextSanitizer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    /// Output holds only lowercase ASCII word characters separated by single
    /// spaces, with no stopword tokens. Applying it twice changes nothing.
    pub fn sanitize(&self, raw: &str) -> String {
        let ascii = NON_ASCII.replace_all(raw, "");
        let lowered = ascii.to_ascii_lowercase();

        let tokens: Vec<&str> = WORD
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|token| !self.stopwords.contains(token))
            .collect();

        let joined = tokens.join(" ");
        WHITESPACE_RUN.replace_all(&joined, " ").trim().to_string()
    }
}
