// file: src/sanitizer/patterns.rs
// description: compiled regex patterns for text sanitization
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref NON_ASCII: Regex = Regex::new(
        r"[^\x00-\x7F]+"
    ).expect("NON_ASCII regex is valid");

    pub static ref WORD: Regex = Regex::new(
        r"\b\w+\b"
    ).expect("WORD regex is valid");

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).expect("WHITESPACE_RUN regex is valid");
}
