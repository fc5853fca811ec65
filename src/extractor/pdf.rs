// file: src/extractor/pdf.rs
// description: per-file pdf extraction that sanitizes pages and never fails
// reference: skip-and-log error handling per document

use super::{LopdfBackend, PdfBackend};
use crate::sanitizer::TextSanitizer;
use crate::utils::diagnostics::{Diagnostic, DiagnosticSink, TracingSink, snippet};
use std::path::Path;

const PAGE_SEPARATOR: &str = "\n\n";
const DEFAULT_SNIPPET_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Extracted { content: String, pages: usize },
    Failed,
}

impl ExtractionOutcome {
    pub fn into_content(self) -> String {
        match self {
            ExtractionOutcome::Extracted { content, .. } => content,
            ExtractionOutcome::Failed => String::new(),
        }
    }
}

pub struct PdfExtractor<B = LopdfBackend, S = TracingSink> {
    backend: B,
    sanitizer: TextSanitizer,
    sink: S,
    snippet_chars: usize,
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self::with_parts(LopdfBackend, TextSanitizer::default(), TracingSink)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: PdfBackend, S: DiagnosticSink> PdfExtractor<B, S> {
    pub fn with_parts(backend: B, sanitizer: TextSanitizer, sink: S) -> Self {
        Self {
            backend,
            sanitizer,
            sink,
            snippet_chars: DEFAULT_SNIPPET_CHARS,
        }
    }

    pub fn with_snippet_chars(mut self, snippet_chars: usize) -> Self {
        self.snippet_chars = snippet_chars.max(1);
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Cleaned page texts, each followed by a blank line. Empty on any failure.
    pub fn extract(&self, path: &Path) -> String {
        self.extract_outcome(path).into_content()
    }

    pub fn extract_outcome(&self, path: &Path) -> ExtractionOutcome {
        self.sink.emit(Diagnostic::FileProcessing {
            path: path.to_path_buf(),
        });

        let pages = match self.backend.open_document(path) {
            Ok(pages) => pages,
            Err(e) => {
                self.sink.emit(Diagnostic::ExtractionFailed {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                });
                return ExtractionOutcome::Failed;
            }
        };

        let mut content = String::new();
        for (idx, page) in pages.iter().enumerate() {
            self.sink.emit(Diagnostic::PageSnippet {
                path: path.to_path_buf(),
                page: idx + 1,
                snippet: snippet(page, self.snippet_chars),
            });
            content.push_str(&self.sanitizer.sanitize(page));
            content.push_str(PAGE_SEPARATOR);
        }

        ExtractionOutcome::Extracted {
            content,
            pages: pages.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeBackend, write_text_pdf};
    use crate::utils::diagnostics::MemorySink;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn extractor<'a>(
        backend: FakeBackend,
        sink: &'a MemorySink,
    ) -> PdfExtractor<FakeBackend, &'a MemorySink> {
        PdfExtractor::with_parts(backend, TextSanitizer::default(), sink)
    }

    #[test]
    fn test_pages_are_sanitized_and_separated() {
        let sink = MemorySink::new();
        let backend = FakeBackend::new()
            .with_document("memo.pdf", &["The Cat and The Hat", "Green Eggs and Ham"]);

        let content = extractor(backend, &sink).extract(Path::new("dept/memo.pdf"));

        assert_eq!(content, "cat hat\n\ngreen eggs ham\n\n");
    }

    #[test]
    fn test_failure_yields_empty_and_reports_path() {
        let sink = MemorySink::new();
        let content = extractor(FakeBackend::new(), &sink).extract(Path::new("dept/corrupt.pdf"));

        assert_eq!(content, "");
        let failures: Vec<Diagnostic> = sink
            .events()
            .into_iter()
            .filter(|d| matches!(d, Diagnostic::ExtractionFailed { .. }))
            .collect();
        assert_eq!(failures.len(), 1);
        match &failures[0] {
            Diagnostic::ExtractionFailed { path, error } => {
                assert_eq!(path, &PathBuf::from("dept/corrupt.pdf"));
                assert!(error.contains("unsupported format"));
            }
            other => panic!("unexpected diagnostic {:?}", other),
        }
    }

    #[test]
    fn test_page_snippets_are_truncated() {
        let sink = MemorySink::new();
        let long_page = "x".repeat(500);
        let backend = FakeBackend::new().with_document("long.pdf", &[long_page.as_str(), "short"]);

        let outcome = extractor(backend, &sink).extract_outcome(Path::new("long.pdf"));
        assert!(matches!(outcome, ExtractionOutcome::Extracted { pages: 2, .. }));

        let snippets: Vec<String> = sink
            .events()
            .into_iter()
            .filter_map(|d| match d {
                Diagnostic::PageSnippet { snippet, .. } => Some(snippet),
                _ => None,
            })
            .collect();
        assert_eq!(snippets.len(), 2);
        assert_eq!(snippets[0].len(), 200);
        assert_eq!(snippets[1], "short");
    }

    #[test]
    fn test_custom_snippet_length() {
        let sink = MemorySink::new();
        let backend = FakeBackend::new().with_document("a.pdf", &["abcdefgh"]);
        let extractor = extractor(backend, &sink).with_snippet_chars(3);

        extractor.extract(Path::new("a.pdf"));

        assert!(sink.events().contains(&Diagnostic::PageSnippet {
            path: PathBuf::from("a.pdf"),
            page: 1,
            snippet: "abc".to_string(),
        }));
    }

    #[test]
    fn test_real_pdf_through_lopdf() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notice.pdf");
        write_text_pdf(&path, &["The Cat and The Hat"]);

        let sink = MemorySink::new();
        let extractor = PdfExtractor::with_parts(LopdfBackend, TextSanitizer::default(), &sink);

        assert_eq!(extractor.extract(&path).trim(), "cat hat");
        assert_eq!(
            sink.count_where(|d| matches!(d, Diagnostic::FileProcessing { .. })),
            1
        );
    }
}
