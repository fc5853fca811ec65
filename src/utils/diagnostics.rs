// file: src/utils/diagnostics.rs
// description: injectable diagnostic events emitted while a corpus is built
// reference: https://docs.rs/tracing

use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, error, info, warn};

/// A single informational event from the pipeline. Not a stable contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    FileProcessing {
        path: PathBuf,
    },
    PageSnippet {
        path: PathBuf,
        page: usize,
        snippet: String,
    },
    RecordAdded {
        title: String,
    },
    FileSkipped {
        path: PathBuf,
    },
    ExtractionFailed {
        path: PathBuf,
        error: String,
    },
    OutputSaved {
        path: PathBuf,
        records: usize,
    },
    OutputFailed {
        path: PathBuf,
        error: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::FileProcessing { path } => {
                write!(f, "Processing PDF: {}", path.display())
            }
            Diagnostic::PageSnippet { page, snippet, .. } => {
                write!(f, "Extracted text from page {}: {}", page, snippet)
            }
            Diagnostic::RecordAdded { title } => write!(f, "Added to JSON: {}", title),
            Diagnostic::FileSkipped { path } => {
                write!(f, "No text extracted, skipping: {}", path.display())
            }
            Diagnostic::ExtractionFailed { path, error } => {
                write!(f, "Error processing {}: {}", path.display(), error)
            }
            Diagnostic::OutputSaved { path, records } => write!(
                f,
                "JSON file saved successfully to {} ({} records)",
                path.display(),
                records
            ),
            Diagnostic::OutputFailed { path, error } => {
                write!(f, "Error writing JSON file {}: {}", path.display(), error)
            }
        }
    }
}

pub trait DiagnosticSink {
    fn emit(&self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn emit(&self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic)
    }
}

/// Forwards every diagnostic to the global `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::PageSnippet { .. } | Diagnostic::FileSkipped { .. } => {
                debug!("{}", diagnostic)
            }
            Diagnostic::ExtractionFailed { .. } => warn!("{}", diagnostic),
            Diagnostic::OutputFailed { .. } => error!("{}", diagnostic),
            _ => info!("{}", diagnostic),
        }
    }
}

/// Collects diagnostics in memory so callers can inspect what a run reported.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn count_where(&self, predicate: impl Fn(&Diagnostic) -> bool) -> usize {
        self.events().iter().filter(|d| predicate(d)).count()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: Diagnostic) {
        if let Ok(mut events) = self.events.lock() {
            events.push(diagnostic);
        }
    }
}

/// Truncates `text` to at most `max_chars` characters, respecting char boundaries.
pub fn snippet(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
