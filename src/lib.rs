// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod repository;
pub mod sanitizer;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{Config, InputConfig, OutputConfig, SanitizerConfig};
pub use error::{PipelineError, Result};
pub use exporter::{JsonExporter, save};
pub use extractor::{ExtractionOutcome, LopdfBackend, PdfBackend, PdfExtractor};
pub use models::Record;
pub use pipeline::{Pipeline, PipelineStats, ProgressTracker, RunSummary};
pub use repository::{PdfEntry, TreeWalker};
pub use sanitizer::{StopwordSet, TextSanitizer, sanitize};
pub use utils::{Diagnostic, DiagnosticSink, MemorySink, TracingSink, Validator};
