// file: src/repository/walker.rs
// description: Department directory walking and per-file record collection
// reference: https://docs.rs/walkdir

use crate::config::Config;
use crate::error::Result;
use crate::extractor::{ExtractionOutcome, LopdfBackend, PdfBackend, PdfExtractor};
use crate::models::Record;
use crate::pipeline::PipelineStats;
use crate::sanitizer::{StopwordSet, TextSanitizer};
use crate::utils::Validator;
use crate::utils::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A PDF discovered under `root/<department>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfEntry {
    pub department: String,
    pub path: PathBuf,
    pub title: String,
}

pub struct TreeWalker<B = LopdfBackend, S = TracingSink> {
    extractor: PdfExtractor<B, S>,
    suffix: String,
}

impl TreeWalker {
    pub fn from_config(config: &Config) -> Self {
        let sanitizer = TextSanitizer::new(StopwordSet::with_extra(
            &config.sanitizer.extra_stopwords,
        ));
        let extractor = PdfExtractor::with_parts(LopdfBackend, sanitizer, TracingSink)
            .with_snippet_chars(config.sanitizer.snippet_chars);
        Self::new(extractor, config.pdf_suffix())
    }
}

impl<B: PdfBackend, S: DiagnosticSink> TreeWalker<B, S> {
    pub fn new(extractor: PdfExtractor<B, S>, suffix: impl Into<String>) -> Self {
        Self {
            extractor,
            suffix: suffix.into(),
        }
    }

    pub fn extractor(&self) -> &PdfExtractor<B, S> {
        &self.extractor
    }

    /// Lists `root/<department>/<name><suffix>` files, sorted by name at each level.
    pub fn discover(&self, root: &Path) -> Result<Vec<PdfEntry>> {
        Validator::validate_directory(root)?;
        info!("Scanning departments under: {}", root.display());

        let mut entries = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(2)
            .max_depth(2)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            let Some(title) = file_name.strip_suffix(self.suffix.as_str()) else {
                debug!("Skipping non-PDF file: {}", entry.path().display());
                continue;
            };

            let department = entry
                .path()
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            entries.push(PdfEntry {
                department,
                path: entry.path().to_path_buf(),
                title: title.to_string(),
            });
        }

        info!("Found {} PDF files", entries.len());
        Ok(entries)
    }

    /// Extracts one entry, updating `stats`. `None` for failed or empty files.
    pub fn process_entry(&self, entry: &PdfEntry, stats: &mut PipelineStats) -> Option<Record> {
        let content = match self.extractor.extract_outcome(&entry.path) {
            ExtractionOutcome::Failed => {
                stats.files_failed += 1;
                return None;
            }
            ExtractionOutcome::Extracted { content, pages } => {
                stats.pages_extracted += pages;
                content
            }
        };

        match Record::from_extraction(entry.title.as_str(), &content) {
            Some(record) => {
                stats.records_created += 1;
                stats.bytes_emitted += record.content().len() as u64;
                self.extractor.sink().emit(Diagnostic::RecordAdded {
                    title: record.title().to_string(),
                });
                Some(record)
            }
            None => {
                stats.files_empty += 1;
                self.extractor.sink().emit(Diagnostic::FileSkipped {
                    path: entry.path.clone(),
                });
                None
            }
        }
    }

    /// Processes `entries` in order, calling `observe` after each one.
    pub fn walk_entries<F>(&self, entries: &[PdfEntry], mut observe: F) -> (Vec<Record>, PipelineStats)
    where
        F: FnMut(&PdfEntry, &PipelineStats),
    {
        let start = Instant::now();
        let mut stats = PipelineStats::new();
        stats.files_discovered = entries.len();

        let mut records = Vec::new();
        for entry in entries {
            if let Some(record) = self.process_entry(entry, &mut stats) {
                records.push(record);
            }
            observe(entry, &stats);
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        (records, stats)
    }

    pub fn walk_with_stats(&self, root: &Path) -> Result<(Vec<Record>, PipelineStats)> {
        let entries = self.discover(root)?;
        Ok(self.walk_entries(&entries, |_, _| {}))
    }

    pub fn walk(&self, root: &Path) -> Result<Vec<Record>> {
        self.walk_with_stats(root).map(|(records, _)| records)
    }
}
