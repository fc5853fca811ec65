// file: src/pipeline/orchestrator.rs
// description: one corpus build run from department tree to json output
// reference: walk, extract, clean, collect, serialize

use super::progress::{PipelineStats, ProgressTracker};
use crate::config::Config;
use crate::error::Result;
use crate::exporter::JsonExporter;
use crate::extractor::{LopdfBackend, PdfBackend};
use crate::repository::TreeWalker;
use crate::utils::diagnostics::{DiagnosticSink, TracingSink};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub stats: PipelineStats,
    pub output_path: PathBuf,
    pub saved: bool,
    pub finished_at: DateTime<Utc>,
}

pub struct Pipeline<B = LopdfBackend, S = TracingSink> {
    walker: TreeWalker<B, S>,
    exporter: JsonExporter,
    root: PathBuf,
    progress: Option<bool>,
}

impl Pipeline {
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            TreeWalker::from_config(config),
            JsonExporter::from_config(&config.output),
            config.input.root_dir.clone(),
        )
    }
}

impl<B: PdfBackend, S: DiagnosticSink> Pipeline<B, S> {
    pub fn new(walker: TreeWalker<B, S>, exporter: JsonExporter, root: impl Into<PathBuf>) -> Self {
        Self {
            walker,
            exporter,
            root: root.into(),
            progress: None,
        }
    }

    /// Shows a progress bar over discovered files; `colored` picks the style.
    pub fn with_progress(mut self, colored: bool) -> Self {
        self.progress = Some(colored);
        self
    }

    /// Fails only when the root cannot be walked. A failed write is reported
    /// through `RunSummary::saved`.
    pub fn run(&self) -> Result<RunSummary> {
        info!("Building corpus from {}", self.root.display());

        let entries = self.walker.discover(&self.root)?;
        let tracker = match self.progress {
            Some(colored) => ProgressTracker::with_color(entries.len(), colored),
            None => ProgressTracker::hidden(),
        };

        let (records, stats) = self
            .walker
            .walk_entries(&entries, |entry, stats| tracker.observe(&entry.title, stats));
        tracker.finish();

        let saved = self.exporter.save(&records, self.walker.extractor().sink());

        Ok(RunSummary {
            stats,
            output_path: self.exporter.output_path().to_path_buf(),
            saved,
            finished_at: Utc::now(),
        })
    }
}
