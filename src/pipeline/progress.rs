// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for pipeline execution
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub files_discovered: usize,
    pub records_created: usize,
    pub files_empty: usize,
    pub files_failed: usize,
    pub pages_extracted: usize,
    pub bytes_emitted: u64,
    pub duration_ms: u64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files_processed(&self) -> usize {
        self.records_created + self.files_empty + self.files_failed
    }

    pub fn files_per_second(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        self.files_processed() as f64 / (self.duration_ms as f64 / 1000.0)
    }

    /// Share of processed files that produced a record, in percent.
    pub fn success_rate(&self) -> f64 {
        let total = self.files_processed();
        if total == 0 {
            return 0.0;
        }
        (self.records_created as f64 / total as f64) * 100.0
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
}

impl ProgressTracker {
    pub fn with_color(total_files: usize, colored: bool) -> Self {
        let multi_progress = MultiProgress::new();

        let main_bar = create_progress_bar(&multi_progress, total_files as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
        }
    }

    pub fn hidden() -> Self {
        Self {
            main_bar: ProgressBar::hidden(),
            detail_bar: ProgressBar::hidden(),
        }
    }

    pub fn observe(&self, title: &str, stats: &PipelineStats) {
        self.main_bar.inc(1);
        self.detail_bar.set_message(format!(
            "Records: {} | Empty: {} | Failed: {} | Last: {}",
            stats.records_created, stats.files_empty, stats.files_failed, title
        ));
    }

    pub fn position(&self) -> u64 {
        self.main_bar.position()
    }

    pub fn finish(&self) {
        if !self.main_bar.is_finished() {
            self.main_bar.finish_with_message("Processing complete");
        }
        self.detail_bar.finish_and_clear();
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta}) {msg}"
    };

    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        let chars = if colored { "█▓▒░" } else { "=>-" };
        bar.set_style(style.progress_chars(chars));
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    if let Ok(style) = ProgressStyle::default_bar().template("{msg}") {
        bar.set_style(style);
    }
    bar
}
