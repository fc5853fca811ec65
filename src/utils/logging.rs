// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored run summary lines

use crate::pipeline::RunSummary;
use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg.red())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

/// Human-readable end-of-run report, one line per entry.
pub fn format_summary(summary: &RunSummary) -> Vec<String> {
    let stats = &summary.stats;
    let mut lines = Vec::new();

    lines.push(format_info(&format!(
        "Run finished at {}",
        summary.finished_at.format("%Y-%m-%d %H:%M:%S UTC")
    )));
    lines.push(format_info(&format!(
        "{} PDFs discovered, {} pages extracted in {:.2}s",
        stats.files_discovered,
        stats.pages_extracted,
        stats.duration_ms as f64 / 1000.0
    )));

    if stats.files_empty > 0 {
        lines.push(format_warning(&format!(
            "{} files had no extractable text",
            stats.files_empty
        )));
    }
    if stats.files_failed > 0 {
        lines.push(format_warning(&format!(
            "{} files could not be read",
            stats.files_failed
        )));
    }

    if summary.saved {
        lines.push(format_success(&format!(
            "{} records written to {} ({:.1}% of files)",
            stats.records_created,
            summary.output_path.display(),
            stats.success_rate()
        )));
    } else {
        lines.push(format_error(&format!(
            "Failed to write {}",
            summary.output_path.display()
        )));
    }

    lines
}
