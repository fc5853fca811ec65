// file: src/exporter/json.rs
// description: json serialization of collected records to a single output file
// reference: https://docs.rs/serde_json

use crate::config::OutputConfig;
use crate::error::{PipelineError, Result};
use crate::models::Record;
use crate::utils::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_path: PathBuf,
    pretty: bool,
}

/// Writes `records` to `output_path` as pretty JSON, reporting through `tracing`.
pub fn save(records: &[Record], output_path: &Path) -> bool {
    JsonExporter::new(output_path).save(records, &TracingSink)
}

impl JsonExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            pretty: true,
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(config.path.clone()).pretty(config.pretty)
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Never raises: failures are reported to `sink` and turn into `false`.
    pub fn save<S: DiagnosticSink + ?Sized>(&self, records: &[Record], sink: &S) -> bool {
        match self.write(records) {
            Ok(()) => {
                sink.emit(Diagnostic::OutputSaved {
                    path: self.output_path.clone(),
                    records: records.len(),
                });
                true
            }
            Err(e) => {
                sink.emit(Diagnostic::OutputFailed {
                    path: self.output_path.clone(),
                    error: e.to_string(),
                });
                false
            }
        }
    }

    /// Non-ASCII text is written as literal UTF-8, never `\u` escaped.
    pub fn write(&self, records: &[Record]) -> Result<()> {
        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| PipelineError::FileOperation {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = File::create(&self.output_path).map_err(|source| {
            PipelineError::FileOperation {
                path: self.output_path.clone(),
                source,
            }
        })?;
        let mut writer = BufWriter::new(file);

        if self.pretty {
            let mut serializer =
                Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
            records.serialize(&mut serializer)?;
        } else {
            serde_json::to_writer(&mut writer, records)?;
        }

        writer.flush()?;
        Ok(())
    }
}
