// file: src/extractor/lopdf_backend.rs
// description: pure rust pdf page text extraction backed by lopdf
// reference: https://docs.rs/lopdf

use super::PdfBackend;
use crate::error::{PipelineError, Result};
use lopdf::Document;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn open_document(&self, path: &Path) -> Result<Vec<String>> {
        let mut doc = Document::load(path).map_err(|e| PipelineError::PdfOpen {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        // Owner-locked files open with an empty user password.
        if doc.is_encrypted() {
            doc.decrypt("").map_err(|e| PipelineError::Encrypted {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            debug!("Decrypted {} with the empty user password", path.display());
        }

        let pages = doc.get_pages();
        debug!("Loaded {} pages from {}", pages.len(), path.display());

        pages
            .into_keys()
            .map(|page_num| {
                doc.extract_text(&[page_num])
                    .map_err(|e| PipelineError::PdfOpen {
                        path: path.to_path_buf(),
                        message: format!("page {}: {}", page_num, e),
                    })
            })
            .collect()
    }
}
