// file: src/extractor/mod.rs
// description: pdf text extraction module exports and backend seam
// reference: internal module structure

pub mod lopdf_backend;
pub mod pdf;

pub use lopdf_backend::LopdfBackend;
pub use pdf::{ExtractionOutcome, PdfExtractor};

use crate::error::Result;
use std::path::Path;

/// Opens a document and returns the plain text of each page in document order.
pub trait PdfBackend {
    fn open_document(&self, path: &Path) -> Result<Vec<String>>;
}

impl<B: PdfBackend + ?Sized> PdfBackend for &B {
    fn open_document(&self, path: &Path) -> Result<Vec<String>> {
        (**self).open_document(path)
    }
}
