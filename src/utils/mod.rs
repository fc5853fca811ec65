// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod diagnostics;
pub mod logging;
pub mod validation;

pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, TracingSink};
pub use validation::Validator;
