// file: src/exporter/mod.rs
// description: record export module exports
// reference: internal module structure

pub mod json;

pub use json::{JsonExporter, save};
