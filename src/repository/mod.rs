// file: src/repository/mod.rs
// description: Department tree traversal module exports
// reference: Internal module structure

pub mod walker;

pub use walker::{PdfEntry, TreeWalker};
