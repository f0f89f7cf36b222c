pub mod notebook_writer;
pub mod source_lines;

pub use notebook_writer::{NotebookWriter, NOTEBOOK_EXTENSION};
pub use source_lines::to_source_lines;
