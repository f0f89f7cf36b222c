pub mod notebook_flow;

pub use notebook_flow::{build_cells, BuildOutcome, NotebookFlow, NOTEBOOK_TEMPLATE};
