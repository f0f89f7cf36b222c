pub mod loaders;
pub mod notebook;
pub mod problem;

pub use loaders::{load_all_problem_files, load_problem_file};
pub use notebook::{Cell, Notebook, NotebookMetadata};
pub use problem::{fields, ProblemRecord};
