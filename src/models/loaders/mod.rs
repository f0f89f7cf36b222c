pub mod toml_loader;

pub use toml_loader::{load_all_problem_files, load_problem_file};
