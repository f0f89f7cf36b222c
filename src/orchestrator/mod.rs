//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<ProblemRecord>)
//!     ↓
//! workflow::NotebookFlow (处理单道题)
//!     ↓
//! services (能力层：source_lines / notebook_writer)
//! ```
//!
//! 编排层只做调度和统计，不关心单元格如何组装。

pub mod batch_processor;

pub use batch_processor::App;
