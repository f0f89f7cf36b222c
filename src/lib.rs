//! # LC Notebooks
//!
//! 将算法题题解记录批量生成为 Jupyter 笔记本（`.ipynb`）
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目记录 `ProblemRecord`、笔记本结构 `Notebook` / `Cell`
//! - `models/loaders` - 从 TOML 文件夹加载题目记录
//!
//! ### ② 业务能力层（Services）
//! - `source_lines` - 文本转 `source` 行序列
//! - `NotebookWriter` - 文件命名、序列化、写入
//!
//! ### ③ 流程层（Workflow）
//! - `NotebookFlow` - 一道题 → 17 个单元格 → 一个文件
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 加载所有题目，按顺序逐条生成
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{CollisionPolicy, Config};
pub use error::{NotebookError, Result};
pub use models::{Cell, Notebook, NotebookMetadata, ProblemRecord};
pub use orchestrator::App;
pub use services::{to_source_lines, NotebookWriter};
pub use workflow::{build_cells, BuildOutcome, NotebookFlow};
