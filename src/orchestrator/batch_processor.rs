//! 批量题目处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责加载题目记录并逐条生成笔记本。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、构造环境描述和写入服务
//! 2. **批量加载**：扫描并加载所有题目记录（`Vec<ProblemRecord>`）
//! 3. **顺序处理**：按输入顺序一次处理一道题，不并发
//! 4. **全有或全无**：第 N 道题失败时中止，前 N-1 个文件保留
//! 5. **全局统计**：输出生成数量

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::{fields, ProblemRecord};
use crate::utils::logging::{
    append_written, init_log_file, log_startup, print_final_stats, truncate_text,
};
use crate::workflow::NotebookFlow;

/// 应用主结构
pub struct App {
    config: Config,
    flow: NotebookFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        init_log_file(&config.output_log_file)
            .with_context(|| format!("无法初始化日志文件: {}", config.output_log_file))?;

        log_startup(&config.output_dir);

        let flow = NotebookFlow::new(&config);
        Ok(Self { config, flow })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<Vec<PathBuf>> {
        let records = self.load_records().await?;

        if records.is_empty() {
            warn!("⚠️ 没有找到待处理的题目，程序结束");
            return Ok(Vec::new());
        }

        info!("✓ 找到 {} 道待处理的题目", records.len());

        let written = self.process_records(&records)?;
        print_final_stats(written.len(), &self.config.output_log_file);

        Ok(written)
    }

    /// 加载题目记录
    async fn load_records(&self) -> Result<Vec<ProblemRecord>> {
        info!("📁 正在扫描题目文件: {}", self.config.problems_folder.display());
        crate::models::load_all_problem_files(&self.config.problems_folder)
            .await
            .with_context(|| {
                format!("无法加载题目文件夹: {}", self.config.problems_folder.display())
            })
    }

    /// 按顺序处理所有题目
    ///
    /// 每写入一个文件在 stdout 打印一行 `Wrote <path>`。
    /// 任一题目失败立即返回错误，不再处理后续题目。
    pub fn process_records(&self, records: &[ProblemRecord]) -> Result<Vec<PathBuf>> {
        let total = records.len();
        let mut written = Vec::with_capacity(total);

        for (index, record) in records.iter().enumerate() {
            let record_index = index + 1;
            debug!(
                "[题目 {}/{}] {} {}",
                record_index,
                total,
                record.label(),
                truncate_text(&record.text(fields::TITLE).unwrap_or_default(), 40)
            );

            let outcome = self.flow.build(record).with_context(|| {
                format!("[题目 {}/{}] {} 生成失败", record_index, total, record.label())
            })?;

            println!("Wrote {}", outcome.path.display());
            append_written(&self.config.output_log_file, &outcome.path).with_context(|| {
                format!("无法写入日志文件: {}", self.config.output_log_file)
            })?;

            written.push(outcome.path);
        }

        Ok(written)
    }
}
