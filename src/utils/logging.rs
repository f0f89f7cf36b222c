use anyhow::Result;
/// 日志工具模块
///
/// 提供运行日志文件和统计输出的辅助函数
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::info;

fn now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n笔记本生成日志 - {}\n{}\n\n",
        "=".repeat(60),
        now(),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 在日志文件中追加一条写入记录
///
/// # 参数
/// - `log_file_path`: 日志文件路径
/// - `notebook_path`: 写入的笔记本路径
pub fn append_written(log_file_path: &str, notebook_path: &Path) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    writeln!(file, "{} | Wrote {}", now(), notebook_path.display())?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `output_dir`: 笔记本输出目录
pub fn log_startup(output_dir: &Path) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题解笔记本生成");
    info!("📂 输出目录: {}", output_dir.display());
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `written`: 写入的笔记本数量
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(written: usize, log_file_path: &str) {
    info!("{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!("完成时间: {}", now());
    info!("✅ 已生成笔记本: {}", written);
    info!("{}", "=".repeat(60));
    info!("日志已保存至: {}", log_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("两数之和", 2), "两数...");
        assert_eq!(truncate_text("Two Sum", 20), "Two Sum");
    }

    #[test]
    fn test_log_file_header_and_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("output.txt");
        let log_path = log_path.to_str().unwrap();

        init_log_file(log_path).unwrap();
        append_written(log_path, Path::new("Stack/LC_1_two-sum.ipynb")).unwrap();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("笔记本生成日志"));
        assert!(content.trim_end().ends_with("Wrote Stack/LC_1_two-sum.ipynb"));
    }
}
