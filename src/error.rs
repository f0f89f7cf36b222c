use std::path::PathBuf;

use thiserror::Error;

/// 笔记本生成错误类型
#[derive(Debug, Error)]
pub enum NotebookError {
    /// 题目记录缺少模板需要的字段
    #[error("题目记录缺少字段: {field}")]
    MissingField { field: String },

    /// 字段存在但无法转换为文本（数组、表等）
    #[error("字段 {field} 不是文本 (实际类型: {kind})")]
    NonTextField { field: String, kind: &'static str },

    /// 目标文件已存在（仅在 collision_policy = fail 时出现）
    #[error("目标文件已存在: {}", path.display())]
    FileExists { path: PathBuf },

    /// 笔记本序列化失败
    #[error("笔记本序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),

    /// 文件读写失败
    #[error("文件操作失败 ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML 解析失败
    #[error("TOML解析失败 ({}): {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl NotebookError {
    /// 创建缺少字段错误
    pub fn missing_field(field: impl Into<String>) -> Self {
        NotebookError::MissingField {
            field: field.into(),
        }
    }

    /// 创建文件读写错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NotebookError::Io {
            path: path.into(),
            source,
        }
    }
}

/// 笔记本生成结果类型
pub type Result<T> = std::result::Result<T, NotebookError>;
