use crate::error::{NotebookError, Result};
use crate::models::problem::ProblemRecord;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 单个题目文件的结构：`[[problems]]` 表数组
#[derive(Debug, Default, Deserialize)]
struct ProblemFile {
    #[serde(default)]
    problems: Vec<ProblemRecord>,
}

/// 从 TOML 文件加载题目记录，保持文件内顺序
pub async fn load_problem_file(toml_file_path: &Path) -> Result<Vec<ProblemRecord>> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| NotebookError::io(toml_file_path, e))?;

    let file: ProblemFile = toml::from_str(&content).map_err(|source| NotebookError::Load {
        path: toml_file_path.to_path_buf(),
        source,
    })?;

    Ok(file.problems)
}

/// 从文件夹中加载所有 TOML 文件中的题目记录
///
/// 文件按文件名排序后依次加载，任何一个文件失败都会中止加载。
pub async fn load_all_problem_files(folder_path: &Path) -> Result<Vec<ProblemRecord>> {
    let toml_files = list_toml_files(folder_path).await?;

    if toml_files.is_empty() {
        tracing::warn!("在文件夹 {} 中没有找到 TOML 文件", folder_path.display());
    }

    let mut records = Vec::new();
    for path in toml_files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        let problems = load_problem_file(&path).await?;
        tracing::info!("成功加载 {} 道题目", problems.len());
        records.extend(problems);
    }

    Ok(records)
}

async fn list_toml_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(folder)
        .await
        .map_err(|e| NotebookError::io(folder, e))?;

    let mut toml_files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| NotebookError::io(folder, e))?
    {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml_files.push(path);
        }
    }

    toml_files.sort();
    Ok(toml_files)
}
