//! 笔记本写入服务 - 业务能力层
//!
//! 只负责"文件命名 + 序列化 + 落盘"能力，不关心笔记本内容如何组装

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::config::{CollisionPolicy, Config};
use crate::error::{NotebookError, Result};
use crate::models::notebook::Notebook;

/// 笔记本文件扩展名
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// 笔记本写入服务
///
/// 职责：
/// - 根据题号和 slug 生成输出路径
/// - 先完整序列化，再写入文件
/// - 按配置决定同名文件是覆盖还是报错
pub struct NotebookWriter {
    output_dir: PathBuf,
    collision_policy: CollisionPolicy,
    atomic_write: bool,
}

impl NotebookWriter {
    /// 创建新的写入服务
    pub fn new(config: &Config) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            collision_policy: config.collision_policy,
            atomic_write: config.atomic_write,
        }
    }

    /// 使用自定义输出目录创建（覆盖、原子写入）
    pub fn with_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            collision_policy: CollisionPolicy::Overwrite,
            atomic_write: true,
        }
    }

    /// 输出路径：`<output_dir>/LC_<id>_<slug>.ipynb`
    pub fn notebook_path(&self, id: &str, slug: &str) -> PathBuf {
        self.output_dir
            .join(format!("LC_{}_{}.{}", id, slug, NOTEBOOK_EXTENSION))
    }

    /// 序列化并写入笔记本
    ///
    /// 原子写入覆盖已有文件时沿用其权限，新文件为 0644（unix）。
    /// `CollisionPolicy::Fail` 下由文件系统保证不覆盖：
    /// 原子写入用 `persist_noclobber`，直接写入用 `create_new`。
    ///
    /// # 参数
    /// - `notebook`: 已组装好的笔记本
    /// - `path`: 目标路径，通常来自 [`Self::notebook_path`]
    pub fn write(&self, notebook: &Notebook, path: &Path) -> Result<()> {
        let content = notebook.to_json()?;
        let no_clobber = self.collision_policy == CollisionPolicy::Fail;

        debug!(
            "写入笔记本: {} | 单元格 {} | {} 字节",
            path.display(),
            notebook.cells.len(),
            content.len()
        );

        if self.atomic_write {
            write_atomic(path, content.as_bytes(), no_clobber)
        } else {
            write_direct(path, content.as_bytes(), no_clobber)
        }
    }
}

fn io_error(path: &Path, e: io::Error) -> NotebookError {
    if e.kind() == io::ErrorKind::AlreadyExists {
        NotebookError::FileExists {
            path: path.to_path_buf(),
        }
    } else {
        NotebookError::io(path, e)
    }
}

fn write_direct(path: &Path, content: &[u8], no_clobber: bool) -> Result<()> {
    if !no_clobber {
        return fs::write(path, content).map_err(|e| NotebookError::io(path, e));
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| io_error(path, e))?;
    file.write_all(content)
        .map_err(|e| NotebookError::io(path, e))
}

/// 在目标目录中写临时文件，写完后重命名到目标
fn write_atomic(path: &Path, content: &[u8], no_clobber: bool) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp: NamedTempFile = tempfile::Builder::new()
        .prefix(".notebook-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| NotebookError::io(dir, e))?;

    // 临时文件默认 0600
    let permissions = match fs::metadata(path) {
        Ok(existing) => Some(existing.permissions()),
        Err(_) => default_permissions(),
    };
    if let Some(permissions) = permissions {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| NotebookError::io(tmp.path(), e))?;
    }

    tmp.write_all(content)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| NotebookError::io(tmp.path(), e))?;

    let persisted = if no_clobber {
        tmp.persist_noclobber(path)
    } else {
        tmp.persist(path)
    };
    persisted.map_err(|e| io_error(path, e.error))?;

    Ok(())
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notebook::{Cell, NotebookMetadata};

    fn sample_notebook() -> Notebook {
        Notebook::new(
            vec![Cell::markdown(vec!["# 1. Two Sum\n".to_string()])],
            NotebookMetadata::default(),
        )
    }

    fn fail_writer(dir: &Path, atomic_write: bool) -> NotebookWriter {
        NotebookWriter {
            output_dir: dir.to_path_buf(),
            collision_policy: CollisionPolicy::Fail,
            atomic_write,
        }
    }

    #[test]
    fn test_fail_policy_never_clobbers_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        for atomic_write in [true, false] {
            let writer = fail_writer(dir.path(), atomic_write);
            let path = writer.notebook_path("1", "two-sum");
            fs::write(&path, "existing").unwrap();

            let err = writer.write(&sample_notebook(), &path).unwrap_err();
            assert!(
                matches!(err, NotebookError::FileExists { .. }),
                "atomic_write={}: {:?}",
                atomic_write,
                err
            );
            assert_eq!(fs::read_to_string(&path).unwrap(), "existing");
            fs::remove_file(&path).unwrap();
        }
    }

    #[test]
    fn test_fail_policy_writes_new_file() {
        let dir = tempfile::tempdir().unwrap();
        for atomic_write in [true, false] {
            let writer = fail_writer(dir.path(), atomic_write);
            let path = writer.notebook_path("20", &format!("valid-parentheses-{}", atomic_write));
            writer.write(&sample_notebook(), &path).unwrap();
            assert!(fs::read_to_string(&path).unwrap().contains("Two Sum"));
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_overwrite_keeps_target_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let writer = NotebookWriter::with_dir(dir.path());
        let path = writer.notebook_path("1", "two-sum");

        writer.write(&sample_notebook(), &path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o644);

        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();
        writer.write(&sample_notebook(), &path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o600);
    }

    #[test]
    fn test_notebook_path_naming() {
        let writer = NotebookWriter::with_dir("Stack");
        assert_eq!(
            writer.notebook_path("1", "two-sum"),
            PathBuf::from("Stack").join("LC_1_two-sum.ipynb")
        );
    }

    #[test]
    fn test_slug_is_used_verbatim() {
        let writer = NotebookWriter::with_dir("out");
        assert_eq!(
            writer.notebook_path("232", "implement-queue-using-stacks"),
            PathBuf::from("out").join("LC_232_implement-queue-using-stacks.ipynb")
        );
    }
}
