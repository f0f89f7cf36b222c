//! 笔记本文档结构（nbformat 4.5）

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const NBFORMAT: u32 = 4;
pub const NBFORMAT_MINOR: u32 = 5;

/// 单元格
///
/// 序列化后 `cell_type` 在前，代码单元格带空的 `outputs`
/// 和为 null 的 `execution_count`，表示尚未运行。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    /// 说明性文本
    Markdown {
        metadata: Map<String, Value>,
        source: Vec<String>,
    },
    /// 可执行代码
    Code {
        metadata: Map<String, Value>,
        execution_count: Option<u32>,
        outputs: Vec<Value>,
        source: Vec<String>,
    },
}

impl Cell {
    pub fn markdown(source: Vec<String>) -> Self {
        Cell::Markdown {
            metadata: Map::new(),
            source,
        }
    }

    pub fn code(source: Vec<String>) -> Self {
        Cell::Code {
            metadata: Map::new(),
            execution_count: None,
            outputs: Vec::new(),
            source,
        }
    }

    pub fn source(&self) -> &[String] {
        match self {
            Cell::Markdown { source, .. } | Cell::Code { source, .. } => source,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Cell::Code { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelSpec {
    pub display_name: String,
    pub language: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodemirrorMode {
    pub name: String,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub codemirror_mode: CodemirrorMode,
    pub file_extension: String,
    pub mimetype: String,
    pub name: String,
    pub nbconvert_exporter: String,
    pub pygments_lexer: String,
    pub version: String,
}

/// 执行环境描述，所有笔记本共用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookMetadata {
    pub kernelspec: KernelSpec,
    pub language_info: LanguageInfo,
}

impl NotebookMetadata {
    /// Python 3 (ipykernel) 环境描述
    pub fn python3(version: impl Into<String>) -> Self {
        Self {
            kernelspec: KernelSpec {
                display_name: "Python 3 (ipykernel)".to_string(),
                language: "python".to_string(),
                name: "python3".to_string(),
            },
            language_info: LanguageInfo {
                codemirror_mode: CodemirrorMode {
                    name: "ipython".to_string(),
                    version: 3,
                },
                file_extension: ".py".to_string(),
                mimetype: "text/x-python".to_string(),
                name: "python".to_string(),
                nbconvert_exporter: "python".to_string(),
                pygments_lexer: "ipython3".to_string(),
                version: version.into(),
            },
        }
    }
}

impl Default for NotebookMetadata {
    fn default() -> Self {
        Self::python3("3.13.3")
    }
}

/// 完整的笔记本文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: NotebookMetadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

impl Notebook {
    pub fn new(cells: Vec<Cell>, metadata: NotebookMetadata) -> Self {
        Self {
            cells,
            metadata,
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// 渲染为两空格缩进的 JSON，非 ASCII 字符原样保留
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_cell_serializes_unexecuted_state() {
        let cell = Cell::code(vec!["print(1)\n".to_string()]);
        let value = serde_json::to_value(&cell).unwrap();
        assert_eq!(
            value,
            json!({
                "cell_type": "code",
                "metadata": {},
                "execution_count": null,
                "outputs": [],
                "source": ["print(1)\n"]
            })
        );
    }

    #[test]
    fn test_markdown_cell_has_no_execution_fields() {
        let value = serde_json::to_value(Cell::markdown(vec!["# x\n".to_string()])).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["cell_type"], "markdown");
        assert!(!obj.contains_key("outputs"));
        assert!(!obj.contains_key("execution_count"));
    }

    #[test]
    fn test_to_json_layout() {
        let nb = Notebook::new(
            vec![Cell::markdown(vec!["## 两数之和\n".to_string()])],
            NotebookMetadata::default(),
        );
        let text = nb.to_json().unwrap();
        assert!(text.starts_with("{\n  \"cells\": [\n    {\n      \"cell_type\": \"markdown\","));
        assert!(text.contains("\"metadata\": {},"));
        assert!(text.contains("两数之和"));
        assert!(text.ends_with("\"nbformat\": 4,\n  \"nbformat_minor\": 5\n}"));
        assert!(text.contains("\"version\": \"3.13.3\""));
    }
}
