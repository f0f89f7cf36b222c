//! 笔记本生成流程 - 流程层
//!
//! 核心职责：定义"一道题"如何变成一个笔记本
//!
//! 流程顺序：
//! 1. 按固定模板把题目记录的各字段组装成 17 个单元格
//! 2. 根据题号和 slug 确定输出路径
//! 3. 交给 `NotebookWriter` 序列化并写入
//!
//! 所有单元格在写入前组装完毕，缺少字段时不会写出任何文件。

use std::path::PathBuf;

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::models::notebook::{Cell, Notebook, NotebookMetadata};
use crate::models::problem::{fields, ProblemRecord};
use crate::services::{to_source_lines, NotebookWriter};

/// 模板中的一个单元格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// `# <id>. <title>`
    Title,
    /// `## <heading>` 加一个换行，再接字段内容
    Section {
        heading: &'static str,
        field: &'static str,
    },
    /// 只有二级标题的说明单元格
    Heading(&'static str),
    /// 字段内容作为代码单元格
    Code(&'static str),
}

/// 固定的单元格顺序
pub const NOTEBOOK_TEMPLATE: [Block; 17] = [
    Block::Title,
    Block::Section { heading: "Topic Alignment", field: fields::TOPIC_ALIGNMENT },
    Block::Section { heading: "Metadata Summary", field: fields::METADATA_SUMMARY },
    Block::Section { heading: "Problem Statement", field: fields::PROBLEM_STATEMENT },
    Block::Section { heading: "Progressive Hints", field: fields::PROGRESSIVE_HINTS },
    Block::Section { heading: "Solution Overview", field: fields::SOLUTION_OVERVIEW },
    Block::Section { heading: "Detailed Explanation", field: fields::DETAILED_EXPLANATION },
    Block::Section { heading: "Complexity Trade-off Table", field: fields::TRADEOFFS_TABLE },
    Block::Heading("Reference Implementation"),
    Block::Code(fields::REFERENCE_IMPLEMENTATION),
    Block::Heading("Validation"),
    Block::Code(fields::VALIDATION_SNIPPET),
    Block::Section { heading: "Complexity Analysis", field: fields::COMPLEXITY_ANALYSIS },
    Block::Section { heading: "Edge Cases & Pitfalls", field: fields::EDGE_CASES },
    Block::Section { heading: "Follow-up Variants", field: fields::FOLLOW_UPS },
    Block::Section { heading: "Takeaways", field: fields::TAKEAWAYS },
    Block::Section { heading: "Similar Problems", field: fields::SIMILAR_PROBLEMS_TABLE },
];

impl Block {
    /// 用题目记录渲染该单元格
    pub fn render(&self, record: &ProblemRecord) -> Result<Cell> {
        let cell = match *self {
            Block::Title => {
                let text = format!("# {}. {}", record.id()?, record.text(fields::TITLE)?);
                Cell::markdown(to_source_lines(&text))
            }
            Block::Section { heading, field } => {
                let text = format!("## {}\n{}", heading, record.text(field)?);
                Cell::markdown(to_source_lines(&text))
            }
            Block::Heading(heading) => Cell::markdown(to_source_lines(&format!("## {}", heading))),
            Block::Code(field) => Cell::code(to_source_lines(&record.text(field)?)),
        };
        Ok(cell)
    }
}

/// 按模板组装单元格，任一字段缺失即返回错误
pub fn build_cells(record: &ProblemRecord) -> Result<Vec<Cell>> {
    NOTEBOOK_TEMPLATE
        .iter()
        .map(|block| block.render(record))
        .collect()
}

/// 单道题的生成结果
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// 写入的文件路径
    pub path: PathBuf,
    /// 写入的笔记本
    pub notebook: Notebook,
}

/// 笔记本生成流程
///
/// - 持有启动时构造一次的环境描述（只读）
/// - 持有写入服务
/// - 一次只处理一道题
pub struct NotebookFlow {
    metadata: NotebookMetadata,
    writer: NotebookWriter,
}

impl NotebookFlow {
    /// 创建新的生成流程
    pub fn new(config: &Config) -> Self {
        Self {
            metadata: NotebookMetadata::python3(config.python_version.clone()),
            writer: NotebookWriter::new(config),
        }
    }

    /// 只在内存中组装笔记本，不写文件
    pub fn assemble(&self, record: &ProblemRecord) -> Result<Notebook> {
        Ok(Notebook::new(build_cells(record)?, self.metadata.clone()))
    }

    /// 组装笔记本并写入 `<output_dir>/LC_<id>_<slug>.ipynb`
    pub fn build(&self, record: &ProblemRecord) -> Result<BuildOutcome> {
        let notebook = self.assemble(record)?;
        let path = self.writer.notebook_path(&record.id()?, &record.slug()?);

        self.writer.write(&notebook, &path)?;
        debug!("{} -> {}", record.label(), path.display());

        Ok(BuildOutcome { path, notebook })
    }
}
