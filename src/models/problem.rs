use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{NotebookError, Result};

/// 题目记录中模板使用的字段名
pub mod fields {
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const SLUG: &str = "slug";
    pub const TOPIC_ALIGNMENT: &str = "topic_alignment";
    pub const METADATA_SUMMARY: &str = "metadata_summary";
    pub const PROBLEM_STATEMENT: &str = "problem_statement";
    pub const PROGRESSIVE_HINTS: &str = "progressive_hints";
    pub const SOLUTION_OVERVIEW: &str = "solution_overview";
    pub const DETAILED_EXPLANATION: &str = "detailed_explanation";
    pub const TRADEOFFS_TABLE: &str = "tradeoffs_table";
    pub const REFERENCE_IMPLEMENTATION: &str = "reference_implementation";
    pub const VALIDATION_SNIPPET: &str = "validation_snippet";
    pub const COMPLEXITY_ANALYSIS: &str = "complexity_analysis";
    pub const EDGE_CASES: &str = "edge_cases";
    pub const FOLLOW_UPS: &str = "follow_ups";
    pub const TAKEAWAYS: &str = "takeaways";
    pub const SIMILAR_PROBLEMS_TABLE: &str = "similar_problems_table";
}

/// 一道算法题及其讲解
///
/// 字段保持为无类型的键值映射：记录由外部提供，字段是否齐全
/// 在生成笔记本时才检查，而不是在加载时。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemRecord {
    fields: Map<String, Value>,
}

impl ProblemRecord {
    /// 读取字段并转换为文本
    ///
    /// 字符串原样返回，数字按十进制文本返回，布尔值为 `True` / `False`；
    /// 缺失或为 null 视为缺少字段，数组和表无法转换。
    pub fn text(&self, field: &str) -> Result<String> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Err(NotebookError::missing_field(field)),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::Bool(true)) => Ok("True".to_string()),
            Some(Value::Bool(false)) => Ok("False".to_string()),
            Some(Value::Array(_)) => Err(NotebookError::NonTextField {
                field: field.to_string(),
                kind: "array",
            }),
            Some(Value::Object(_)) => Err(NotebookError::NonTextField {
                field: field.to_string(),
                kind: "table",
            }),
        }
    }

    pub fn id(&self) -> Result<String> {
        self.text(fields::ID)
    }

    pub fn slug(&self) -> Result<String> {
        self.text(fields::SLUG)
    }

    /// 用于日志和错误上下文的简短标识
    pub fn label(&self) -> String {
        let id = self.id().unwrap_or_else(|_| "?".to_string());
        let slug = self.slug().unwrap_or_else(|_| "?".to_string());
        format!("LC_{}_{}", id, slug)
    }

    /// 设置字段，返回自身以便链式构造
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// 删除字段
    pub fn without_field(mut self, field: &str) -> Self {
        self.fields.remove(field);
        self
    }
}

impl From<Map<String, Value>> for ProblemRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
