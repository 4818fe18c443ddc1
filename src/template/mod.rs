//! 别名列表输出模板
//!
//! # 模板语法
//!
//! ```text
//! {{index}} {{alias}} {{key}}={{value}} ({{type}})
//! ```
//!
//! 每个别名渲染一次模板，结果首尾相接。字段名不区分大小写，
//! 也接受 `{{$index}}`、`{{.Alias}}` 这种写法；`\n`、`\t` 会被转义为换行和制表符。
//!
//! 可用字段：`index` `alias` `key` `value` `type` `desc` `longDesc`

pub mod parser;
pub mod renderer;

use crate::domain::error::Result;
use crate::domain::models::Alias;

/// 默认列表格式
pub const DEFAULT_FORMAT: &str =
    "别名{{index}}:\n\talias:{{alias}}\n\tkey:{{key}}\n\tvalue:{{value}}\n\ttype:{{type}}\n";

/// 模板可引用的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateField {
    Index,
    Alias,
    Key,
    Value,
    Type,
    Desc,
    LongDesc,
}

/// 模板片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Field(TemplateField),
}

/// 已解析的列表模板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTemplate {
    segments: Vec<Segment>,
}

impl ListTemplate {
    /// 解析模板
    pub fn parse(format: &str) -> Result<Self> {
        Ok(Self {
            segments: parser::parse_segments(format)?,
        })
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// 渲染别名列表
    #[must_use]
    pub fn render(&self, aliases: &[Alias]) -> String {
        renderer::render(self, aliases)
    }
}

impl Default for ListTemplate {
    fn default() -> Self {
        Self {
            segments: parser::parse_segments(DEFAULT_FORMAT).unwrap_or_default(),
        }
    }
}
