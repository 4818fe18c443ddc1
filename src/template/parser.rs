//! 模板解析器
//!
//! 解析模板语法：{{field}}、{{$field}}、{{.Field}}

use crate::domain::error::{DomainError, Result};
use crate::template::{Segment, TemplateField};
use regex::Regex;

/// 把模板拆成文本片段和字段占位符
pub fn parse_segments(format: &str) -> Result<Vec<Segment>> {
    let format = unescape(format);
    let pattern = Regex::new(r"\{\{([^{}]*)\}\}")
        .map_err(|e| DomainError::Template(e.to_string()))?;

    let mut segments = Vec::new();
    let mut last = 0;

    for caps in pattern.captures_iter(&format) {
        let (Some(whole), Some(expr)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        push_text(&mut segments, &format[last..whole.start()])?;
        segments.push(Segment::Field(parse_field(expr.as_str())?));
        last = whole.end();
    }
    push_text(&mut segments, &format[last..])?;

    Ok(segments)
}

fn push_text(segments: &mut Vec<Segment>, text: &str) -> Result<()> {
    if text.contains("{{") || text.contains("}}") {
        return Err(DomainError::Template(format!("未闭合的占位符: {}", text)));
    }
    if !text.is_empty() {
        segments.push(Segment::Text(text.to_string()));
    }
    Ok(())
}

/// 解析字段名：去掉前导 `$` 或 `.`，不区分大小写
fn parse_field(expr: &str) -> Result<TemplateField> {
    let name = expr.trim().trim_start_matches(['$', '.']).trim();

    match name.to_lowercase().as_str() {
        "index" => Ok(TemplateField::Index),
        "alias" | "name" => Ok(TemplateField::Alias),
        "key" => Ok(TemplateField::Key),
        "value" => Ok(TemplateField::Value),
        "type" | "mode" => Ok(TemplateField::Type),
        "desc" => Ok(TemplateField::Desc),
        "longdesc" => Ok(TemplateField::LongDesc),
        "" => Err(DomainError::Template("空的字段名".to_string())),
        _ => Err(DomainError::Template(format!("未知字段: {}", name))),
    }
}

/// 处理命令行里常见的 `\n`、`\t`、`\\` 转义
fn unescape(format: &str) -> String {
    let mut result = String::with_capacity(format.len());
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}
