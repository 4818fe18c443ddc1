//! 环境变量取值计算

use super::alias::AliasMode;
use super::platform::Scope;

/// 路径类变量的分隔符
pub const SEGMENT_SEPARATOR: &str = ";";

/// 根据别名模式计算新的变量值
///
/// 当前值为空时，无论何种模式都直接使用别名的值。
#[must_use]
pub fn compute_new_value(mode: AliasMode, current: &str, value: &str) -> String {
    if current.is_empty() {
        return value.to_string();
    }
    match mode {
        AliasMode::Overwrite => value.to_string(),
        AliasMode::Append => prepend_segment(current, value),
    }
}

/// 把 `value` 放到 `;` 列表最前面，去掉列表中与它完全相同的段，其余段保持原顺序
#[must_use]
pub fn prepend_segment(current: &str, value: &str) -> String {
    if current.is_empty() {
        return value.to_string();
    }
    let rest = current.split(SEGMENT_SEPARATOR).filter(|seg| *seg != value);

    std::iter::once(value)
        .chain(rest)
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// 当前 shell 同步结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellUpdate {
    /// 手动命令已复制到剪贴板
    CopiedToClipboard,
    /// 需要用户手动执行命令
    Manual,
}

/// 一次 apply 的结果：持久化已成功，shell 同步需用户执行 `shell_command`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub key: String,
    pub scope: Scope,
    pub old_value: String,
    pub new_value: String,
    pub shell_command: String,
    pub shell_update: ShellUpdate,
}
