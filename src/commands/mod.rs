//! 命令处理器
//!
//! 每个命令一个模块，实现 CommandHandler trait；
//! 命令行参数通过各自的 Options 结构显式传入，不使用全局状态。

use crate::domain::error::Result;

pub mod add;
pub mod apply;
pub mod list;
pub mod remove;

pub use add::{AddCommand, AddOptions};
pub use apply::{ApplyCommand, ApplyOptions};
pub use list::{ListCommand, ListOptions};
pub use remove::RemoveCommand;

/// 命令上下文
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandContext {
    pub verbose: bool,
}

/// 命令处理器 trait
pub trait CommandHandler {
    /// 执行命令
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
