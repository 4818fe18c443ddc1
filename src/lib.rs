//! sparkle - 通过别名快速切换系统环境变量
//!
//! 分层结构：
//! - domain: 别名模型、取值合并规则、错误类型
//! - application: 别名维护与应用两个用例
//! - infrastructure: 存储文件、子进程、按平台写入环境变量
//! - commands / cli / template: 命令行外壳

// 领域层
pub mod domain;

// 应用层
pub mod application;

// 基础设施层
pub mod infrastructure;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

// 列表输出模板
pub mod template;

// 应用程序容器
pub mod app;

#[cfg(test)]
pub(crate) mod test_utils;

// 重新导出常用类型
pub use domain::{Alias, AliasList, AliasMode, DomainError, Result, Scope};
