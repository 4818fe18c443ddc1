//! 持久化环境变量写入
//!
//! 启动时按检测到的平台选择一次实现：Windows 写注册表，其他平台直接报不支持。

pub mod windows;

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{Alias, ApplyOutcome, Platform, Scope};
use crate::infrastructure::process::CommandRunner;
use std::sync::Arc;

pub use windows::WindowsApplier;

/// 环境变量写入器
pub enum EnvApplier {
    Windows(WindowsApplier),
    /// 无实现的平台，保存平台名称用于报错
    Unsupported(String),
}

impl EnvApplier {
    /// 按平台构造写入器
    pub fn for_platform(platform: Platform, runner: Arc<dyn CommandRunner>) -> Self {
        match platform {
            Platform::Windows => EnvApplier::Windows(WindowsApplier::new(runner)),
            Platform::Linux | Platform::MacOs => EnvApplier::Unsupported(platform.to_string()),
        }
    }

    /// 按当前运行平台构造写入器
    pub fn detect(runner: Arc<dyn CommandRunner>) -> Self {
        match Platform::detect() {
            Ok(platform) => Self::for_platform(platform, runner),
            Err(_) => EnvApplier::Unsupported(std::env::consts::OS.to_string()),
        }
    }

    /// 读取当前值、合并、持久化，并生成当前 shell 的手动命令
    pub fn apply(&self, alias: &Alias, scope: Scope) -> Result<ApplyOutcome> {
        match self {
            EnvApplier::Windows(applier) => applier.apply(alias, scope),
            EnvApplier::Unsupported(os) => Err(DomainError::UnsupportedPlatform(os.clone())),
        }
    }
}
