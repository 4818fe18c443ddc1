//! 操作系统与作用域

use crate::domain::error::{DomainError, Result};
use std::fmt;

/// 支持识别的操作系统
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    /// 从 `std::env::consts::OS` 风格的名称解析
    pub fn parse(os: &str) -> Result<Self> {
        match os.to_lowercase().as_str() {
            "windows" => Ok(Platform::Windows),
            "macos" | "darwin" => Ok(Platform::MacOs),
            "linux" | "freebsd" | "openbsd" | "netbsd" | "solaris" | "illumos" => {
                Ok(Platform::Linux)
            }
            other => Err(DomainError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// 检测当前运行平台
    pub fn detect() -> Result<Self> {
        Self::parse(std::env::consts::OS)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::Linux => write!(f, "linux"),
            Platform::MacOs => write!(f, "macos"),
        }
    }
}

/// 环境变量生效范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// 当前用户
    #[default]
    User,
    /// 整台机器（需要管理员权限）
    Machine,
}

impl Scope {
    #[must_use]
    pub fn from_global(global: bool) -> Self {
        if global { Scope::Machine } else { Scope::User }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::User => write!(f, "user"),
            Scope::Machine => write!(f, "global"),
        }
    }
}
