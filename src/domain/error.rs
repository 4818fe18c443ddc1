//! 领域层错误类型

use miette::Diagnostic;
use std::error::Error as _;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// 领域层错误类型
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum DomainError {
    #[error("别名{0}不存在")]
    #[diagnostic(code(sparkle::not_found), help("使用 'sparkle alias list' 查看所有别名"))]
    NotFound(String),

    #[error("不支持的操作系统: {0}")]
    #[diagnostic(
        code(sparkle::unsupported_platform),
        help("目前仅 Windows 支持修改持久化环境变量")
    )]
    UnsupportedPlatform(String),

    #[error("读取环境变量 {key} 失败: {reason}")]
    #[diagnostic(code(sparkle::lookup))]
    LookupFailure { key: String, reason: String },

    #[error("写入环境变量 {key} 失败: {reason}\n\t旧值: {old_value}\n\t新值: {new_value}")]
    #[diagnostic(
        code(sparkle::persistence),
        help("可手动执行 setx 重试；修改全局变量需要以管理员身份运行")
    )]
    PersistenceFailure {
        key: String,
        old_value: String,
        new_value: String,
        reason: String,
    },

    #[error("无法更新当前 shell 的环境变量: {0}")]
    #[diagnostic(code(sparkle::propagation))]
    PropagationFailure(String),

    #[error("存储错误: {0}")]
    #[diagnostic(code(sparkle::storage))]
    Storage(String),

    #[error("IO 错误: {0}")]
    #[diagnostic(code(sparkle::io))]
    Io(String),

    #[error("权限不足: {0}")]
    #[diagnostic(
        code(sparkle::permission_denied),
        help("检查文件权限，或在 Windows 上以管理员身份运行")
    )]
    PermissionDenied(String),

    #[error("序列化错误: {0}")]
    #[diagnostic(code(sparkle::serialization))]
    Serialization(String),

    #[error("模板错误: {0}")]
    #[diagnostic(
        code(sparkle::template),
        help("可用字段: {{index}} {{alias}} {{key}} {{value}} {{type}} {{desc}} {{longDesc}}")
    )]
    Template(String),

    #[error("无效参数: {0}")]
    #[diagnostic(code(sparkle::invalid_argument))]
    InvalidArgument(String),

    #[error("配置错误: {0}")]
    #[diagnostic(code(sparkle::config))]
    Config(String),
}

impl DomainError {
    /// 报告错误，支持详细/安静模式
    ///
    /// verbose = true: 错误链 + 诊断提示
    /// verbose = false: 只打印关键信息
    pub fn report(&self, verbose: bool) {
        if !verbose {
            eprintln!("错误: {}", self);
            return;
        }

        eprintln!("❌ 错误: {}", self);
        let mut current = self.source();
        while let Some(next) = current {
            eprintln!("  └─ 原因: {}", next);
            current = next.source();
        }
        if let Some(code) = self.code() {
            eprintln!("  代码: {}", code);
        }
        if let Some(help) = self.help() {
            eprintln!("  提示: {}", help);
        }
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => DomainError::PermissionDenied(err.to_string()),
            _ => DomainError::Io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for DomainError {
    fn from(err: serde_yaml::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DomainError {
    fn from(err: toml::de::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for DomainError {
    fn from(err: toml::ser::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
