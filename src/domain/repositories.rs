//! 存储接口定义（输出端口）

use crate::domain::error::Result;
use crate::domain::models::AliasList;
use std::path::{Path, PathBuf};

/// 别名存储接口
///
/// 每次命令调用最多加载一次、保存一次；存储文件不存在时视为空列表。
pub trait AliasRepository: Send + Sync {
    /// 读取全部别名
    fn load(&self) -> Result<AliasList>;

    /// 写回全部别名
    fn save(&self, aliases: &AliasList) -> Result<()>;

    /// 存储位置
    fn location(&self) -> &Path;
}

/// 存储配置
#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    /// 显式指定的存储文件，`None` 时使用 `$HOME/.sparkle.yaml`
    pub store_path: Option<PathBuf>,
}

impl StorageConfig {
    #[must_use]
    pub fn with_store_path(path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: Some(path.into()),
        }
    }
}
