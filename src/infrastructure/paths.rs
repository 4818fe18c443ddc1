//! 路径管理工具

use crate::domain::error::{DomainError, Result};
use crate::domain::repositories::StorageConfig;
use std::path::{Path, PathBuf};

/// 默认存储文件名（位于用户主目录）
pub const DEFAULT_STORE_FILE: &str = ".sparkle.yaml";

/// 获取默认存储文件路径：~/.sparkle.yaml
pub fn default_store_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(DEFAULT_STORE_FILE))
        .ok_or_else(|| DomainError::Config("无法确定主目录".to_string()))
}

/// 解析存储文件路径
///
/// 显式指定的路径原样返回；否则使用默认路径，并在文件不存在时创建空文件。
pub fn resolve_store_path(config: &StorageConfig) -> Result<PathBuf> {
    if let Some(path) = &config.store_path {
        return Ok(path.clone());
    }

    let path = default_store_path()?;
    if ensure_store_file(&path)? {
        println!("store file not exists, create empty store file: {}", path.display());
    }
    Ok(path)
}

/// 确保存储文件存在，返回是否新建了文件
pub fn ensure_store_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, "")?;
    log::info!("已创建空存储文件: {}", path.display());
    Ok(true)
}

/// 安全写入文件 (使用临时文件 + 原子替换)
pub fn write_file_safe(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    std::fs::write(&temp_path, content)?;
    std::fs::rename(&temp_path, path)?;
    Ok(())
}
