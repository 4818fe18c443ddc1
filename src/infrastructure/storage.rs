//! 文件存储实现
//!
//! 存储文件是一个键值文档，别名列表保存在 `alias` 键下，其余键原样保留。
//! 文档格式由扩展名决定：`.toml`、`.json`，其余一律按 YAML 处理。

use crate::domain::error::{DomainError, Result};
use crate::domain::models::AliasList;
use crate::domain::repositories::AliasRepository;
use crate::infrastructure::paths;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// 别名列表在文档中的键
pub const ALIAS_KEY: &str = "alias";

type Document = Map<String, Value>;

/// 存储文档格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
    Json,
}

impl DocumentFormat {
    /// 按扩展名识别格式
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("toml") => DocumentFormat::Toml,
            Some("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }

    fn parse(&self, content: &str) -> Result<Document> {
        if content.trim().is_empty() {
            return Ok(Document::new());
        }
        let doc = match self {
            DocumentFormat::Yaml => {
                // 只有注释的 YAML 文件解析为 null
                let value: Option<Document> = serde_yaml::from_str(content)?;
                value.unwrap_or_default()
            }
            DocumentFormat::Toml => toml::from_str(content)?,
            DocumentFormat::Json => serde_json::from_str(content)?,
        };
        Ok(doc)
    }

    fn serialize(&self, doc: &Document) -> Result<String> {
        let content = match self {
            DocumentFormat::Yaml => serde_yaml::to_string(doc)?,
            DocumentFormat::Toml => toml::to_string(doc)?,
            DocumentFormat::Json => serde_json::to_string_pretty(doc)?,
        };
        Ok(content)
    }
}

/// 基于单个文件的别名存储
pub struct FileAliasRepository {
    path: PathBuf,
    format: DocumentFormat,
}

impl FileAliasRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = DocumentFormat::from_path(&path);
        Self { path, format }
    }

    fn read_document(&self) -> Result<Document> {
        if !self.path.exists() {
            return Ok(Document::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        self.format.parse(&content).map_err(|e| {
            DomainError::Storage(format!("解析存储文件 {} 失败: {}", self.path.display(), e))
        })
    }
}

impl AliasRepository for FileAliasRepository {
    fn load(&self) -> Result<AliasList> {
        let doc = self.read_document()?;
        match doc.get(ALIAS_KEY) {
            None | Some(Value::Null) => Ok(AliasList::new()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                DomainError::Storage(format!("存储文件中的 {} 格式错误: {}", ALIAS_KEY, e))
            }),
        }
    }

    fn save(&self, aliases: &AliasList) -> Result<()> {
        let mut doc = self.read_document()?;
        doc.insert(ALIAS_KEY.to_string(), serde_json::to_value(aliases)?);

        let content = self.format.serialize(&doc)?;
        paths::write_file_safe(&self.path, &content)?;
        log::debug!("已保存 {} 个别名到 {}", aliases.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Alias, AliasMode};
    use tempfile::TempDir;

    fn sample() -> AliasList {
        AliasList::from(vec![
            Alias::new("dev", "STAGE", "development", AliasMode::Overwrite)
                .with_desc("开发", "切换到开发环境"),
            Alias::new("jdk", "PATH", "C:\\jdk\\bin", AliasMode::Append),
        ])
    }

    fn repo_in(dir: &TempDir, file: &str) -> FileAliasRepository {
        FileAliasRepository::new(dir.path().join(file))
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.toml")), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("store")), DocumentFormat::Yaml);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir, "missing.yaml");
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir, "store.yaml");
        std::fs::write(repo.location(), "").unwrap();
        assert!(repo.load().unwrap().is_empty());

        std::fs::write(repo.location(), "# 只有注释\n").unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_each_format() {
        let dir = tempfile::tempdir().unwrap();
        for file in ["store.yaml", "store.toml", "store.json"] {
            let repo = repo_in(&dir, file);
            repo.save(&sample()).unwrap();
            assert_eq!(repo.load().unwrap(), sample(), "format of {}", file);
        }
    }

    #[test]
    fn test_yaml_layout_uses_original_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir, "store.yaml");
        repo.save(&sample()).unwrap();

        let content = std::fs::read_to_string(repo.location()).unwrap();
        assert!(content.contains("alias:"));
        assert!(content.contains("longDesc:"));
        assert!(content.contains("type: 1"));
    }

    #[test]
    fn test_loads_lowercase_keys_written_by_older_versions() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir, "store.yaml");
        std::fs::write(
            repo.location(),
            "alias:\n- alias: dev\n  desc: d\n  longdesc: ld\n  type: 0\n  key: STAGE\n  value: development\n",
        )
        .unwrap();

        let list = repo.load().unwrap();
        let dev = list.get("dev").unwrap();
        assert_eq!(dev.long_desc, "ld");
        assert_eq!(dev.value, "development");
    }

    #[test]
    fn test_duplicate_names_in_file_collapse_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir, "store.yaml");
        std::fs::write(
            repo.location(),
            "alias:\n- alias: dev\n  key: STAGE\n  value: A\n- alias: dev\n  key: STAGE\n  value: B\n",
        )
        .unwrap();

        let mut list = repo.load().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.query("dev", "").len(), 1);
        assert_eq!(list.get("dev").map(|a| a.value.as_str()), Some("B"));

        assert!(list.remove("dev"));
        assert!(list.get("dev").is_none());

        repo.save(&list).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir, "store.yaml");
        std::fs::write(repo.location(), "theme: dark\n").unwrap();

        repo.save(&sample()).unwrap();

        let content = std::fs::read_to_string(repo.location()).unwrap();
        assert!(content.contains("theme: dark"));
        assert_eq!(repo.load().unwrap().len(), 2);
    }

    #[test]
    fn test_corrupted_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir, "store.json");
        std::fs::write(repo.location(), "{not json").unwrap();

        assert!(matches!(repo.load(), Err(DomainError::Storage(_))));
    }

    #[test]
    fn test_invalid_alias_section_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir, "store.yaml");
        std::fs::write(repo.location(), "alias: 42\n").unwrap();

        assert!(matches!(repo.load(), Err(DomainError::Storage(_))));
    }
}
