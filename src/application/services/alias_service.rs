//! 别名应用服务

use crate::domain::error::{DomainError, Result};
use crate::domain::models::Alias;
use crate::domain::repositories::AliasRepository;
use std::sync::Arc;

/// 别名服务：每个操作完整地加载、修改、保存一次存储
pub struct AliasService {
    repository: Arc<dyn AliasRepository>,
}

impl AliasService {
    pub fn new(repository: Arc<dyn AliasRepository>) -> Self {
        Self { repository }
    }

    /// 查询别名，空过滤条件匹配全部
    pub fn list(&self, name: &str, key: &str) -> Result<Vec<Alias>> {
        Ok(self.repository.load()?.query(name, key))
    }

    /// 获取单个别名
    pub fn get(&self, name: &str) -> Result<Alias> {
        self.repository
            .load()?
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(name.to_string()))
    }

    /// 新增或修改别名，返回是否为新增
    pub fn add(&self, alias: Alias) -> Result<bool> {
        if alias.name.trim().is_empty() {
            return Err(DomainError::InvalidArgument("别名不能为空".to_string()));
        }
        if alias.key.trim().is_empty() {
            return Err(DomainError::InvalidArgument("环境变量名不能为空".to_string()));
        }

        let mut aliases = self.repository.load()?;
        let created = aliases.add(alias);
        self.repository.save(&aliases)?;
        Ok(created)
    }

    /// 删除别名，别名不存在时返回 NotFound 且不写文件
    pub fn remove(&self, name: &str) -> Result<()> {
        let mut aliases = self.repository.load()?;
        if !aliases.remove(name) {
            return Err(DomainError::NotFound(name.to_string()));
        }
        self.repository.save(&aliases)
    }
}
