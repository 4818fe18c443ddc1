//! 环境变量应用服务

use crate::application::services::AliasService;
use crate::domain::error::Result;
use crate::domain::models::{ApplyOutcome, Scope};
use crate::infrastructure::env::EnvApplier;
use std::sync::Arc;

/// 环境变量服务：把别名应用到系统环境
pub struct EnvService {
    aliases: Arc<AliasService>,
    applier: EnvApplier,
}

impl EnvService {
    pub fn new(aliases: Arc<AliasService>, applier: EnvApplier) -> Self {
        Self { aliases, applier }
    }

    /// 按别名名称应用
    pub fn apply(&self, name: &str, scope: Scope) -> Result<ApplyOutcome> {
        let alias = self.aliases.get(name)?;
        log::debug!(
            "应用别名 {}: {} = {} (模式 {})",
            alias.name,
            alias.key,
            alias.value,
            alias.mode
        );
        self.applier.apply(&alias, scope)
    }
}
