//! 应用程序容器
//!
//! 负责依赖注入：存储、子进程执行器、平台相关的写入器

use crate::application::services::{AliasService, EnvService};
use crate::domain::error::Result;
use crate::domain::models::Platform;
use crate::domain::repositories::{AliasRepository, StorageConfig};
use crate::infrastructure::env::EnvApplier;
use crate::infrastructure::paths;
use crate::infrastructure::process::{CommandRunner, ProcessRunner};
use crate::infrastructure::storage::FileAliasRepository;
use std::sync::Arc;

/// 应用程序配置
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub verbose: bool,
    pub storage: StorageConfig,
}

/// 应用程序容器
pub struct Application {
    /// 别名服务
    pub alias_service: Arc<AliasService>,
    /// 环境变量服务
    pub env_service: Arc<EnvService>,
}

impl Application {
    /// 创建应用程序实例，使用当前平台的子进程执行器
    pub fn new(config: AppConfig) -> Result<Self> {
        let runner = match Platform::detect() {
            Ok(platform) => ProcessRunner::for_platform(platform),
            Err(_) => ProcessRunner::default(),
        };
        Self::with_runner(config, Arc::new(runner))
    }

    /// 使用指定的子进程执行器创建应用程序实例
    pub fn with_runner(config: AppConfig, runner: Arc<dyn CommandRunner>) -> Result<Self> {
        let store_path = paths::resolve_store_path(&config.storage)?;
        let repository: Arc<dyn AliasRepository> = Arc::new(FileAliasRepository::new(store_path));
        log::info!("Using store file: {}", repository.location().display());

        let alias_service = Arc::new(AliasService::new(repository));
        let env_service = Arc::new(EnvService::new(
            alias_service.clone(),
            EnvApplier::detect(runner),
        ));

        Ok(Self {
            alias_service,
            env_service,
        })
    }
}
