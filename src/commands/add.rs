//! alias add 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::services::AliasService;
use crate::domain::error::Result;
use crate::domain::models::{Alias, AliasMode};
use std::sync::Arc;

/// add 命令参数
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub name: String,
    pub key: String,
    pub value: String,
    pub mode: AliasMode,
    pub desc: String,
    pub long_desc: String,
}

impl From<AddOptions> for Alias {
    fn from(opts: AddOptions) -> Self {
        Alias::new(opts.name, opts.key, opts.value, opts.mode).with_desc(opts.desc, opts.long_desc)
    }
}

/// add 命令
pub struct AddCommand {
    alias_service: Arc<AliasService>,
    options: AddOptions,
}

impl AddCommand {
    pub fn new(alias_service: Arc<AliasService>, options: AddOptions) -> Self {
        Self {
            alias_service,
            options,
        }
    }
}

impl CommandHandler for AddCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let alias = Alias::from(self.options.clone());
        let created = self.alias_service.add(alias)?;

        if ctx.verbose {
            let action = if created { "新增" } else { "修改" };
            println!(
                "✓ 已{}别名 {}: {} = {}",
                action, self.options.name, self.options.key, self.options.value
            );
        }
        Ok(())
    }
}
