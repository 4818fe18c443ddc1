//! alias rm 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::services::AliasService;
use crate::domain::error::Result;
use std::sync::Arc;

/// rm 命令
pub struct RemoveCommand {
    alias_service: Arc<AliasService>,
    name: String,
}

impl RemoveCommand {
    pub fn new(alias_service: Arc<AliasService>, name: String) -> Self {
        Self {
            alias_service,
            name,
        }
    }
}

impl CommandHandler for RemoveCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        self.alias_service.remove(&self.name)?;
        if ctx.verbose {
            println!("✓ 已删除别名: {}", self.name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::domain::models::{Alias, AliasMode};
    use crate::infrastructure::storage::FileAliasRepository;
    use tempfile::TempDir;

    fn service_with(names: &[&str]) -> (TempDir, Arc<AliasService>) {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileAliasRepository::new(dir.path().join("store.yaml"));
        let service = Arc::new(AliasService::new(Arc::new(repo)));
        for name in names {
            service
                .add(Alias::new(*name, "STAGE", *name, AliasMode::Overwrite))
                .unwrap();
        }
        (dir, service)
    }

    #[test]
    fn test_remove_command_verbose() {
        let (_dir, service) = service_with(&["dev", "prod"]);

        RemoveCommand::new(service.clone(), "dev".to_string())
            .execute(&CommandContext { verbose: true })
            .unwrap();

        let names: Vec<_> = service
            .list("", "")
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["prod"]);
    }

    #[test]
    fn test_remove_command_missing_alias() {
        let (dir, service) = service_with(&["dev"]);
        let before = std::fs::read_to_string(dir.path().join("store.yaml")).unwrap();

        let result = RemoveCommand::new(service, "ghost".to_string())
            .execute(&CommandContext::default());

        assert_eq!(result, Err(DomainError::NotFound("ghost".to_string())));
        let after = std::fs::read_to_string(dir.path().join("store.yaml")).unwrap();
        assert_eq!(before, after);
    }
}
