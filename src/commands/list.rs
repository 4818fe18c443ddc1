//! alias list 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::services::AliasService;
use crate::domain::error::Result;
use crate::domain::models::Alias;
use crate::template::{DEFAULT_FORMAT, ListTemplate};
use std::sync::Arc;

/// list 命令参数
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// 别名精确匹配，空字符串匹配全部
    pub name: String,
    /// key 子串匹配，空字符串匹配全部
    pub key: String,
    /// 每个别名的输出模板
    pub format: String,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            key: String::new(),
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

/// list 命令
pub struct ListCommand {
    alias_service: Arc<AliasService>,
    options: ListOptions,
}

impl ListCommand {
    pub fn new(alias_service: Arc<AliasService>, options: ListOptions) -> Self {
        Self {
            alias_service,
            options,
        }
    }

    /// 生成完整输出（标题 + 渲染结果）
    pub fn render(&self) -> Result<String> {
        // 先解析模板，格式错误时不必读取存储
        let template = ListTemplate::parse(&self.options.format)?;
        let aliases = self
            .alias_service
            .list(&self.options.name, &self.options.key)?;
        Ok(format_listing(&template, &aliases))
    }
}

fn format_listing(template: &ListTemplate, aliases: &[Alias]) -> String {
    format!("总共{}个别名：\n{}", aliases.len(), template.render(aliases))
}

impl CommandHandler for ListCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::domain::models::AliasMode;
    use crate::infrastructure::storage::FileAliasRepository;
    use tempfile::TempDir;

    fn service_with_aliases() -> (TempDir, Arc<AliasService>) {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileAliasRepository::new(dir.path().join("store.yaml"));
        let service = Arc::new(AliasService::new(Arc::new(repo)));
        service
            .add(Alias::new("java8", "JAVA_HOME", "C:\\jdk8", AliasMode::Overwrite))
            .unwrap();
        service
            .add(Alias::new("java17", "JAVA_HOME", "C:\\jdk17", AliasMode::Overwrite))
            .unwrap();
        service
            .add(Alias::new("dev", "STAGE", "development", AliasMode::Overwrite))
            .unwrap();
        (dir, service)
    }

    #[test]
    fn test_list_all_with_custom_format() {
        let (_dir, service) = service_with_aliases();
        let cmd = ListCommand::new(
            service,
            ListOptions {
                format: "{{alias}};".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(cmd.render().unwrap(), "总共3个别名：\njava8;java17;dev;");
    }

    #[test]
    fn test_list_filtered_by_key() {
        let (_dir, service) = service_with_aliases();
        let cmd = ListCommand::new(
            service,
            ListOptions {
                key: "JAVA".to_string(),
                format: "{{index}}={{value}} ".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(cmd.render().unwrap(), "总共2个别名：\n0=C:\\jdk8 1=C:\\jdk17 ");
    }

    #[test]
    fn test_list_by_name_with_default_format() {
        let (_dir, service) = service_with_aliases();
        let cmd = ListCommand::new(
            service,
            ListOptions {
                name: "dev".to_string(),
                ..Default::default()
            },
        );
        let output = cmd.render().unwrap();
        assert!(output.starts_with("总共1个别名："));
        assert!(output.contains("\talias:dev\n"));
        assert!(output.contains("\tvalue:development\n"));
    }

    #[test]
    fn test_list_bad_format() {
        let (_dir, service) = service_with_aliases();
        let cmd = ListCommand::new(
            service,
            ListOptions {
                format: "{{nope}}".to_string(),
                ..Default::default()
            },
        );
        assert!(matches!(cmd.render(), Err(DomainError::Template(_))));
    }
}
