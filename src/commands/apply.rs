//! env 命令处理器：把别名应用到系统环境变量

use super::{CommandContext, CommandHandler};
use crate::application::services::EnvService;
use crate::domain::error::Result;
use crate::domain::models::{ApplyOutcome, Scope, ShellUpdate};
use std::sync::Arc;

const BANNER: &str = "----------------------------------------------------------";

/// env 命令参数
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    pub name: String,
    /// 是否写入机器级变量
    pub global: bool,
}

/// env 命令
pub struct ApplyCommand {
    env_service: Arc<EnvService>,
    options: ApplyOptions,
}

impl ApplyCommand {
    pub fn new(env_service: Arc<EnvService>, options: ApplyOptions) -> Self {
        Self {
            env_service,
            options,
        }
    }
}

impl CommandHandler for ApplyCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        let scope = Scope::from_global(self.options.global);
        let outcome = self.env_service.apply(&self.options.name, scope)?;
        print!("{}", format_outcome(&outcome));
        Ok(())
    }
}

/// 写入结果与当前 shell 的手动命令
pub fn format_outcome(outcome: &ApplyOutcome) -> String {
    let scope = match outcome.scope {
        Scope::Machine => "global ",
        Scope::User => "",
    };

    let mut out = format!(
        "set {}env:{} successfully, newVal: \n\t{} \noldVal: \n\t{}\n",
        scope, outcome.key, outcome.new_value, outcome.old_value
    );
    out.push_str(&format!("\n{}\n", BANNER));
    out.push_str("由于系统限制，无法修改当前shell的环境变量，请复制以下命令到当前shell中执行。\n");
    if outcome.shell_update == ShellUpdate::CopiedToClipboard {
        out.push_str("\n      命令已复制到剪贴板，可直接粘贴到当前shell中执行！\n");
    }
    out.push_str(&format!("\n\n\t{}\n\n", outcome.shell_command));
    out.push_str(&format!("{}\n", BANNER));
    out
}
