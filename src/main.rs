//! sparkle 主程序入口
//!
//! 设计原则：
//! - 入口代码简洁，逻辑委托给各模块
//! - 成功静默，--verbose 输出详细信息和日志
//! - 出错时打印错误并以退出码 1 结束

use clap::Parser;
use sparkle::app::{AppConfig, Application};
use sparkle::cli::{AliasCommands, Cli, Commands};
use sparkle::commands::{
    AddCommand, AddOptions, ApplyCommand, ApplyOptions, CommandContext, CommandHandler,
    ListCommand, ListOptions, RemoveCommand,
};
use sparkle::domain::repositories::StorageConfig;
use sparkle::Result;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = CommandContext {
        verbose: cli.verbose,
    };

    if let Err(e) = run(cli, &ctx) {
        e.report(ctx.verbose);
        std::process::exit(1);
    }
}

/// 初始化日志，RUST_LOG 优先
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// 构建应用并运行具体命令
fn run(cli: Cli, ctx: &CommandContext) -> Result<()> {
    let app = Application::new(AppConfig {
        verbose: cli.verbose,
        storage: StorageConfig {
            store_path: cli.store,
        },
    })?;

    let handler: Box<dyn CommandHandler> = match cli.command {
        Commands::Alias(AliasCommands::List { name, key, format }) => Box::new(ListCommand::new(
            app.alias_service.clone(),
            ListOptions {
                name: name.unwrap_or_default(),
                key,
                format,
            },
        )),
        Commands::Alias(AliasCommands::Add {
            name,
            key,
            value,
            mode,
            desc,
            long_desc,
        }) => Box::new(AddCommand::new(
            app.alias_service.clone(),
            AddOptions {
                name,
                key,
                value,
                mode,
                desc,
                long_desc,
            },
        )),
        Commands::Alias(AliasCommands::Rm { name }) => {
            Box::new(RemoveCommand::new(app.alias_service.clone(), name))
        }
        Commands::Env { name, global } => Box::new(ApplyCommand::new(
            app.env_service.clone(),
            ApplyOptions { name, global },
        )),
    };

    handler.execute(ctx)
}
