//! CLI 参数定义

use crate::domain::models::AliasMode;
use crate::template::DEFAULT_FORMAT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sparkle - 快速修改、切换系统环境变量的命令行工具
#[derive(Parser, Debug)]
#[command(
    name = "sparkle",
    version,
    about = "一个快速修改切换系统环境变量的命令行工具",
    long_about = "sparkle 是一个快速修改切换系统环境变量的命令行工具：\n\
1. 把环境变量的赋值规则注册到存储文件中，并为其取一个别名\n\
2. 修改环境变量时只需给出别名，减少输入，快速切换\n\
3. 写入系统环境变量后，给出在当前 shell 中生效的命令"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 存储文件 (默认 $HOME/.sparkle.yaml)
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    /// 详细输出模式
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 别名信息命令：查询、新增、修改、删除
    #[command(subcommand)]
    Alias(AliasCommands),

    /// 按别名修改环境变量，并给出更新当前 shell 的命令
    Env {
        /// 别名
        name: String,
        /// 写入机器级变量（需要管理员权限）
        #[arg(short, long)]
        global: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AliasCommands {
    /// 列举别名信息
    List {
        /// 别名（精确匹配）
        name: Option<String>,
        /// 按 key 过滤（子串匹配）
        #[arg(short, long, default_value = "")]
        key: String,
        /// 输出模板，可用字段: {{index}} {{alias}} {{key}} {{value}} {{type}} {{desc}} {{longDesc}}
        #[arg(short, long, default_value = DEFAULT_FORMAT, hide_default_value = true)]
        format: String,
    },

    /// 增加/修改别名
    Add {
        /// 别名
        name: String,
        /// 环境变量名
        #[arg(short, long)]
        key: String,
        /// 环境变量值
        #[arg(short, long)]
        value: String,
        /// 别名类型 (0/overwrite 覆盖, 1/append 追加)
        #[arg(short = 't', long = "type")]
        mode: AliasMode,
        /// 简短描述
        #[arg(long, default_value = "")]
        desc: String,
        /// 详细描述
        #[arg(long, default_value = "")]
        long_desc: String,
    },

    /// 删除别名
    #[command(name = "rm", visible_alias = "remove")]
    Rm {
        /// 别名
        name: String,
    },
}
