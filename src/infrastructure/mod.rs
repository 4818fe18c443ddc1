//! Infrastructure Layer - 技术实现
//!
//! 包含：
//! - storage: 存储文件读写
//! - paths: 路径工具
//! - process: 子进程执行
//! - env: 按平台写入持久化环境变量

pub mod env;
pub mod paths;
pub mod process;
pub mod storage;

pub use env::EnvApplier;
pub use process::{CommandRunner, ProcessRunner};
pub use storage::FileAliasRepository;
