//! Application Layer - 应用服务
//!
//! 包含：
//! - services: 别名维护与环境变量应用两个用例

pub mod services;

pub use services::{AliasService, EnvService};
