//! 应用服务（用例实现）

pub mod alias_service;
pub mod env_service;

pub use alias_service::AliasService;
pub use env_service::EnvService;
