//! 领域实体

pub mod alias;
pub mod env_value;
pub mod platform;

pub use alias::{Alias, AliasList, AliasMode};
pub use env_value::{ApplyOutcome, ShellUpdate, compute_new_value, prepend_segment};
pub use platform::{Platform, Scope};
