//! Windows 实现：reg 查询注册表，setx 持久化，clip 复制手动命令

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{
    Alias, ApplyOutcome, Scope, ShellUpdate, compute_new_value,
};
use crate::infrastructure::process::{CommandRunner, ProcessError};
use std::sync::Arc;

const USER_ENV_KEY: &str = r"HKEY_CURRENT_USER\Environment";
const MACHINE_ENV_KEY: &str =
    r"HKEY_LOCAL_MACHINE\SYSTEM\CurrentControlSet\Control\Session Manager\Environment";

/// reg query 找不到值时的提示（中文/英文系统）
const VALUE_NOT_FOUND_MARKERS: &[&str] = &[
    "系统找不到指定的注册表项或值",
    "unable to find the specified registry key or value",
];

/// reg query 输出的列分隔
const REG_COLUMN_SEPARATOR: &str = "    ";

/// Windows 环境变量写入器
pub struct WindowsApplier {
    runner: Arc<dyn CommandRunner>,
}

impl WindowsApplier {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    pub fn apply(&self, alias: &Alias, scope: Scope) -> Result<ApplyOutcome> {
        let old_value = self.read_persisted(&alias.key, scope)?;
        let new_value = compute_new_value(alias.mode, &old_value, &alias.value);

        self.persist(&alias.key, &new_value, scope)
            .map_err(|e| DomainError::PersistenceFailure {
                key: alias.key.clone(),
                old_value: old_value.clone(),
                new_value: new_value.clone(),
                reason: e.to_string(),
            })?;
        log::info!("已写入 {} 环境变量 {}", scope, alias.key);

        let shell_command = shell_command(&alias.key, &new_value);
        let shell_update = match self.copy_to_clipboard(&shell_command) {
            Ok(()) => ShellUpdate::CopiedToClipboard,
            Err(e) => {
                log::debug!("{}", e);
                ShellUpdate::Manual
            }
        };

        Ok(ApplyOutcome {
            key: alias.key.clone(),
            scope,
            old_value,
            new_value,
            shell_command,
            shell_update,
        })
    }

    /// 读取注册表中的持久化值；值不存在视为空字符串
    fn read_persisted(&self, key: &str, scope: Scope) -> Result<String> {
        if key.is_empty() {
            return Err(DomainError::InvalidArgument("环境变量名不能为空".to_string()));
        }

        let args = vec![
            "query".to_string(),
            registry_path(scope).to_string(),
            "/v".to_string(),
            key.to_string(),
        ];

        match self.runner.run("reg", &args) {
            Ok(out) => Ok(parse_reg_query(&out.output, key)),
            Err(e) if is_value_not_found(&e) => Ok(String::new()),
            Err(e) => Err(DomainError::LookupFailure {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn persist(&self, key: &str, value: &str, scope: Scope) -> std::result::Result<(), ProcessError> {
        let mut args = vec![key.to_string(), value.to_string()];
        if scope == Scope::Machine {
            args.push("/M".to_string());
        }
        self.runner.run("setx", &args).map(|_| ())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        self.runner
            .run_with_input("clip", &[], text)
            .map(|_| ())
            .map_err(|e| DomainError::PropagationFailure(e.to_string()))
    }
}

fn registry_path(scope: Scope) -> &'static str {
    match scope {
        Scope::User => USER_ENV_KEY,
        Scope::Machine => MACHINE_ENV_KEY,
    }
}

fn is_value_not_found(err: &ProcessError) -> bool {
    let output = err.output().to_lowercase();
    VALUE_NOT_FOUND_MARKERS
        .iter()
        .any(|marker| output.contains(&marker.to_lowercase()))
}

/// 从 reg query 输出中取出 `key` 的值
///
/// 值所在行形如 `    NAME    REG_SZ    VALUE`，变量名不区分大小写。
pub(crate) fn parse_reg_query(output: &str, key: &str) -> String {
    for line in output.lines() {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let mut columns = line.splitn(3, REG_COLUMN_SEPARATOR);

        let Some(name) = columns.next() else {
            continue;
        };
        if !name.eq_ignore_ascii_case(key) {
            continue;
        }
        let Some(kind) = columns.next() else {
            continue;
        };
        if !kind.trim_start().starts_with("REG_") {
            continue;
        }
        return columns.next().unwrap_or_default().to_string();
    }
    String::new()
}

/// 在当前 cmd 会话中手动执行的命令
pub(crate) fn shell_command(key: &str, value: &str) -> String {
    format!("set \"{}={}\"", key, value)
}
