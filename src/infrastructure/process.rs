//! 同步子进程执行器
//!
//! 标准输出与标准错误合并到同一个缓冲区，阻塞直到子进程退出，不设超时。
//! Windows 上的 reg/setx 等工具按本地代码页 (GBK) 输出，需转码为 UTF-8。

use crate::domain::models::Platform;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use thiserror::Error;

/// 子进程执行错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessError {
    #[error("无法启动 {program}: {reason}")]
    Spawn { program: String, reason: String },

    #[error("{program} 退出码 {code}: {output}")]
    NonZeroExit {
        program: String,
        code: i32,
        output: String,
    },
}

impl ProcessError {
    /// 子进程已输出的内容（启动失败时为空）
    #[must_use]
    pub fn output(&self) -> &str {
        match self {
            ProcessError::Spawn { .. } => "",
            ProcessError::NonZeroExit { output, .. } => output,
        }
    }
}

/// 子进程执行结果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub output: String,
}

/// 子进程执行接口
pub trait CommandRunner: Send + Sync {
    /// 执行命令并捕获输出
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, ProcessError>;

    /// 执行命令，并把 `input` 写入子进程标准输入
    fn run_with_input(
        &self,
        program: &str,
        args: &[String],
        input: &str,
    ) -> Result<ProcessOutput, ProcessError>;
}

/// 控制台输出编码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleEncoding {
    #[default]
    Utf8,
    Gbk,
}

impl ConsoleEncoding {
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Windows => ConsoleEncoding::Gbk,
            Platform::Linux | Platform::MacOs => ConsoleEncoding::Utf8,
        }
    }

    /// 控制台字节转为 UTF-8 文本
    #[must_use]
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            ConsoleEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            ConsoleEncoding::Gbk => {
                let (text, _, had_errors) = encoding_rs::GBK.decode(bytes);
                if had_errors {
                    log::warn!("子进程输出包含无法按 GBK 解码的字节");
                }
                text.into_owned()
            }
        }
    }

    /// UTF-8 文本转为控制台字节
    #[must_use]
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            ConsoleEncoding::Utf8 => text.as_bytes().to_vec(),
            ConsoleEncoding::Gbk => encoding_rs::GBK.encode(text).0.into_owned(),
        }
    }
}

/// 基于 `std::process::Command` 的执行器
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    encoding: ConsoleEncoding,
}

impl ProcessRunner {
    #[must_use]
    pub fn new(encoding: ConsoleEncoding) -> Self {
        Self { encoding }
    }

    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        Self::new(ConsoleEncoding::for_platform(platform))
    }

    fn collect(&self, program: &str, output: Output) -> Result<ProcessOutput, ProcessError> {
        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        let text = self.encoding.decode(&combined);

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            log::debug!("{} 退出码 {}", program, code);
            return Err(ProcessError::NonZeroExit {
                program: program.to_string(),
                code,
                output: text,
            });
        }

        Ok(ProcessOutput {
            exit_code: 0,
            output: text,
        })
    }
}

fn spawn_error(program: &str, err: std::io::Error) -> ProcessError {
    ProcessError::Spawn {
        program: program.to_string(),
        reason: err.to_string(),
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, ProcessError> {
        log::debug!("exec: {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_error(program, e))?;

        self.collect(program, output)
    }

    fn run_with_input(
        &self,
        program: &str,
        args: &[String],
        input: &str,
    ) -> Result<ProcessOutput, ProcessError> {
        log::debug!("exec: {} {} (stdin {} 字节)", program, args.join(" "), input.len());

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_error(program, e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(&self.encoding.encode(input))
                .map_err(|e| spawn_error(program, e))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| spawn_error(program, e))?;
        self.collect(program, output)
    }
}
