//! 测试工具模块
//!
//! 提供可编排的子进程执行器，避免测试真正调用 reg/setx/clip

use crate::infrastructure::process::{CommandRunner, ProcessError, ProcessOutput};
use std::collections::VecDeque;
use std::sync::Mutex;

/// 一次被记录的调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub input: Option<String>,
}

/// 按顺序回放预设结果的执行器
#[derive(Debug, Default)]
pub struct FakeRunner {
    replies: Mutex<VecDeque<(String, Result<ProcessOutput, ProcessError>)>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预设一次成功执行
    pub fn push_ok(&self, program: &str, output: &str) {
        self.push(
            program,
            Ok(ProcessOutput {
                exit_code: 0,
                output: output.to_string(),
            }),
        );
    }

    /// 预设一次非零退出
    pub fn push_err(&self, program: &str, code: i32, output: &str) {
        self.push(
            program,
            Err(ProcessError::NonZeroExit {
                program: program.to_string(),
                code,
                output: output.to_string(),
            }),
        );
    }

    /// 预设一次启动失败
    pub fn push_spawn_err(&self, program: &str) {
        self.push(
            program,
            Err(ProcessError::Spawn {
                program: program.to_string(),
                reason: "program not found".to_string(),
            }),
        );
    }

    /// 已发生的调用
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, program: &str, reply: Result<ProcessOutput, ProcessError>) {
        self.replies
            .lock()
            .unwrap()
            .push_back((program.to_string(), reply));
    }

    fn reply(&self, program: &str, args: &[String], input: Option<&str>) -> Result<ProcessOutput, ProcessError> {
        self.calls.lock().unwrap().push(RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
            input: input.map(str::to_string),
        });

        let (expected, reply) = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("未预设 {} 的执行结果", program));
        assert_eq!(expected, program, "调用顺序与预设不符");
        reply
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, ProcessError> {
        self.reply(program, args, None)
    }

    fn run_with_input(
        &self,
        program: &str,
        args: &[String],
        input: &str,
    ) -> Result<ProcessOutput, ProcessError> {
        self.reply(program, args, Some(input))
    }
}

/// 模拟 `reg query <hive> /v <name>` 的输出
pub fn reg_query_output(name: &str, kind: &str, value: &str) -> String {
    format!(
        "\r\nHKEY_CURRENT_USER\\Environment\r\n    {}    {}    {}\r\n\r\n",
        name, kind, value
    )
}

/// 模拟中文系统上值不存在时 reg 的输出
pub fn not_found_output() -> String {
    "错误: 系统找不到指定的注册表项或值。\r\n".to_string()
}
