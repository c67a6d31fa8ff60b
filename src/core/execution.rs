//! # Command Execution Module / 命令执行模块
//!
//! The command runner at the heart of the pipeline. It launches external
//! commands with a bounded timeout, captures stdout/stderr and converts every
//! process failure — non-zero exit, timeout, launch error — into a uniform
//! [`ExecutionResult`]. Nothing in this module propagates a process failure as
//! an error, and nothing retries: one command, one attempt, one record.
//!
//! 管道核心的命令运行器。它以有界超时启动外部命令，捕获 stdout/stderr，
//! 并将每种进程失败（非零退出、超时、启动错误）转换为统一的 [`ExecutionResult`]。
//! 此模块不会将进程失败作为错误传播，也不会重试：一条命令，一次尝试，一条记录。

use std::time::Duration;

use crate::core::config::WorkflowConfig;
use crate::core::models::ExecutionResult;
use crate::infra::command::spawn_and_capture;

/// Default timeout applied to external command invocations.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs a full command line with the given timeout.
///
/// The command line is expanded (`~`, environment variables) and split into
/// program and arguments with shell-like quoting rules. An unparsable command
/// line is reported as a launch failure through the result record.
///
/// 以给定的超时运行完整的命令行。命令行会被展开（`~`、环境变量）并按类 shell
/// 的引用规则拆分为程序和参数。无法解析的命令行通过结果记录报告为启动失败。
pub async fn run(command_line: &str, timeout: Duration) -> ExecutionResult {
    let expanded = match shellexpand::full(command_line) {
        Ok(expanded) => expanded.to_string(),
        Err(e) => {
            tracing::warn!(command = command_line, error = %e, "failed to expand command");
            return ExecutionResult::launch_failure(command_line, e);
        }
    };

    let parts = match shlex::split(&expanded) {
        Some(parts) if !parts.is_empty() => parts,
        _ => {
            tracing::warn!(command = command_line, "failed to parse command");
            return ExecutionResult::launch_failure(
                command_line,
                format!("failed to parse command: {expanded}"),
            );
        }
    };

    run_program(&parts[0], &parts[1..], timeout).await
}

/// Runs a program with explicit arguments, bypassing shell-style splitting.
/// This is the path used for catalog commands, whose text may contain
/// characters (quotes, `$` in dataset names) that must reach the interpreter
/// verbatim.
///
/// 以显式参数运行程序，绕过 shell 风格的拆分。
/// 这是编目命令使用的路径，其文本可能包含必须原样传给解释器的字符。
pub async fn run_program(program: &str, args: &[String], timeout: Duration) -> ExecutionResult {
    let command_line = if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    };
    tracing::info!(command = %command_line, timeout_secs = timeout.as_secs(), "executing command");

    let mut cmd = tokio::process::Command::new(program);
    cmd.args(args).kill_on_drop(true);

    // kill_on_drop reaps the child when the timeout cancels the capture future.
    let result = match tokio::time::timeout(timeout, spawn_and_capture(cmd)).await {
        Ok((status_res, stdout, stderr)) => match status_res {
            Ok(status) => ExecutionResult::completed(command_line.as_str(), status, stdout, stderr),
            Err(e) => ExecutionResult::launch_failure(command_line.as_str(), e),
        },
        Err(_) => ExecutionResult::timed_out(command_line.as_str(), timeout),
    };

    if result.succeeded {
        tracing::info!(command = %result.command, "command executed successfully");
    } else {
        tracing::warn!(
            command = %result.command,
            exit_code = ?result.exit_code,
            stderr = %result.stderr,
            "command failed"
        );
    }
    result
}

/// The collaborator interface through which the catalog issues commands.
/// Test doubles implement it with canned output; production code uses
/// [`TsoRunner`].
///
/// 编目用来发出命令的协作者接口。
/// 测试替身以固定输出实现它；生产代码使用 [`TsoRunner`]。
#[allow(async_fn_in_trait)]
pub trait CommandExecutor {
    async fn execute(&self, command: &str) -> ExecutionResult;
}

/// Executes TSO/MVS commands through the external command interpreter.
///
/// The interpreter defaults to `tso` and can be overridden with the
/// `TSO_COMMAND` configuration key (e.g. `zowe tso issue`); the command text is
/// always passed as a single trailing argument.
///
/// 通过外部命令解释器执行 TSO/MVS 命令。
/// 解释器默认为 `tso`，可通过 `TSO_COMMAND` 配置键覆盖；
/// 命令文本始终作为单个尾随参数传递。
#[derive(Debug, Clone)]
pub struct TsoRunner {
    program: String,
    leading_args: Vec<String>,
    pub timeout: Duration,
}

impl TsoRunner {
    pub fn new() -> Self {
        Self {
            program: "tso".to_string(),
            leading_args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Builds a runner from the workflow configuration. An interpreter command
    /// line that fails to expand or parse falls back to the plain `tso`
    /// default, with a logged warning.
    pub fn from_config(config: &WorkflowConfig) -> Self {
        let Some(configured) = config.tso_command() else {
            return Self::new();
        };

        let parsed = shellexpand::full(configured)
            .ok()
            .and_then(|expanded| shlex::split(&expanded))
            .filter(|parts| !parts.is_empty());

        match parsed {
            Some(mut parts) => {
                let program = parts.remove(0);
                Self {
                    program,
                    leading_args: parts,
                    timeout: DEFAULT_TIMEOUT,
                }
            }
            None => {
                tracing::warn!(
                    configured,
                    "invalid TSO_COMMAND configuration, falling back to 'tso'"
                );
                Self::new()
            }
        }
    }
}

impl Default for TsoRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for TsoRunner {
    async fn execute(&self, command: &str) -> ExecutionResult {
        let mut args = self.leading_args.clone();
        args.push(command.to_string());
        run_program(&self.program, &args, self.timeout).await
    }
}
