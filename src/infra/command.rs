//! # Process Capture Module / 进程捕获模块
//!
//! Low-level process spawning with separate stdout/stderr capture. The two
//! streams are kept apart because the execution result records them
//! individually.
//!
//! 低级进程派生，分别捕获 stdout 和 stderr。
//! 两个流保持分离，因为执行结果会分别记录它们。

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::task::JoinHandle;

/// Spawns a command and captures its stdout and stderr into separate strings.
/// The streams are read line by line in concurrent tasks so neither pipe can
/// fill up and stall the child.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The captured stdout as a `String`.
/// - The captured stderr as a `String`.
///
/// 派生一个命令，将其 stdout 和 stderr 捕获到单独的字符串中。
/// 两个流在并发任务中逐行读取，因此任一管道都不会填满并阻塞子进程。
///
/// # Returns
/// 一个元组，包含：
/// - 进程的 `ExitStatus`（包装在 `io::Result` 中）。
/// - 捕获的 stdout，为一个 `String`。
/// - 捕获的 stderr，为一个 `String`。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<std::process::ExitStatus>, String, String) {
    let mut child = match cmd
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            // If spawning fails, return the error with empty output.
            // 如果派生失败，返回错误和空输出。
            return (Err(e), String::new(), String::new());
        }
    };

    let stdout = match child.stdout.take() {
        Some(stdout) => stdout,
        None => {
            return (
                Err(std::io::Error::other("failed to capture stdout")),
                String::new(),
                String::new(),
            );
        }
    };
    let stderr = match child.stderr.take() {
        Some(stderr) => stderr,
        None => {
            return (
                Err(std::io::Error::other("failed to capture stderr")),
                String::new(),
                String::new(),
            );
        }
    };

    let stdout_handle = read_lines(stdout);
    let stderr_handle = read_lines(stderr);

    // Wait for the process to exit, then for both readers, so that all output
    // is captured before the status is reported.
    // 等待进程退出，然后等待两个读取器，以便在报告状态之前捕获所有输出。
    let status = child.wait().await;
    let stdout = join_capture(stdout_handle).await;
    let stderr = join_capture(stderr_handle).await;

    (status, stdout, stderr)
}

/// Spawns a task that drains one output stream line by line.
fn read_lines<R>(stream: R) -> JoinHandle<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut captured = String::new();
        let mut lines = BufReader::new(stream).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            captured.push_str(&line);
            captured.push('\n');
        }
        captured
    })
}

async fn join_capture(handle: JoinHandle<String>) -> String {
    match handle.await {
        Ok(captured) => captured,
        Err(e) => {
            tracing::warn!(error = %e, "failed to join output reader task");
            String::new()
        }
    }
}
