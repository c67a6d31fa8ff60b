//! # Logging Module / 日志模块
//!
//! Explicitly constructed logging for a single run: a `tracing` subscriber
//! writing to a timestamped file in the log directory. The handle is created
//! at process start; there is no process-global named logger. When the log
//! file cannot be created, the caller logs the problem to the console and the
//! run continues without file logging.
//!
//! 针对单次运行显式构造的日志：一个 `tracing` 订阅者，写入日志目录中带时间戳
//! 的文件。该句柄在进程启动时创建。当日志文件无法创建时，调用方在控制台记录
//! 问题，运行在没有文件日志的情况下继续。

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::infra::fs;

/// Handle to the logging destination of the current run.
/// 当前运行日志目标的句柄。
#[derive(Debug)]
pub struct LogHandle {
    /// Path of the log file receiving this run's events.
    pub file: PathBuf,
}

/// Initializes file logging for a run.
///
/// Creates `<log-dir>/workflow_processor_<timestamp>.log` and installs a
/// `tracing` subscriber writing to it. The filter honors `RUST_LOG` and
/// defaults to `info`. Repeated initialization (as happens across tests in one
/// process) keeps the first subscriber and is not an error.
pub fn init(log_dir: &Path, timestamp: &str) -> Result<LogHandle> {
    fs::ensure_directory(log_dir)?;
    let file_path = log_dir.join(format!("workflow_processor_{timestamp}.log"));
    let file = File::create(&file_path)
        .with_context(|| format!("failed to create log file: {}", file_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .try_init();

    tracing::info!(log_file = %file_path.display(), "logging initialized");
    Ok(LogHandle { file: file_path })
}
