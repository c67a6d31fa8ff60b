//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the workflow
//! processor. It includes models for command execution results, dataset records,
//! environment-specific processing results and the final report document.
//!
//! 此模块定义了整个工作流处理器中使用的核心数据结构。
//! 它包括命令执行结果、数据集记录、环境特定处理结果和最终报告文档的模型。

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::core::config::WorkflowConfig;

/// Marker written to `stderr` of an [`ExecutionResult`] when the external
/// process exceeded its timeout. The original stderr is discarded in that case.
///
/// 当外部进程超过其超时时间时写入 [`ExecutionResult`] 的 `stderr` 的标记。
/// 在这种情况下，原始 stderr 会被丢弃。
pub const TIMEOUT_MARKER: &str = "command timed out";

/// The target environment of a processing run.
/// This is a closed set: unknown values are rejected at argument validation
/// and never reach the environment processor.
///
/// 处理运行的目标环境。
/// 这是一个封闭集合：未知值在参数校验阶段被拒绝，不会到达环境处理器。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Environment {
    Dev,
    Test,
    Prod,
}

impl Environment {
    /// All supported environment names, in the order they are documented.
    pub const NAMES: [&'static str; 3] = ["DEV", "TEST", "PROD"];

    /// Returns the canonical upper-case name used in reports and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "DEV",
            Environment::Test => "TEST",
            Environment::Prod => "PROD",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEV" => Ok(Environment::Dev),
            "TEST" => Ok(Environment::Test),
            "PROD" => Ok(Environment::Prod),
            other => Err(anyhow!("unsupported environment: {other}")),
        }
    }
}

/// The uniform record produced by one external command invocation.
/// Every process failure mode (non-zero exit, timeout, launch failure) is
/// expressed through this record rather than an error; it is immutable after
/// creation.
///
/// 一次外部命令调用产生的统一记录。
/// 每种进程失败模式（非零退出、超时、启动失败）都通过此记录而不是错误来表达；
/// 创建后不可变。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// The full command line that was invoked / 被调用的完整命令行
    pub command: String,
    /// The process exit code, if the process ran to completion
    /// 进程退出码（如果进程运行完成）
    pub exit_code: Option<i32>,
    /// Captured standard output / 捕获的标准输出
    pub stdout: String,
    /// Captured standard error, or a failure/timeout marker
    /// 捕获的标准错误，或失败/超时标记
    pub stderr: String,
    /// `true` only for a zero exit code / 仅在退出码为零时为 `true`
    pub succeeded: bool,
}

impl ExecutionResult {
    /// Builds a record for a process that ran to completion.
    pub fn completed(
        command: impl Into<String>,
        status: std::process::ExitStatus,
        stdout: String,
        stderr: String,
    ) -> Self {
        Self {
            command: command.into(),
            exit_code: status.code(),
            stdout,
            stderr,
            succeeded: status.success(),
        }
    }

    /// Builds a record for a process that could not be launched at all
    /// (missing executable, unparsable command line).
    pub fn launch_failure(command: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            command: command.into(),
            exit_code: None,
            stdout: String::new(),
            stderr: error.to_string(),
            succeeded: false,
        }
    }

    /// Builds a record for a process that exceeded its timeout.
    /// The timeout marker takes the place of stderr.
    pub fn timed_out(command: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            exit_code: None,
            stdout: String::new(),
            stderr: format!("{} after {}s", TIMEOUT_MARKER, timeout.as_secs()),
            succeeded: false,
        }
    }

    /// Checks whether this result represents a timed-out invocation.
    pub fn is_timeout(&self) -> bool {
        !self.succeeded && self.stderr.starts_with(TIMEOUT_MARKER)
    }

    /// Returns the captured stdout for a successful invocation, `None` otherwise.
    /// Failed invocations degrade to "no output" for the callers.
    pub fn output(&self) -> Option<&str> {
        if self.succeeded { Some(&self.stdout) } else { None }
    }
}

/// A named catalog entity (dataset) with the attributes extracted from
/// `LISTCAT` output. Created once, populated once, then written to the report.
///
/// 一个命名的编目实体（数据集），带有从 `LISTCAT` 输出中提取的属性。
/// 创建一次，填充一次，然后写入报告。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Fully qualified dataset name / 完全限定的数据集名称
    pub name: String,
    /// Attributes parsed from the catalog listing (type, RECFM, LRECL, ...)
    /// 从编目列表解析的属性（type、RECFM、LRECL 等）
    pub attributes: BTreeMap<String, String>,
    /// Whether the catalog reported the entry / 编目是否报告了该条目
    pub exists: bool,
}

impl DatasetRecord {
    /// Builds a record for a dataset the catalog did not report.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
            exists: false,
        }
    }
}

/// The outcome of environment-specific processing: the ordered step names that
/// were applied plus the metadata each branch contributes.
///
/// 环境特定处理的结果：应用的有序步骤名称以及每个分支贡献的元数据。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// The environment the steps were selected for / 选择步骤所针对的环境
    pub environment: Environment,
    /// ISO-8601 timestamp of the processing / 处理的 ISO-8601 时间戳
    pub processing_time: String,
    /// Ordered sequence of completed step names / 已完成步骤名称的有序序列
    pub steps_completed: Vec<String>,
    /// Overall success of the processing stage / 处理阶段的整体成功状态
    pub success: bool,
    /// Branch-specific metadata / 分支特定的元数据
    pub results: serde_json::Map<String, serde_json::Value>,
}

/// Header block of the report document.
/// 报告文档的头部块。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowInfo {
    pub version: String,
    pub environment: Environment,
    pub processing_date: String,
    pub work_directory: String,
}

/// Aggregated counters shown at the end of the report document.
/// 报告文档末尾显示的汇总计数。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_datasets: usize,
    pub processing_success: bool,
    pub steps_completed: usize,
    pub environment: Environment,
}

/// The write-once aggregate serialized to the JSON and text report files.
/// 一次性写入的聚合结果，序列化为 JSON 和文本报告文件。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub workflow_info: WorkflowInfo,
    pub datasets_analysis: Vec<DatasetRecord>,
    pub processing_result: ProcessingResult,
    pub summary: ReportSummary,
}

impl Report {
    /// Assembles the report from the collected pipeline outputs.
    /// The summary counters are derived here so they can never drift from the
    /// underlying data.
    pub fn new(
        config: &WorkflowConfig,
        work_dir: &Path,
        datasets: Vec<DatasetRecord>,
        processing: ProcessingResult,
    ) -> Self {
        let summary = ReportSummary {
            total_datasets: datasets.len(),
            processing_success: processing.success,
            steps_completed: processing.steps_completed.len(),
            environment: processing.environment,
        };
        Self {
            workflow_info: WorkflowInfo {
                version: config.version.clone(),
                environment: config.environment,
                processing_date: config.processing_date.clone(),
                work_directory: work_dir.display().to_string(),
            },
            datasets_analysis: datasets,
            processing_result: processing,
            summary,
        }
    }
}
