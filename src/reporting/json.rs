//! # JSON Report Module / JSON 报告模块
//!
//! Serializes the report aggregate to `processing_report_<timestamp>.json`.
//! For identical inputs and timestamp the document is byte-identical; only the
//! embedded timestamp fields vary between runs.
//!
//! 将报告聚合序列化为 `processing_report_<timestamp>.json`。
//! 对于相同的输入和时间戳，文档逐字节相同；运行之间只有嵌入的时间戳字段不同。

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::core::models::Report;
use crate::infra::fs;

/// Writes the pretty-printed JSON report and returns its path.
pub fn write_json_report(report: &Report, output_dir: &Path, timestamp: &str) -> Result<PathBuf> {
    let path = output_dir.join(format!("processing_report_{timestamp}.json"));
    let body = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    fs::write_string(&path, &body)?;
    tracing::info!(path = %path.display(), "JSON report created");
    Ok(path)
}
