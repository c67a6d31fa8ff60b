//! # Reporting Module / 报告模块
//!
//! This module handles the generation and display of processing reports in
//! multiple formats: a JSON document, a plain-text summary and a colored
//! console table. A write failure for either file is logged and does not
//! abort the other; overall run success never depends on report writes.
//!
//! 此模块处理多种格式的处理报告的生成和显示：JSON 文档、纯文本摘要和彩色
//! 控制台表格。任一文件的写入失败都会被记录，且不会中止另一个文件的写入；
//! 整体运行成功与否从不取决于报告写入。

pub mod console;
pub mod json;
pub mod text;

use colored::*;
use std::path::{Path, PathBuf};

use crate::core::config::WorkflowConfig;
use crate::core::models::Report;
use crate::infra::t;

// Re-export common reporting functions
pub use console::print_summary;
pub use json::write_json_report;
pub use text::write_text_report;

/// Paths of the report files that were actually written.
/// 实际写入的报告文件的路径。
#[derive(Debug, Default)]
pub struct ReportPaths {
    pub json: Option<PathBuf>,
    pub text: Option<PathBuf>,
}

/// Writes the JSON and text reports for a run.
///
/// Each file is attempted independently; a failure is reported on the console
/// and in the log, and the sibling file is still written.
pub fn generate_reports(
    report: &Report,
    config: &WorkflowConfig,
    output_dir: &Path,
    timestamp: &str,
) -> ReportPaths {
    let mut paths = ReportPaths::default();

    match write_json_report(report, output_dir, timestamp) {
        Ok(path) => {
            println!("{}", t!("report.json_created", path = path.display()));
            paths.json = Some(path);
        }
        Err(e) => {
            eprintln!("{}", t!("report.json_failed", error = e).red());
            tracing::error!(error = %e, "error creating JSON report");
        }
    }

    match write_text_report(report, config, output_dir, timestamp) {
        Ok(path) => {
            println!("{}", t!("report.text_created", path = path.display()));
            paths.text = Some(path);
        }
        Err(e) => {
            eprintln!("{}", t!("report.text_failed", error = e).red());
            tracing::error!(error = %e, "error creating text report");
        }
    }

    paths
}
