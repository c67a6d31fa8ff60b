//! # Text Report Module / 文本报告模块
//!
//! Renders the report aggregate as a fixed-layout plain-text summary,
//! `processing_summary_<timestamp>.txt`. The layout emits one line per dataset
//! and one line per configuration entry, so the line count is stable for a
//! given input shape.
//!
//! 将报告聚合渲染为固定布局的纯文本摘要 `processing_summary_<timestamp>.txt`。
//! 布局中每个数据集一行、每个配置条目一行，因此对于给定的输入形状，行数是稳定的。

use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};

use crate::core::config::WorkflowConfig;
use crate::core::models::{DatasetRecord, Report};
use crate::infra::fs;

const BANNER: &str = "============================================================";

/// Writes the plain-text summary report and returns its path.
pub fn write_text_report(
    report: &Report,
    config: &WorkflowConfig,
    output_dir: &Path,
    timestamp: &str,
) -> Result<PathBuf> {
    let path = output_dir.join(format!("processing_summary_{timestamp}.txt"));
    fs::write_string(&path, &render(report, config))?;
    tracing::info!(path = %path.display(), "text report created");
    Ok(path)
}

/// Renders the full text document.
pub fn render(report: &Report, config: &WorkflowConfig) -> String {
    let mut out = String::new();

    out.push_str(BANNER);
    out.push_str("\n          WORKFLOW PROCESSING REPORT\n");
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&format!(
        "Date: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("Environment: {}\n", report.workflow_info.environment));
    out.push_str(&format!(
        "Work Directory: {}\n",
        report.workflow_info.work_directory
    ));
    out.push_str(&format!(
        "Workflow Version: {}\n\n",
        report.workflow_info.version
    ));

    out.push_str("DATASET ANALYSIS SUMMARY:\n");
    out.push_str("------------------------------\n");
    out.push_str(&format!(
        "Total Datasets Analyzed: {}\n",
        report.summary.total_datasets
    ));
    for record in &report.datasets_analysis {
        out.push_str(&dataset_line(record));
    }
    out.push('\n');

    out.push_str("PROCESSING RESULTS:\n");
    out.push_str("--------------------\n");
    out.push_str(&format!(
        "Environment: {}\n",
        report.processing_result.environment
    ));
    out.push_str(&format!("Success: {}\n", report.processing_result.success));
    out.push_str(&format!(
        "Steps Completed: {}\n",
        report.processing_result.steps_completed.len()
    ));
    out.push_str("Steps:\n");
    for step in &report.processing_result.steps_completed {
        out.push_str(&format!("  - {}\n", step));
    }
    out.push('\n');

    out.push_str("CONFIGURATION:\n");
    out.push_str("---------------\n");
    out.push_str(&format!("  environment: {}\n", config.environment));
    out.push_str(&format!("  processing_date: {}\n", config.processing_date));
    out.push_str(&format!("  version: {}\n", config.version));
    for (key, value) in &config.values {
        out.push_str(&format!("  {}: {}\n", key, value));
    }
    out.push('\n');

    out.push_str(BANNER);
    out.push_str("\n              END OF REPORT\n");
    out.push_str(BANNER);
    out.push('\n');

    out
}

// One line per dataset regardless of how much the catalog reported.
fn dataset_line(record: &DatasetRecord) -> String {
    if !record.exists {
        return format!("  {}: not cataloged\n", record.name);
    }
    let attr = |key: &str| record.attributes.get(key).map(String::as_str).unwrap_or("-");
    format!(
        "  {}: {} RECFM={} LRECL={}\n",
        record.name,
        attr("type"),
        attr("record_format"),
        attr("record_length")
    )
}
