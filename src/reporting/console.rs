//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the end-of-run summary to the console: the analyzed
//! datasets with their catalog status and the completed processing steps,
//! using color coding to highlight the outcome.
//!
//! 此模块在控制台打印运行结束摘要：已分析的数据集及其编目状态和已完成的
//! 处理步骤，使用颜色编码突出显示结果。

use colored::*;

use crate::core::models::Report;
use crate::infra::t;

/// Prints a formatted summary of the run to the console.
///
/// # Output Format / 输出格式
/// ```text
/// --- Workflow Summary ---
/// Datasets analyzed: 2
///   - USER.TEST.DATA                           | cataloged
///   - USER.TEST.MISSING                        | not found
/// Steps completed: 3
///   - test_validation
///   - test_performance_check
///   - common_processing
/// ```
pub fn print_summary(report: &Report) {
    println!("\n{}", t!("summary.banner").bold());

    println!(
        "{}",
        t!("summary.datasets_header", count = report.summary.total_datasets)
    );
    for record in &report.datasets_analysis {
        let status = if record.exists {
            t!("summary.status_cataloged").green()
        } else {
            t!("summary.status_not_found").red()
        };
        println!("  - {:<40} | {}", record.name, status);
    }

    println!(
        "{}",
        t!("summary.steps_header", count = report.summary.steps_completed)
    );
    for step in &report.processing_result.steps_completed {
        println!("  - {}", step);
    }
}
