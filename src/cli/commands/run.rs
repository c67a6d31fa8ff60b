// src/cli/commands/run.rs

use anyhow::Result;
use chrono::Local;
use colored::*;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::{
    core::{
        catalog::DatasetCatalog,
        config::{self, WorkflowConfig},
        environment,
        execution::TsoRunner,
        models::{Environment, Report},
    },
    infra::{fs, logging, t},
    reporting,
};

/// Executes the full processing pipeline, strictly sequentially: directories,
/// logging, configuration, dataset listing and inspection, environment
/// processing, report generation, status update, summary.
///
/// Process failures and file I/O failures degrade to empty/default data; only
/// a processing-stage failure (or an unexpected error) makes the run fail.
///
/// 严格顺序地执行完整的处理管道。进程失败和文件 I/O 失败降级为空/默认数据；
/// 只有处理阶段失败（或意外错误）才会使运行失败。
pub async fn execute(
    work_dir: PathBuf,
    environment: Environment,
    log_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let log_dir = log_dir.unwrap_or_else(|| work_dir.join("logs"));
    let output_dir = output_dir.unwrap_or_else(|| work_dir.join("output"));

    for dir in [&work_dir, &log_dir, &output_dir] {
        if let Err(e) = fs::ensure_directory(dir) {
            eprintln!(
                "{}",
                t!("run.dir_create_failed", path = dir.display(), error = e).yellow()
            );
        }
    }

    // File logging is best-effort: without it the run still proceeds.
    match logging::init(&log_dir, &timestamp) {
        Ok(handle) => println!("{}", t!("run.log_file", path = handle.file.display())),
        Err(e) => eprintln!("{}", t!("run.log_init_failed", error = e).yellow()),
    }

    let config = WorkflowConfig::load(&work_dir, environment);

    println!("{}", t!("run.banner").bold());
    println!("{}", t!("run.work_dir", path = work_dir.display()));
    println!("{}", t!("run.environment", env = environment).cyan());
    println!("{}", t!("run.log_dir", path = log_dir.display()));
    println!("{}", t!("run.output_dir", path = output_dir.display()));
    tracing::info!(
        work_dir = %work_dir.display(),
        environment = %environment,
        "starting workflow data processing"
    );

    // Step 1: List and inspect datasets
    println!("{}", t!("run.step_datasets").blue());
    println!("{}", t!("run.using_hlq", hlq = config.hlq()));
    let catalog = DatasetCatalog::new(TsoRunner::from_config(&config));
    let datasets = catalog.list_and_inspect(config.hlq()).await;
    println!("{}", t!("run.datasets_found", count = datasets.len()));

    // Step 2: Environment-specific processing
    println!("{}", t!("run.step_environment").blue());
    println!("{}", t!("run.processing_env", env = environment));
    let processing = environment::process(&config);

    // Step 3: Generate reports
    println!("{}", t!("run.step_reports").blue());
    let report = Report::new(&config, &work_dir, datasets, processing);
    reporting::generate_reports(&report, &config, &output_dir, &timestamp);

    // Step 4: Summary and status
    println!("{}", t!("run.step_summary").blue());
    reporting::print_summary(&report);

    let success = report.processing_result.success;
    let mut status = BTreeMap::new();
    status.insert(
        "STATUS".to_string(),
        if success { "SUCCESS" } else { "FAILED" }.to_string(),
    );
    status.insert("ENVIRONMENT".to_string(), environment.to_string());
    status.insert("LAST_REPORT".to_string(), timestamp.clone());
    if let Err(e) = config::update_status(&work_dir, status) {
        eprintln!("{}", t!("run.status_update_failed", error = e).yellow());
        tracing::warn!(error = %e, "failed to update workflow status");
    }

    if success {
        println!("\n{}", t!("run.success").green().bold());
        tracing::info!("workflow data processing completed successfully");
        Ok(())
    } else {
        println!("\n{}", t!("run.failed").red().bold());
        tracing::error!("workflow data processing failed");
        anyhow::bail!("{}", t!("run.failed"));
    }
}
