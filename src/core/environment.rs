//! # Environment Processor Module / 环境处理器模块
//!
//! A pure mapping from the target environment to a fixed, ordered sequence of
//! processing steps and branch metadata. Every branch ends with the shared
//! trailing step. Unknown environment values cannot reach this module: the
//! [`Environment`](crate::core::models::Environment) enum is closed and the CLI
//! validates its input.
//!
//! 从目标环境到固定有序处理步骤序列和分支元数据的纯映射。
//! 每个分支都以共享的尾步骤结束。未知环境值不可能到达此模块：
//! 环境枚举是封闭的，且 CLI 会校验其输入。

use chrono::Local;
use serde_json::{Map, Value, json};

use crate::core::config::WorkflowConfig;
use crate::core::models::{Environment, ProcessingResult};

/// Trailing step shared by every environment branch.
pub const COMMON_STEP: &str = "common_processing";

/// Applies the environment-specific step table and returns the accumulated
/// processing result.
///
/// 应用环境特定的步骤表并返回累积的处理结果。
pub fn process(config: &WorkflowConfig) -> ProcessingResult {
    let mut steps: Vec<String> = Vec::new();
    let mut results: Map<String, Value> = Map::new();

    match config.environment {
        Environment::Dev => {
            steps.push("dev_validation".to_string());
            steps.push("dev_debug_output".to_string());
            results.insert("dev_mode".to_string(), json!(true));
            results.insert("debug_level".to_string(), json!("high"));
        }
        Environment::Test => {
            steps.push("test_validation".to_string());
            steps.push("test_performance_check".to_string());
            results.insert("test_mode".to_string(), json!(true));
            results.insert("performance_baseline".to_string(), json!("100ms"));
        }
        Environment::Prod => {
            steps.push("prod_validation".to_string());
            steps.push("prod_audit_log".to_string());
            steps.push("prod_backup".to_string());
            results.insert("prod_mode".to_string(), json!(true));
            results.insert("audit_enabled".to_string(), json!(true));
            results.insert("backup_created".to_string(), json!(true));
        }
    }

    // Common processing for all environments
    steps.push(COMMON_STEP.to_string());
    results.insert("workflow_version".to_string(), json!(config.version));

    tracing::info!(
        environment = %config.environment,
        steps = steps.len(),
        "environment-specific processing completed"
    );

    ProcessingResult {
        environment: config.environment,
        processing_time: Local::now().to_rfc3339(),
        steps_completed: steps,
        success: true,
        results,
    }
}
