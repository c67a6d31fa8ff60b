//! # Configuration Module / 配置模块
//!
//! Loads the per-run workflow configuration and manages the `key=value`
//! `.conf` files under `<work-dir>/config/`. A missing or unreadable
//! configuration file is never fatal: the run continues with the built-in
//! defaults and the failure is logged.
//!
//! 加载每次运行的工作流配置，并管理 `<work-dir>/config/` 下的 `key=value`
//! `.conf` 文件。配置文件缺失或不可读不会导致运行失败：
//! 运行会使用内置默认值继续，并记录失败原因。

use anyhow::{Context, Result};
use chrono::Local;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::models::Environment;
use crate::infra::fs;

/// Name of the directory holding configuration files inside the work directory.
pub const CONFIG_DIR: &str = "config";
/// Optional environment configuration, `key=value` per line.
pub const ENVIRONMENT_CONF: &str = "environment.conf";
/// Run status file updated at the end of each run.
pub const STATUS_CONF: &str = "workflow_status.conf";

/// Default workflow version when the configuration does not override it.
pub const DEFAULT_VERSION: &str = "1.0.0";
/// Default high-level qualifier used for catalog listings.
pub const DEFAULT_HLQ: &str = "USER";

/// The merged configuration of one processing run.
///
/// 一次处理运行的合并配置。
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Target environment, taken from the CLI / 目标环境，来自 CLI
    pub environment: Environment,
    /// ISO-8601 timestamp recorded at load time / 加载时记录的 ISO-8601 时间戳
    pub processing_date: String,
    /// Workflow version, overridable via the `version` key
    /// 工作流版本，可通过 `version` 键覆盖
    pub version: String,
    /// Raw key/value pairs from `environment.conf`
    /// 来自 `environment.conf` 的原始键值对
    pub values: BTreeMap<String, String>,
}

impl WorkflowConfig {
    /// Loads the configuration for a run rooted at `work_dir`.
    ///
    /// Reads `<work-dir>/config/environment.conf` when present. A read or
    /// parse problem is logged and the defaults are used instead.
    pub fn load(work_dir: &Path, environment: Environment) -> Self {
        let mut config = Self {
            environment,
            processing_date: Local::now().to_rfc3339(),
            version: DEFAULT_VERSION.to_string(),
            values: BTreeMap::new(),
        };

        let conf_path = work_dir.join(CONFIG_DIR).join(ENVIRONMENT_CONF);
        if conf_path.exists() {
            match load_conf_file(&conf_path) {
                Ok(values) => {
                    tracing::info!(path = %conf_path.display(), "configuration loaded");
                    config.values = values;
                }
                Err(e) => {
                    tracing::warn!(path = %conf_path.display(), error = %e, "error loading configuration");
                }
            }
        }

        if let Some(version) = config.values.get("version") {
            config.version = version.clone();
        }
        config
    }

    /// Returns the configured value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The high-level qualifier used to group datasets in the catalog.
    pub fn hlq(&self) -> &str {
        self.get("HLQ").unwrap_or(DEFAULT_HLQ)
    }

    /// The configured TSO interpreter command line, if overridden.
    pub fn tso_command(&self) -> Option<&str> {
        self.get("TSO_COMMAND")
    }
}

/// Parses `key=value` configuration content.
///
/// Lines without `=` and lines whose first non-blank character is `#` are
/// ignored; keys and values are trimmed. Later occurrences of a key win.
pub fn parse_conf(content: &str) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    values
}

/// Renders configuration values back into `key=value` lines, preceded by a
/// generation timestamp comment.
pub fn format_conf(values: &BTreeMap<String, String>) -> String {
    let mut out = format!(
        "# Configuration file generated on {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    for (key, value) in values {
        out.push_str(&format!("{}={}\n", key, value));
    }
    out
}

/// Reads and parses a `.conf` file.
pub fn load_conf_file(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_string(path)
        .with_context(|| format!("failed to read configuration: {}", path.display()))?;
    Ok(parse_conf(&content))
}

/// Writes configuration values to a `.conf` file, creating parent directories
/// as needed.
pub fn save_conf_file(path: &Path, values: &BTreeMap<String, String>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::ensure_directory(parent)?;
    }
    fs::write_string(path, &format_conf(values))
}

/// Merges `updates` into `workflow_status.conf` and stamps `LAST_UPDATE`.
/// Returns the path of the status file that was written.
///
/// 将 `updates` 合并到 `workflow_status.conf` 并写入 `LAST_UPDATE` 时间戳。
/// 返回写入的状态文件路径。
pub fn update_status(
    work_dir: &Path,
    updates: BTreeMap<String, String>,
) -> Result<PathBuf> {
    let status_path = work_dir.join(CONFIG_DIR).join(STATUS_CONF);
    let mut current = if status_path.exists() {
        load_conf_file(&status_path).unwrap_or_default()
    } else {
        BTreeMap::new()
    };

    current.extend(updates);
    current.insert(
        "LAST_UPDATE".to_string(),
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    );

    save_conf_file(&status_path, &current)?;
    Ok(status_path)
}
