//! # Workflow Processor Library / Workflow Processor 库
//!
//! This library provides the core functionality for the Workflow Processor tool,
//! a configuration-driven data processor for z/OS dataset workflows.
//!
//! 此库为 Workflow Processor 工具提供核心功能，
//! 这是一个配置驱动的 z/OS 数据集工作流数据处理器。
//!
//! ## Modules / 模块
//!
//! - `core` - Core data models, catalog access and environment processing
//! - `infra` - Infrastructure services like command execution, file system and logging
//! - `reporting` - Processing result reporting in JSON, text and console formats
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 核心数据模型、编目访问和环境处理
//! - `infra` - 基础设施服务，如命令执行、文件系统和日志
//! - `reporting` - JSON、文本和控制台格式的处理结果报告
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use core::config;
pub use core::execution;
pub use core::models;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's console messages. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
