//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the Workflow Processor,
//! including data models, configuration, command execution, catalog access
//! and environment-specific processing.
//!
//! 此模块包含 Workflow Processor 的核心功能，
//! 包括数据模型、配置、命令执行、编目访问和环境特定处理。

pub mod catalog;
pub mod config;
pub mod environment;
pub mod execution;
pub mod models;
pub mod parser;

// Re-exports
pub use config::WorkflowConfig;
pub use execution::CommandExecutor;
pub use models::{DatasetRecord, Environment, ExecutionResult, ProcessingResult, Report};
