//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations, such as creating
//! run directories and reading/writing report and configuration files.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如创建运行目录以及读写报告和配置文件。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Ensures that a directory exists, creating it and its parents if necessary.
///
/// # Arguments
/// * `path` - Directory path to create
pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

/// Reads a file to a string with path context on failure.
pub fn read_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Writes a string to a file with path context on failure.
pub fn write_string(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write file: {}", path.display()))
}
