//! # Dataset Catalog Module / 数据集编目模块
//!
//! Lists and inspects catalog datasets by issuing `LISTCAT` commands through a
//! [`CommandExecutor`]. Inspection returns the attributes actually reported by
//! the catalog; a failed command degrades to empty data and the run continues.
//!
//! 通过 [`CommandExecutor`] 发出 `LISTCAT` 命令来列出和检查编目数据集。
//! 检查返回编目实际报告的属性；命令失败时降级为空数据，运行继续。

use crate::core::execution::CommandExecutor;
use crate::core::models::DatasetRecord;
use crate::core::parser;

/// Catalog access over an arbitrary command executor.
/// 基于任意命令执行器的编目访问。
#[derive(Debug)]
pub struct DatasetCatalog<E> {
    executor: E,
}

impl<E: CommandExecutor> DatasetCatalog<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Read access to the underlying executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Lists the non-VSAM datasets grouped under `hlq`, in the order the
    /// catalog reported them (deduplicated, first-seen order).
    ///
    /// A failed listing command yields an empty list, never an error.
    pub async fn list_level(&self, hlq: &str) -> Vec<String> {
        let command = format!("LISTCAT LEVEL('{hlq}') ALL");
        let result = self.executor.execute(&command).await;
        match result.output() {
            Some(output) => {
                let names = parser::entry_names(output, hlq);
                tracing::info!(hlq, count = names.len(), "datasets listed");
                names
            }
            None => {
                tracing::warn!(hlq, "listing command produced no output");
                Vec::new()
            }
        }
    }

    /// Lists every dataset name matching `pattern`, sorted alphabetically.
    /// The ordering intentionally differs from [`Self::list_level`]; see
    /// [`parser::level_names`].
    pub async fn list_matching(&self, pattern: &str) -> Vec<String> {
        let command = format!("LISTCAT LEVEL('{pattern}') ALL");
        let result = self.executor.execute(&command).await;
        match result.output() {
            Some(output) => parser::level_names(output),
            None => Vec::new(),
        }
    }

    /// Checks whether the catalog knows `name`.
    pub async fn exists(&self, name: &str) -> bool {
        let command = format!("LISTCAT ENT('{name}')");
        let result = self.executor.execute(&command).await;
        result
            .output()
            .is_some_and(|output| output.contains(name))
    }

    /// Inspects one dataset, returning the attributes the catalog reports.
    /// A dataset the catalog does not echo back is recorded as missing.
    ///
    /// 检查一个数据集，返回编目报告的属性。
    /// 编目未回显的数据集记录为缺失。
    pub async fn inspect(&self, name: &str) -> DatasetRecord {
        tracing::info!(dataset = name, "analyzing dataset");
        let command = format!("LISTCAT ENT('{name}') ALL");
        let result = self.executor.execute(&command).await;

        let Some(output) = result.output() else {
            return DatasetRecord::missing(name);
        };
        if !output.contains(name) {
            return DatasetRecord::missing(name);
        }

        DatasetRecord {
            name: name.to_string(),
            attributes: parser::entry_attributes(output),
            exists: true,
        }
    }

    /// The sequential list-then-inspect pipeline step: lists the datasets
    /// under `hlq` and inspects each one in turn.
    pub async fn list_and_inspect(&self, hlq: &str) -> Vec<DatasetRecord> {
        let names = self.list_level(hlq).await;
        let mut records = Vec::with_capacity(names.len());
        for name in &names {
            records.push(self.inspect(name).await);
        }
        records
    }
}
