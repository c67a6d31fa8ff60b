//! # Catalog Output Parser Module / 编目输出解析模块
//!
//! A small line scanner for `LISTCAT` output with an explicit token grammar:
//!
//! ```text
//! dataset-name = segment ("." segment)+
//! segment      = ( "A".."Z" | "0".."9" | "$" | "#" | "@" )+
//! ```
//!
//! Only tokens with at least two segments qualify, so stray words in the
//! command output are not mistaken for dataset names. The failure mode is
//! documented and uniform: when nothing matches, the result is empty — never
//! an error.
//!
//! 针对 `LISTCAT` 输出的小型行扫描器，具有显式的令牌文法。
//! 只有至少两段的令牌才有效，因此命令输出中的零散单词不会被误认为数据集名称。
//! 失败模式统一且明确：没有匹配时结果为空，绝不是错误。

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Marker identifying non-VSAM entry lines in `LISTCAT` output.
pub const NONVSAM_MARKER: &str = "NONVSAM";
/// Marker identifying VSAM entry lines in `LISTCAT` output.
pub const VSAM_MARKER: &str = "VSAM";

static DATASET_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z0-9$#@]+(?:\.[A-Z0-9$#@]+)+").unwrap());
static RECORD_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"RECFM-([A-Z]+)").unwrap());
static RECORD_LENGTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"LRECL-(\d+)").unwrap());

/// Extracts dataset names from a `LISTCAT LEVEL(...) ALL` listing, accepting
/// only entry lines that carry both the non-VSAM marker and the requested HLQ.
///
/// Names are deduplicated and returned in first-seen order; this call site
/// deliberately preserves insertion order (see the sorted sibling
/// [`level_names`]).
///
/// 从 `LISTCAT LEVEL(...) ALL` 列表中提取数据集名称，仅接受同时带有非 VSAM
/// 标记和请求的 HLQ 的条目行。名称去重并按首次出现顺序返回。
pub fn entry_names(output: &str, hlq: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for line in output.lines() {
        if !(line.contains(hlq) && line.contains(NONVSAM_MARKER)) {
            continue;
        }
        if let Some(m) = DATASET_NAME.find(line) {
            let name = m.as_str().to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// Extracts every qualified dataset name from a listing, deduplicated and
/// sorted alphabetically.
///
/// The ordering intentionally differs from [`entry_names`]; the two callers
/// expect different orders and are not unified.
///
/// 从列表中提取每个限定的数据集名称，去重并按字母顺序排序。
/// 与 [`entry_names`] 的排序刻意不同，两个调用方期望不同的顺序，不做统一。
pub fn level_names(output: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for line in output.lines() {
        if let Some(m) = DATASET_NAME.find(line) {
            let name = m.as_str().to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names.sort();
    names
}

/// Extracts dataset attributes from a `LISTCAT ENT(...) ALL` listing.
///
/// Recognized attributes: entry `type` (NONVSAM/VSAM), `record_format`
/// (`RECFM-x`) and `record_length` (`LRECL-n`). Unrecognized lines are
/// skipped; an empty map means the listing carried no attribute lines.
///
/// 从 `LISTCAT ENT(...) ALL` 列表中提取数据集属性。
/// 无法识别的行被跳过；空映射表示列表中没有属性行。
pub fn entry_attributes(output: &str) -> BTreeMap<String, String> {
    let mut attributes = BTreeMap::new();
    for line in output.lines() {
        if line.contains(NONVSAM_MARKER) {
            attributes.insert("type".to_string(), NONVSAM_MARKER.to_string());
        } else if line.contains(VSAM_MARKER) {
            attributes.insert("type".to_string(), VSAM_MARKER.to_string());
        }
        if let Some(caps) = RECORD_FORMAT.captures(line) {
            attributes.insert("record_format".to_string(), caps[1].to_string());
        }
        if let Some(caps) = RECORD_LENGTH.captures(line) {
            attributes.insert("record_length".to_string(), caps[1].to_string());
        }
    }
    attributes
}
