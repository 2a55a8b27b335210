//! # 参考数据档案解析器
//!
//! 读取参考数据档案：以名称索引的数值数组集合。
//! 键集合的具体含义（理论曲线、实验变体 A/B、无标签实验曲线）
//! 由 `reduce/reference.rs` 在加载后一次性解析。
//!
//! ## 依赖关系
//! - 被 `commands/compare.rs` 使用
//! - 被 `reduce/reference.rs` 消费
//! - 使用 `serde_json` 读取档案

use crate::error::{LwbenchError, Result};

use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// 运行目录中参考档案的固定名称
pub const REFERENCE_FILE: &str = "reference.json";

/// 原始参考档案：名称 → 数值数组
pub type ReferenceArchive = BTreeMap<String, Vec<f64>>;

/// 解析参考档案
pub fn parse_reference_file(path: &Path) -> Result<ReferenceArchive> {
    if !path.exists() {
        return Err(LwbenchError::MissingResource {
            resource: "reference archive".to_string(),
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| LwbenchError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_reference_content(&content, &path.display().to_string())
}

/// 解析参考档案内容
pub fn parse_reference_content(content: &str, origin: &str) -> Result<ReferenceArchive> {
    let root: Value =
        serde_json::from_str(content).map_err(|e| LwbenchError::ParseError {
            format: "reference archive".to_string(),
            path: origin.to_string(),
            reason: e.to_string(),
        })?;

    let object = root.as_object().ok_or_else(|| LwbenchError::MalformedReference {
        reason: "top level is not an object of named arrays".to_string(),
    })?;

    let mut archive = ReferenceArchive::new();
    for (key, value) in object {
        let items = value.as_array().ok_or_else(|| LwbenchError::MalformedReference {
            reason: format!("entry '{}' is not an array", key),
        })?;
        let values: Vec<f64> = items
            .iter()
            .map(|v| {
                v.as_f64().ok_or_else(|| LwbenchError::MalformedReference {
                    reason: format!("entry '{}' contains a non-numeric value", key),
                })
            })
            .collect::<Result<_>>()?;
        archive.insert(key.clone(), values);
    }

    Ok(archive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_arrays() {
        let content = r#"
        {
            "fmr_theo_tiger": [0.1, 0.2, 0.3],
            "edep_theo_tiger": [1.0, 2.0, 1.5]
        }"#;
        let archive = parse_reference_content(content, "test").unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive["fmr_theo_tiger"], vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_non_array_entry_rejected() {
        let content = r#"{ "fmr_theo_tiger": "oops" }"#;
        let err = parse_reference_content(content, "test").unwrap_err();
        assert!(matches!(err, LwbenchError::MalformedReference { .. }));
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let content = r#"{ "fmr_theo_tiger": [0.1, null] }"#;
        let err = parse_reference_content(content, "test").unwrap_err();
        assert!(matches!(err, LwbenchError::MalformedReference { .. }));
    }
}
