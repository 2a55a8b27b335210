//! # Tally 档案解析器
//!
//! 从模拟引擎输出档案中读取网格 tally 的边界位置与能量沉积均值。
//! 归一化逐字依赖档案内的固定逻辑路径
//! `tallies/mesh_tally_0/grid/z` 与 `tallies/mesh_tally_0/edep/mean`。
//!
//! ## 依赖关系
//! - 被 `commands/compare.rs` 使用
//! - 使用 `models/tally.rs`
//! - 使用 `serde_json` 读取档案

use crate::error::{LwbenchError, Result};
use crate::models::TallyOutput;

use serde_json::Value;
use std::fs;
use std::path::Path;

/// 运行目录中 tally 档案的固定名称
pub const TALLY_FILE: &str = "answer.json";

/// 网格边界的逻辑路径
const MESH_Z_POINTER: &str = "/tallies/mesh_tally_0/grid/z";
/// 能量沉积均值的逻辑路径
const MESH_EDEP_POINTER: &str = "/tallies/mesh_tally_0/edep/mean";

/// 解析 tally 档案
pub fn parse_tally_file(path: &Path) -> Result<TallyOutput> {
    if !path.exists() {
        return Err(LwbenchError::MissingResource {
            resource: "tally archive".to_string(),
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| LwbenchError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_tally_content(&content, &path.display().to_string())
}

/// 解析 tally 档案内容
pub fn parse_tally_content(content: &str, origin: &str) -> Result<TallyOutput> {
    let root: Value =
        serde_json::from_str(content).map_err(|e| LwbenchError::ParseError {
            format: "tally archive".to_string(),
            path: origin.to_string(),
            reason: e.to_string(),
        })?;

    let z_boundaries = numeric_array(&root, MESH_Z_POINTER)?;
    let edep_mean = numeric_array(&root, MESH_EDEP_POINTER)?;

    TallyOutput::new(z_boundaries, edep_mean)
}

/// 按 JSON 指针取数值数组
fn numeric_array(root: &Value, pointer: &str) -> Result<Vec<f64>> {
    let node = root.pointer(pointer).ok_or_else(|| LwbenchError::MalformedTally {
        reason: format!("missing field '{}'", &pointer[1..]),
    })?;

    let items = node.as_array().ok_or_else(|| LwbenchError::MalformedTally {
        reason: format!("field '{}' is not an array", &pointer[1..]),
    })?;

    items
        .iter()
        .map(|v| {
            v.as_f64().ok_or_else(|| LwbenchError::MalformedTally {
                reason: format!("field '{}' contains a non-numeric entry", &pointer[1..]),
            })
        })
        .collect()
}
