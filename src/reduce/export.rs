//! # 曲线数据导出
//!
//! 将渲染的全部曲线导出为 CSV，便于外部工具复核数值。
//!
//! ## 依赖关系
//! - 被 `commands/compare.rs` 调用
//! - 使用 `models/curve.rs` 的比较曲线
//! - 使用 `csv` 库写入文件

use crate::error::{LwbenchError, Result};
use crate::models::ComparisonCurve;

use std::path::Path;

/// 导出曲线集合为 CSV（series, fraction_of_range, edep_mev_g_cm2）
pub fn curves_to_csv(curves: &[ComparisonCurve], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(LwbenchError::CsvError)?;

    wtr.write_record(["series", "fraction_of_range", "edep_mev_g_cm2"])
        .map_err(LwbenchError::CsvError)?;

    for curve in curves {
        for (x, y) in curve.points() {
            wtr.write_record([
                curve.label.clone(),
                format!("{:.6e}", x),
                format!("{:.6e}", y),
            ])
            .map_err(LwbenchError::CsvError)?;
        }
    }

    wtr.flush().map_err(|e| LwbenchError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
