//! # Tally 输出模型
//!
//! 模拟引擎网格 tally 的原始输出：沿束流轴 (z) 的网格边界位置
//! 与逐格能量沉积均值（单位为每源粒子的沉积能量，未按体积或质量归一）。
//!
//! ## 依赖关系
//! - 被 `parsers/tally.rs` 构造
//! - 被 `reduce/normalize.rs` 消费

use crate::error::{LwbenchError, Result};

/// 网格 tally 原始输出
///
/// 边界数组长度为 N+1，沉积数组长度为 N。
#[derive(Debug, Clone, PartialEq)]
pub struct TallyOutput {
    /// 网格边界位置 (cm)，严格递增
    pub z_boundaries: Vec<f64>,

    /// 逐格能量沉积均值（每源粒子，引擎内部单位）
    pub edep_mean: Vec<f64>,
}

impl TallyOutput {
    /// 构造并校验 tally 输出
    pub fn new(z_boundaries: Vec<f64>, edep_mean: Vec<f64>) -> Result<Self> {
        let tally = TallyOutput {
            z_boundaries,
            edep_mean,
        };
        tally.validate()?;
        Ok(tally)
    }

    /// 校验边界数组与沉积数组的结构不变量
    ///
    /// 边界必须严格递增且比沉积数组恰好长 1（至少 2 个边界）。
    pub fn validate(&self) -> Result<()> {
        if self.z_boundaries.len() < 2 {
            return Err(LwbenchError::MalformedTally {
                reason: format!(
                    "need at least 2 mesh boundaries, got {}",
                    self.z_boundaries.len()
                ),
            });
        }
        if self.z_boundaries.len() != self.edep_mean.len() + 1 {
            return Err(LwbenchError::MalformedTally {
                reason: format!(
                    "boundary/deposition length mismatch: {} boundaries vs {} values",
                    self.z_boundaries.len(),
                    self.edep_mean.len()
                ),
            });
        }
        for w in self.z_boundaries.windows(2) {
            if !(w[1] > w[0]) {
                return Err(LwbenchError::MalformedTally {
                    reason: format!(
                        "mesh boundaries not strictly increasing: {} -> {}",
                        w[0], w[1]
                    ),
                });
            }
        }
        Ok(())
    }

    /// 格数 N
    pub fn n_bins(&self) -> usize {
        self.edep_mean.len()
    }

    /// 格中心 center_i = 0.5 * (z_i + z_{i+1})
    pub fn bin_centers(&self) -> Vec<f64> {
        self.z_boundaries
            .windows(2)
            .map(|w| 0.5 * (w[0] + w[1]))
            .collect()
    }

    /// 格宽 dz_i = z_{i+1} - z_i
    pub fn bin_widths(&self) -> Vec<f64> {
        self.z_boundaries.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centers_and_widths() {
        let tally =
            TallyOutput::new(vec![0.0, 0.5, 1.5, 3.0], vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(tally.n_bins(), 3);
        assert_eq!(tally.bin_centers(), vec![0.25, 1.0, 2.25]);
        assert_eq!(tally.bin_widths(), vec![0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_rejects_non_monotonic_boundaries() {
        let err = TallyOutput::new(vec![0.0, 1.0, 0.5], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, LwbenchError::MalformedTally { .. }));

        // 相等边界同样非法（格宽为零）
        let err = TallyOutput::new(vec![0.0, 1.0, 1.0], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, LwbenchError::MalformedTally { .. }));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = TallyOutput::new(vec![0.0, 1.0, 2.0], vec![1.0]).unwrap_err();
        assert!(matches!(err, LwbenchError::MalformedTally { .. }));
    }

    #[test]
    fn test_rejects_too_few_boundaries() {
        let err = TallyOutput::new(vec![0.0], vec![]).unwrap_err();
        assert!(matches!(err, LwbenchError::MalformedTally { .. }));
    }
}
