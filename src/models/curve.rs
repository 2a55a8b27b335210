//! # 比较曲线模型
//!
//! 绘图与导出的统一数据单元：一条带标签的 (x, y) 序列，
//! x 为平均射程分数，y 为归一化能量沉积 (MeV/g/cm²)。
//! 仅在一次渲染过程中存在。
//!
//! ## 依赖关系
//! - 被 `reduce/normalize.rs`, `reduce/reference.rs` 构造
//! - 被 `reduce/plot.rs`, `reduce/export.rs` 消费

/// 一条比较曲线
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonCurve {
    /// 图例标签
    pub label: String,

    /// 平均射程分数（名义上位于 [0,1]，不截断）
    pub fraction_of_range: Vec<f64>,

    /// 能量沉积 (MeV/g/cm²)
    pub energy_deposition: Vec<f64>,
}

impl ComparisonCurve {
    /// 构造曲线
    pub fn new(
        label: impl Into<String>,
        fraction_of_range: Vec<f64>,
        energy_deposition: Vec<f64>,
    ) -> Self {
        ComparisonCurve {
            label: label.into(),
            fraction_of_range,
            energy_deposition,
        }
    }

    /// 数据点数
    pub fn len(&self) -> usize {
        self.fraction_of_range.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.fraction_of_range.is_empty()
    }

    /// (x, y) 点迭代器
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.fraction_of_range
            .iter()
            .copied()
            .zip(self.energy_deposition.iter().copied())
    }

    /// y 的最大值（空曲线返回 None）
    pub fn max_deposition(&self) -> Option<f64> {
        self.energy_deposition
            .iter()
            .copied()
            .fold(None, |acc, y| match acc {
                Some(m) if m >= y => Some(m),
                _ => Some(y),
            })
    }
}
