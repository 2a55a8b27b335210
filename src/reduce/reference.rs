//! # 参考曲线模式解析
//!
//! 参考档案的键集合不统一：理论曲线固定存在；实验数据要么是
//! 带标签的 A/B 变体（可同时存在，至少一个），要么是单条无标签曲线。
//! 加载时一次性判定形态并展开为带标签的曲线列表，
//! 绘图阶段不再做任何键存在性检查。
//!
//! ## 依赖关系
//! - 被 `commands/compare.rs` 使用
//! - 消费 `parsers/reference.rs` 的原始档案
//! - 产出 `models/curve.rs` 的比较曲线

use crate::error::{LwbenchError, Result};
use crate::models::ComparisonCurve;
use crate::parsers::ReferenceArchive;

/// 理论曲线（TIGER 程序计算）的键
pub const KEY_THEO_FMR: &str = "fmr_theo_tiger";
pub const KEY_THEO_EDEP: &str = "edep_theo_tiger";

/// 实验变体 A 的键
pub const KEY_EXP_A_FMR: &str = "fmr_exp_lw_A";
pub const KEY_EXP_A_EDEP: &str = "edep_exp_lw_A";

/// 实验变体 B 的键
pub const KEY_EXP_B_FMR: &str = "fmr_exp_lw_B";
pub const KEY_EXP_B_EDEP: &str = "edep_exp_lw_B";

/// 无标签实验曲线的键（仅当 A、B 均不存在时回退使用）
pub const KEY_EXP_FMR: &str = "fmr_exp_lw";
pub const KEY_EXP_EDEP: &str = "edep_exp_lw";

/// 一对 (射程分数, 能量沉积) 采样序列
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePair {
    pub fraction_of_range: Vec<f64>,
    pub energy_deposition: Vec<f64>,
}

/// 实验数据形态
#[derive(Debug, Clone, PartialEq)]
pub enum ExperimentalSet {
    /// 带标签的 A/B 变体，至少一个存在
    Labeled {
        a: Option<CurvePair>,
        b: Option<CurvePair>,
    },
    /// 单条无标签实验曲线
    Single(CurvePair),
}

/// 解析完成的参考数据
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub theoretical: CurvePair,
    pub experimental: ExperimentalSet,
}

impl ReferenceData {
    /// 由原始档案判定形态并解析
    ///
    /// 判定规则（互斥分支，按键存在性）：
    /// A 存在则纳入 A；B 存在则纳入 B；A、B 均不存在时回退到
    /// 无标签键。三者全部缺失或理论键缺失均为致命错误。
    pub fn resolve(archive: &ReferenceArchive) -> Result<Self> {
        let theoretical = required_pair(archive, KEY_THEO_FMR, KEY_THEO_EDEP)?;

        let a = optional_pair(archive, KEY_EXP_A_FMR, KEY_EXP_A_EDEP)?;
        let b = optional_pair(archive, KEY_EXP_B_FMR, KEY_EXP_B_EDEP)?;

        let experimental = match (a, b) {
            (None, None) => ExperimentalSet::Single(required_pair(
                archive,
                KEY_EXP_FMR,
                KEY_EXP_EDEP,
            )?),
            (a, b) => ExperimentalSet::Labeled { a, b },
        };

        Ok(ReferenceData {
            theoretical,
            experimental,
        })
    }

    /// 展开为带标签的曲线列表，理论曲线恒在首位
    pub fn curves(&self) -> Vec<ComparisonCurve> {
        let mut curves = vec![pair_to_curve("TIGER Theoretical", &self.theoretical)];

        match &self.experimental {
            ExperimentalSet::Labeled { a, b } => {
                if let Some(pair) = a {
                    curves.push(pair_to_curve("Lockwood Experimental A", pair));
                }
                if let Some(pair) = b {
                    curves.push(pair_to_curve("Lockwood Experimental B", pair));
                }
            }
            ExperimentalSet::Single(pair) => {
                curves.push(pair_to_curve("Lockwood Experimental", pair));
            }
        }

        curves
    }
}

fn pair_to_curve(label: &str, pair: &CurvePair) -> ComparisonCurve {
    ComparisonCurve::new(
        label,
        pair.fraction_of_range.clone(),
        pair.energy_deposition.clone(),
    )
}

/// 取必须存在的曲线对
fn required_pair(
    archive: &ReferenceArchive,
    fmr_key: &str,
    edep_key: &str,
) -> Result<CurvePair> {
    let fraction_of_range = archive
        .get(fmr_key)
        .cloned()
        .ok_or_else(|| LwbenchError::MissingReferenceData {
            key: fmr_key.to_string(),
        })?;
    let energy_deposition = archive
        .get(edep_key)
        .cloned()
        .ok_or_else(|| LwbenchError::MissingReferenceData {
            key: edep_key.to_string(),
        })?;

    if fraction_of_range.len() != energy_deposition.len() {
        return Err(LwbenchError::MalformedReference {
            reason: format!(
                "'{}' and '{}' differ in length ({} vs {})",
                fmr_key,
                edep_key,
                fraction_of_range.len(),
                energy_deposition.len()
            ),
        });
    }

    Ok(CurvePair {
        fraction_of_range,
        energy_deposition,
    })
}

/// 取可选的曲线对（x 键缺失视为不存在，x 键存在而 y 键缺失为错误）
fn optional_pair(
    archive: &ReferenceArchive,
    fmr_key: &str,
    edep_key: &str,
) -> Result<Option<CurvePair>> {
    if !archive.contains_key(fmr_key) {
        return Ok(None);
    }
    required_pair(archive, fmr_key, edep_key).map(Some)
}
