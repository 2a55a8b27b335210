//! # 输入卡数据结构
//!
//! 模拟引擎输入卡的序列化模型。引擎本身在本仓库之外，
//! 这里只定义双方约定的规格形状。
//!
//! ## 依赖关系
//! - 被 `deck/builder.rs` 构造
//! - 被 `commands/deck.rs` 序列化为 JSON

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 完整输入卡
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDeck {
    pub material: MaterialSpec,
    pub surfaces: Vec<SurfaceSpec>,
    pub cells: Vec<CellSpec>,
    pub source: SourceSpec,
    pub mesh_tally: MeshTallySpec,
    pub surface_tallies: Vec<SurfaceTallySpec>,
    pub settings: SettingsSpec,
}

/// 材料规格：元素符号 → 原子密度 (atoms/barn·cm)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub element_composition: BTreeMap<String, f64>,
}

/// 平面边界
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    pub id: String,
    pub kind: String,
    pub z: f64,
    pub boundary: String,
}

/// 单元（由边界半空间围成，填充材料）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSpec {
    pub region: String,
    pub material: String,
}

/// 源规格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub particle_type: String,
    /// 发射位置区间 [z_lo, z_hi]
    pub z: [f64; 2],
    /// 能量窗 [E-1, E+1] (eV)
    pub energy_bounds: [f64; 2],
    /// 能量窗内的权重
    pub energy_weights: [f64; 2],
    /// 方向余弦 (u, v, w)
    pub direction: [f64; 3],
}

/// 网格 tally 规格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshTallySpec {
    pub scores: Vec<String>,
    /// 网格边界 (cm)，N_LAYERS + 1 个
    pub z: Vec<f64>,
}

/// 边界面 tally 规格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTallySpec {
    pub surface: String,
    pub scores: Vec<String>,
}

/// 运行设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsSpec {
    pub n_particles: u64,
    pub active_bank_buffer: u64,
    /// 运行标识标签（决定引擎输出档案名）
    pub output_name: String,
    /// 截面库目录（显式传入，不走进程环境）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xs_library: Option<String>,
}
