//! # 运行参数与派生几何量
//!
//! 基准运行的物理/实验参数，以及由其派生的平板几何常数。
//! 输入卡构造与后处理归一化必须使用同一套派生公式，
//! 否则模拟曲线的横轴与参考曲线的 [0,1] 射程域无法对齐。
//!
//! ## 依赖关系
//! - 被 `parsers/params.rs`, `deck/`, `reduce/` 使用

use crate::error::{LwbenchError, Result};
use serde::{Deserialize, Serialize};

/// 阿伏伽德罗常数 (atoms/mol)
pub const AVOGADRO: f64 = 6.02214076e23;

/// 基准运行参数（解析自 run.params，整个流程只读）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    /// 材料元素符号 (如 "Al", "Fe")
    pub material_symbol: String,

    /// 入射动能 (eV)
    pub energy_ev: f64,

    /// 入射角 (度，相对平板法线)
    pub angle_deg: f64,

    /// CSDA 射程 (g/cm²)
    pub csda_range_g_cm2: f64,

    /// 材料密度 (g/cm³)
    pub rho_g_cm3: f64,

    /// 原子量 (g/mol)
    pub atomic_weight_g_mol: f64,

    /// 单层面密度 (g/cm²)
    pub areal_density_g_cm2: f64,

    /// 模拟粒子数
    pub n_particles: u64,
}

impl RunParameters {
    /// 入射动能换算为 MeV
    pub fn energy_mev(&self) -> f64 {
        self.energy_ev / 1.0e6
    }
}

/// 平板几何派生常数
///
/// 输入卡构造与归一化共用的唯一派生函数产物，
/// 两侧对同一参数必须得到逐位一致的结果。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedGeometry {
    /// 平均路径长度 L = CSDA_RANGE / RHO (cm)
    pub path_length_cm: f64,

    /// 单层厚度 dz = AREAL_DENSITY / RHO (cm)
    pub layer_thickness_cm: f64,

    /// 层数 N_LAYERS = floor(L / dz)
    pub n_layers: usize,

    /// 原子密度 (atoms/barn·cm)
    pub atoms_per_barn_cm: f64,

    /// 入射角 (弧度)
    pub theta_rad: f64,
}

impl DerivedGeometry {
    /// 由运行参数计算派生几何量
    ///
    /// 密度与 CSDA 射程必须严格为正，层数必须至少为 1。
    pub fn from_params(params: &RunParameters) -> Result<Self> {
        if !(params.rho_g_cm3 > 0.0) {
            return Err(LwbenchError::ConfigError {
                parameter: "RHO_G_CM3".to_string(),
                reason: format!("density must be positive, got {}", params.rho_g_cm3),
            });
        }
        if !(params.csda_range_g_cm2 > 0.0) {
            return Err(LwbenchError::ConfigError {
                parameter: "CSDA_RANGE".to_string(),
                reason: format!("CSDA range must be positive, got {}", params.csda_range_g_cm2),
            });
        }
        if !(params.atomic_weight_g_mol > 0.0) {
            return Err(LwbenchError::ConfigError {
                parameter: "ATOMIC_WEIGHT_G_MOL".to_string(),
                reason: format!("atomic weight must be positive, got {}", params.atomic_weight_g_mol),
            });
        }
        if !(params.areal_density_g_cm2 > 0.0) {
            return Err(LwbenchError::ConfigError {
                parameter: "AREAL_DENSITY_G_CM2".to_string(),
                reason: format!(
                    "areal density must be positive, got {}",
                    params.areal_density_g_cm2
                ),
            });
        }

        let path_length_cm = params.csda_range_g_cm2 / params.rho_g_cm3;
        let layer_thickness_cm = params.areal_density_g_cm2 / params.rho_g_cm3;
        let n_layers = (path_length_cm / layer_thickness_cm).floor() as usize;

        if n_layers < 1 {
            return Err(LwbenchError::ConfigError {
                parameter: "AREAL_DENSITY_G_CM2".to_string(),
                reason: format!(
                    "layer thickness {:.6e} cm exceeds total thickness {:.6e} cm",
                    layer_thickness_cm, path_length_cm
                ),
            });
        }

        let atoms_per_barn_cm =
            AVOGADRO / params.atomic_weight_g_mol * params.rho_g_cm3 / 1.0e24;

        Ok(DerivedGeometry {
            path_length_cm,
            layer_thickness_cm,
            n_layers,
            atoms_per_barn_cm,
            theta_rad: params.angle_deg.to_radians(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn al_300kev() -> RunParameters {
        RunParameters {
            material_symbol: "Al".to_string(),
            energy_ev: 3e5,
            angle_deg: 0.0,
            csda_range_g_cm2: 0.113,
            rho_g_cm3: 2.70,
            atomic_weight_g_mol: 26.7497084,
            areal_density_g_cm2: 5.05e-3,
            n_particles: 1000,
        }
    }

    #[test]
    fn test_derived_geometry_al() {
        let geom = DerivedGeometry::from_params(&al_300kev()).unwrap();

        assert!((geom.path_length_cm - 0.113 / 2.70).abs() < 1e-15);
        assert!((geom.layer_thickness_cm - 5.05e-3 / 2.70).abs() < 1e-15);
        assert_eq!(geom.n_layers, 22);
        // N_A / A * rho / 1e24
        let expected = 6.02214076e23 / 26.7497084 * 2.70 / 1e24;
        assert!((geom.atoms_per_barn_cm - expected).abs() < 1e-12);
        assert_eq!(geom.theta_rad, 0.0);
    }

    #[test]
    fn test_path_length_is_bit_identical() {
        // 两次调用同一参数必须逐位一致
        let params = al_300kev();
        let a = DerivedGeometry::from_params(&params).unwrap();
        let b = DerivedGeometry::from_params(&params).unwrap();
        assert_eq!(a.path_length_cm.to_bits(), b.path_length_cm.to_bits());
    }

    #[test]
    fn test_rejects_nonpositive_density() {
        let mut params = al_300kev();
        params.rho_g_cm3 = 0.0;
        let err = DerivedGeometry::from_params(&params).unwrap_err();
        assert!(err.to_string().contains("RHO_G_CM3"));

        params.rho_g_cm3 = -1.0;
        assert!(DerivedGeometry::from_params(&params).is_err());
    }

    #[test]
    fn test_rejects_nonpositive_csda_range() {
        let mut params = al_300kev();
        params.csda_range_g_cm2 = -0.1;
        let err = DerivedGeometry::from_params(&params).unwrap_err();
        assert!(err.to_string().contains("CSDA_RANGE"));
    }

    #[test]
    fn test_rejects_layer_thicker_than_slab() {
        let mut params = al_300kev();
        params.areal_density_g_cm2 = 1.0; // dz > L
        assert!(DerivedGeometry::from_params(&params).is_err());
    }
}
