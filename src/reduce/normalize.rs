//! # Tally 物理归一化
//!
//! 将引擎原始输出（每源粒子、未按质量归一的逐格能量沉积）
//! 换算为与参考数据一致的物理单位 MeV/g/cm²，
//! 横轴换算为平均射程分数。
//!
//! 单位换算必须同时除以密度、格宽与 eV→MeV 换算因子，
//! 缺一即产生数量级错误的曲线。
//!
//! ## 依赖关系
//! - 被 `commands/compare.rs` 使用
//! - 使用 `models/params.rs` 的共享派生几何
//! - 使用 `models/tally.rs`, `models/curve.rs`

use crate::error::Result;
use crate::models::{ComparisonCurve, DerivedGeometry, RunParameters, TallyOutput};

/// 模拟曲线的图例标签
pub const SIMULATION_LABEL: &str = "Simulation";

/// eV → MeV 换算因子
pub const EV_PER_MEV: f64 = 1.0e6;

/// 将 tally 原始输出归一化为比较曲线
///
/// 横轴: fraction_i = center_i / L，不截断（网格可超出 CSDA 射程，
/// 超出 [0,1] 的点由绘图阶段自然裁掉）。
/// 纵轴: edep_i / ρ / dz_i / 1e6 (MeV/g/cm²)。
pub fn normalize_tally(
    params: &RunParameters,
    tally: &TallyOutput,
) -> Result<ComparisonCurve> {
    tally.validate()?;

    // 与输入卡构造同一派生函数，保证 L 逐位一致
    let geometry = DerivedGeometry::from_params(params)?;
    let path_length = geometry.path_length_cm;

    let fraction_of_range: Vec<f64> = tally
        .bin_centers()
        .iter()
        .map(|c| c / path_length)
        .collect();

    let energy_deposition: Vec<f64> = tally
        .edep_mean
        .iter()
        .zip(tally.bin_widths())
        .map(|(edep, dz)| edep / params.rho_g_cm3 / dz / EV_PER_MEV)
        .collect();

    Ok(ComparisonCurve::new(
        SIMULATION_LABEL,
        fraction_of_range,
        energy_deposition,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LwbenchError;

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

    /// N+1 个均匀边界覆盖 [0, l]
    fn uniform_boundaries(l: f64, n: usize) -> Vec<f64> {
        (0..=n).map(|i| l * i as f64 / n as f64).collect()
    }

    #[test]
    fn test_unit_round_trip() {
        // 已知均匀格宽 dz、密度 rho、原始值 v 时，
        // 归一化结果必须等于 v / rho / dz / 1e6
        let params = al_300kev();
        let l = params.csda_range_g_cm2 / params.rho_g_cm3;
        let n = 4;
        let dz = l / n as f64;
        let v = 7.5e-5;

        let tally = TallyOutput::new(uniform_boundaries(l, n), vec![v; n]).unwrap();
        let curve = normalize_tally(&params, &tally).unwrap();

        let expected = v / params.rho_g_cm3 / dz / 1e6;
        for y in &curve.energy_deposition {
            assert!((y - expected).abs() <= 1e-9 * expected.abs());
        }
    }

    #[test]
    fn test_end_to_end_scenario_al_300kev() {
        // Al, 3e5 eV, 0°, CSDA 0.113 g/cm², rho 2.70 g/cm³:
        // 5 个均匀格覆盖 [0, L]，沉积值 [1..5]×1e-6
        let params = al_300kev();
        let l = 0.113 / 2.70;
        let values: Vec<f64> = (1..=5).map(|i| i as f64 * 1e-6).collect();
        let tally = TallyOutput::new(uniform_boundaries(l, 5), values.clone()).unwrap();

        let curve = normalize_tally(&params, &tally).unwrap();
        assert_eq!(curve.label, SIMULATION_LABEL);

        // 格中心位于 L 的 0.1, 0.3, 0.5, 0.7, 0.9 处
        let expected_x = [0.1, 0.3, 0.5, 0.7, 0.9];
        for (x, e) in curve.fraction_of_range.iter().zip(expected_x) {
            assert!((x - e).abs() < 1e-12, "x = {x}, expected {e}");
        }

        let dz = l / 5.0;
        for (y, v) in curve.energy_deposition.iter().zip(&values) {
            let expected = v / 2.70 / dz / 1e6;
            assert!((y - expected).abs() <= 1e-9 * expected.abs());
        }
    }

    #[test]
    fn test_no_clamping_beyond_unity() {
        // 网格超出 CSDA 射程时分数超过 1，不得截断
        let params = al_300kev();
        let l = params.csda_range_g_cm2 / params.rho_g_cm3;
        let tally =
            TallyOutput::new(vec![0.0, l, 2.0 * l], vec![1e-6, 1e-6]).unwrap();

        let curve = normalize_tally(&params, &tally).unwrap();
        assert!(curve.fraction_of_range[1] > 1.0);
    }

    #[test]
    fn test_non_monotonic_tally_rejected() {
        let params = al_300kev();
        let tally = TallyOutput {
            z_boundaries: vec![0.0, 0.02, 0.01],
            edep_mean: vec![1e-6, 1e-6],
        };
        let err = normalize_tally(&params, &tally).unwrap_err();
        assert!(matches!(err, LwbenchError::MalformedTally { .. }));
    }

    #[test]
    fn test_fractions_increase_with_mesh() {
        let params = al_300kev();
        let l = params.csda_range_g_cm2 / params.rho_g_cm3;
        let tally =
            TallyOutput::new(uniform_boundaries(l, 10), vec![1e-6; 10]).unwrap();
        let curve = normalize_tally(&params, &tally).unwrap();
        for w in curve.fraction_of_range.windows(2) {
            assert!(w[1] > w[0]);
        }
    }
}
