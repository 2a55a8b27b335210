//! # 输入卡组装
//!
//! 由运行参数与派生几何组装完整输入卡。
//! 几何派生与后处理共用同一函数，网格上界即归一化用的路径长度 L。
//!
//! ## 依赖关系
//! - 被 `commands/deck.rs` 调用
//! - 使用 `deck/spec.rs` 的规格结构
//! - 使用 `reduce/naming.rs` 的运行标签

use crate::deck::spec::{
    CellSpec, InputDeck, MaterialSpec, MeshTallySpec, SettingsSpec, SourceSpec,
    SurfaceSpec, SurfaceTallySpec,
};
use crate::error::Result;
use crate::models::{DerivedGeometry, RunParameters};
use crate::reduce::naming;

use std::collections::BTreeMap;
use std::path::PathBuf;

/// 数值安全偏移：源位置与方向分量避开精确零
pub const TINY: f64 = 1e-30;

/// 粒子库缓冲相对粒子数的倍数
const BANK_BUFFER_FACTOR: u64 = 10;

/// 输入卡构造配置
#[derive(Debug, Clone, Default)]
pub struct DeckConfig {
    /// 截面库目录（显式配置，取代进程级环境变量）
    pub xs_library_dir: Option<PathBuf>,

    /// 源起始位置 z0 (cm)
    pub source_z0: f64,
}

/// 组装输入卡
pub fn build_deck(params: &RunParameters, config: &DeckConfig) -> Result<InputDeck> {
    let geometry = DerivedGeometry::from_params(params)?;
    let l = geometry.path_length_cm;
    let theta = geometry.theta_rad;

    let mut element_composition = BTreeMap::new();
    element_composition.insert(
        params.material_symbol.clone(),
        geometry.atoms_per_barn_cm,
    );

    let surfaces = vec![
        SurfaceSpec {
            id: "s1".to_string(),
            kind: "plane-z".to_string(),
            z: 0.0,
            boundary: "vacuum".to_string(),
        },
        SurfaceSpec {
            id: "s2".to_string(),
            kind: "plane-z".to_string(),
            z: l,
            boundary: "vacuum".to_string(),
        },
    ];

    let cells = vec![CellSpec {
        region: "+s1 -s2".to_string(),
        material: params.material_symbol.clone(),
    }];

    // 准直单能电子束，从 z≈0 入射
    let z0 = config.source_z0 + TINY;
    let source = SourceSpec {
        particle_type: "electron".to_string(),
        z: [z0, z0],
        energy_bounds: [params.energy_ev - 1.0, params.energy_ev + 1.0],
        energy_weights: [0.5, 0.5],
        direction: [theta.sin(), TINY, theta.cos()],
    };

    let mesh_tally = MeshTallySpec {
        scores: vec!["edep".to_string(), "flux".to_string()],
        z: linspace(0.0, l, geometry.n_layers + 1),
    };

    let surface_tallies = vec![
        SurfaceTallySpec {
            surface: "s1".to_string(),
            scores: vec!["net-current".to_string()],
        },
        SurfaceTallySpec {
            surface: "s2".to_string(),
            scores: vec!["net-current".to_string()],
        },
    ];

    let settings = SettingsSpec {
        n_particles: params.n_particles,
        active_bank_buffer: params.n_particles * BANK_BUFFER_FACTOR,
        output_name: naming::deck_tag(params),
        xs_library: config
            .xs_library_dir
            .as_ref()
            .map(|p| p.display().to_string()),
    };

    Ok(InputDeck {
        material: MaterialSpec {
            element_composition,
        },
        surfaces,
        cells,
        source,
        mesh_tally,
        surface_tallies,
        settings,
    })
}

/// n_points 个等距采样点覆盖 [start, stop]
fn linspace(start: f64, stop: f64, n_points: usize) -> Vec<f64> {
    if n_points == 1 {
        return vec![start];
    }
    let step = (stop - start) / (n_points - 1) as f64;
    (0..n_points)
        .map(|i| {
            if i == n_points - 1 {
                stop
            } else {
                start + step * i as f64
            }
        })
        .collect()
}
