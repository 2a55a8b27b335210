//! # deck 子命令实现
//!
//! 读取运行参数，报告派生几何常数，组装输入卡并写出 JSON 规格。
//!
//! ## 依赖关系
//! - 使用 `cli/deck.rs` 定义的参数
//! - 使用 `parsers/params.rs`, `deck/builder.rs`
//! - 使用 `utils/output.rs`

use crate::cli::deck::DeckArgs;
use crate::deck::{build_deck, DeckConfig};
use crate::error::{LwbenchError, Result};
use crate::models::{DerivedGeometry, RunParameters};
use crate::parsers::{self, PARAMS_FILE};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 派生常数报告行
#[derive(Debug, Tabled)]
struct ConstantRow {
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行输入卡构造
pub fn execute(args: DeckArgs) -> Result<()> {
    output::print_header("Simulation Deck Construction");

    let params_path = locate_params_file(&args.run_dir);
    output::print_info(&format!("Reading parameters from '{}'", params_path.display()));

    let params = parsers::parse_params_file(&params_path)?;
    let geometry = DerivedGeometry::from_params(&params)?;

    print_constants(&params, &geometry);

    let config = DeckConfig {
        xs_library_dir: args.xslib_dir,
        source_z0: args.source_z0,
    };
    let deck = build_deck(&params, &config)?;

    let output_path = args.output.unwrap_or_else(|| {
        let dir = params_path.parent().unwrap_or_else(|| Path::new("."));
        dir.join(format!("{}.json", deck.settings.output_name))
    });

    let json = serde_json::to_string_pretty(&deck)
        .map_err(|e| LwbenchError::Other(e.to_string()))?;
    fs::write(&output_path, json).map_err(|e| LwbenchError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    output::print_success(&format!("Input deck saved to '{}'", output_path.display()));
    Ok(())
}

/// 允许直接指定参数文件或其所在目录
fn locate_params_file(run_dir: &Path) -> PathBuf {
    if run_dir.is_dir() {
        run_dir.join(PARAMS_FILE)
    } else {
        run_dir.to_path_buf()
    }
}

/// 打印派生几何常数报告
fn print_constants(params: &RunParameters, geometry: &DerivedGeometry) {
    let rows = vec![
        ConstantRow {
            quantity: "Material".to_string(),
            value: params.material_symbol.clone(),
        },
        ConstantRow {
            quantity: "Incident energy (eV)".to_string(),
            value: format!("{:.6e}", params.energy_ev),
        },
        ConstantRow {
            quantity: "Incidence angle (deg)".to_string(),
            value: format!("{}", params.angle_deg),
        },
        ConstantRow {
            quantity: "CSDA range (g/cm2)".to_string(),
            value: format!("{:.6e}", params.csda_range_g_cm2),
        },
        ConstantRow {
            quantity: "Density (g/cm3)".to_string(),
            value: format!("{:.6e}", params.rho_g_cm3),
        },
        ConstantRow {
            quantity: "Atomic weight (g/mol)".to_string(),
            value: format!("{:.6e}", params.atomic_weight_g_mol),
        },
        ConstantRow {
            quantity: "Areal density per layer (g/cm2)".to_string(),
            value: format!("{:.6e}", params.areal_density_g_cm2),
        },
        ConstantRow {
            quantity: "Atomic density (atoms/barn-cm)".to_string(),
            value: format!("{:.6e}", geometry.atoms_per_barn_cm),
        },
        ConstantRow {
            quantity: "Layer thickness (cm)".to_string(),
            value: format!("{:.6e}", geometry.layer_thickness_cm),
        },
        ConstantRow {
            quantity: "Total thickness (cm)".to_string(),
            value: format!("{:.6e}", geometry.path_length_cm),
        },
        ConstantRow {
            quantity: "Number of layers".to_string(),
            value: geometry.n_layers.to_string(),
        },
        ConstantRow {
            quantity: "Particles".to_string(),
            value: params.n_particles.to_string(),
        },
    ];

    println!("{}", Table::new(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: &str = r#"
MATERIAL_SYMBOL = Al
ENERGY = 3e5
ANGLE = 0.0
CSDA_RANGE = 0.113
RHO_G_CM3 = 2.70
ATOMIC_WEIGHT_G_MOL = 26.7497084
AREAL_DENSITY_G_CM2 = 5.05e-3
N_PARTICLES = 1000
"#;

    #[test]
    fn test_execute_writes_deck_json() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(PARAMS_FILE), PARAMS).unwrap();

        let args = DeckArgs {
            run_dir: tmp.path().to_path_buf(),
            output: None,
            xslib_dir: None,
            source_z0: 0.0,
        };
        execute(args).unwrap();

        let deck_path = tmp.path().join("lw_Al_3e+05eV_1e3p.json");
        assert!(deck_path.exists());

        let deck: crate::deck::InputDeck =
            serde_json::from_str(&fs::read_to_string(deck_path).unwrap()).unwrap();
        assert_eq!(deck.settings.n_particles, 1000);
        assert_eq!(deck.mesh_tally.z.len(), 23);
    }

    #[test]
    fn test_missing_params_file() {
        let tmp = tempfile::tempdir().unwrap();
        let args = DeckArgs {
            run_dir: tmp.path().to_path_buf(),
            output: None,
            xslib_dir: None,
            source_z0: 0.0,
        };
        let err = execute(args).unwrap_err();
        assert!(matches!(err, LwbenchError::MissingResource { .. }));
    }
}
