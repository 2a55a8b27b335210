//! # 运行参数文件解析器
//!
//! 解析 `run.params` 平面参数文件，输入卡生成与后处理读取同一份文件，
//! 保证两侧派生几何一致。
//!
//! ## 文件格式
//! ```text
//! # Lockwood benchmark: 0.3 MeV electrons on aluminum
//! MATERIAL_SYMBOL = Al
//! ENERGY = 3e5          # eV
//! CSDA_RANGE = 0.113    # g/cm2
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/deck.rs`, `commands/compare.rs` 使用
//! - 使用 `models/params.rs`
//! - 使用 `regex` 提取赋值行

use crate::error::{LwbenchError, Result};
use crate::models::RunParameters;

use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// 运行目录中参数文件的固定名称
pub const PARAMS_FILE: &str = "run.params";

/// 解析参数文件
pub fn parse_params_file(path: &Path) -> Result<RunParameters> {
    if !path.exists() {
        return Err(LwbenchError::MissingResource {
            resource: "parameter file".to_string(),
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| LwbenchError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_params_content(&content, &path.display().to_string())
}

/// 解析参数文件内容
pub fn parse_params_content(content: &str, origin: &str) -> Result<RunParameters> {
    let assignments = collect_assignments(content);

    Ok(RunParameters {
        material_symbol: lookup_symbol(&assignments, "MATERIAL_SYMBOL", origin)?,
        energy_ev: lookup_f64(&assignments, "ENERGY", origin)?,
        angle_deg: lookup_f64(&assignments, "ANGLE", origin)?,
        csda_range_g_cm2: lookup_f64(&assignments, "CSDA_RANGE", origin)?,
        rho_g_cm3: lookup_f64(&assignments, "RHO_G_CM3", origin)?,
        atomic_weight_g_mol: lookup_f64(&assignments, "ATOMIC_WEIGHT_G_MOL", origin)?,
        areal_density_g_cm2: lookup_f64(&assignments, "AREAL_DENSITY_G_CM2", origin)?,
        n_particles: lookup_count(&assignments, "N_PARTICLES", origin)?,
    })
}

/// 提取所有 `KEY = value` 赋值行（`#` 之后为注释，首次出现优先）
fn collect_assignments(content: &str) -> HashMap<String, String> {
    let re = Regex::new(r"(?m)^\s*([A-Za-z_][A-Za-z0-9_]*)\s*=\s*([^#\r\n]+)").unwrap();

    let mut map = HashMap::new();
    for cap in re.captures_iter(content) {
        let key = cap[1].to_string();
        let value = cap[2].trim().to_string();
        map.entry(key).or_insert(value);
    }
    map
}

/// 查找字符串参数（去除引号）
fn lookup_symbol(map: &HashMap<String, String>, name: &str, origin: &str) -> Result<String> {
    let raw = lookup_raw(map, name, origin)?;
    let symbol = raw.trim_matches(|c| c == '"' || c == '\'').trim().to_string();
    if symbol.is_empty() {
        return Err(LwbenchError::ConfigError {
            parameter: name.to_string(),
            reason: format!("empty value in {}", origin),
        });
    }
    Ok(symbol)
}

/// 查找浮点参数
fn lookup_f64(map: &HashMap<String, String>, name: &str, origin: &str) -> Result<f64> {
    let raw = lookup_raw(map, name, origin)?;
    raw.parse::<f64>().map_err(|_| LwbenchError::ConfigError {
        parameter: name.to_string(),
        reason: format!("cannot evaluate '{}' as a number in {}", raw, origin),
    })
}

/// 查找正整数参数（接受 1000 或 1e3 记法）
fn lookup_count(map: &HashMap<String, String>, name: &str, origin: &str) -> Result<u64> {
    let value = lookup_f64(map, name, origin)?;
    if !(value > 0.0) || value.fract() != 0.0 || value > u64::MAX as f64 {
        return Err(LwbenchError::ConfigError {
            parameter: name.to_string(),
            reason: format!("expected a positive integer count, got {}", value),
        });
    }
    Ok(value as u64)
}

fn lookup_raw<'a>(
    map: &'a HashMap<String, String>,
    name: &str,
    origin: &str,
) -> Result<&'a str> {
    map.get(name)
        .map(|s| s.as_str())
        .ok_or_else(|| LwbenchError::ConfigError {
            parameter: name.to_string(),
            reason: format!("not found in {}", origin),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = r#"
# Lockwood benchmark: 0.3 MeV electrons on aluminum
MATERIAL_SYMBOL = "Al"
ENERGY = 3e5          # eV
CSDA_RANGE = 0.113    # g/cm2
ANGLE = 0.0

N_PARTICLES = 1000

RHO_G_CM3 = 2.70      # g/cm3
ATOMIC_WEIGHT_G_MOL = 26.7497084
AREAL_DENSITY_G_CM2 = 5.05e-3
"#;

    #[test]
    fn test_parse_full_params() {
        let params = parse_params_content(CONTENT, "test").unwrap();
        assert_eq!(params.material_symbol, "Al");
        assert_eq!(params.energy_ev, 3e5);
        assert_eq!(params.angle_deg, 0.0);
        assert_eq!(params.csda_range_g_cm2, 0.113);
        assert_eq!(params.rho_g_cm3, 2.70);
        assert_eq!(params.atomic_weight_g_mol, 26.7497084);
        assert_eq!(params.areal_density_g_cm2, 5.05e-3);
        assert_eq!(params.n_particles, 1000);
    }

    #[test]
    fn test_missing_key_names_parameter() {
        let err = parse_params_content("MATERIAL_SYMBOL = Al", "test").unwrap_err();
        assert!(err.to_string().contains("ENERGY"));
    }

    #[test]
    fn test_unevaluable_value() {
        let content = CONTENT.replace("ENERGY = 3e5", "ENERGY = three-hundred-keV");
        let err = parse_params_content(&content, "test").unwrap_err();
        assert!(err.to_string().contains("ENERGY"));
    }

    #[test]
    fn test_scientific_particle_count() {
        let content = CONTENT.replace("N_PARTICLES = 1000", "N_PARTICLES = 1e6");
        let params = parse_params_content(&content, "test").unwrap();
        assert_eq!(params.n_particles, 1_000_000);
    }

    #[test]
    fn test_fractional_particle_count_rejected() {
        let content = CONTENT.replace("N_PARTICLES = 1000", "N_PARTICLES = 10.5");
        assert!(parse_params_content(&content, "test").is_err());
    }

    #[test]
    fn test_first_assignment_wins() {
        let content = format!("{}\nENERGY = 1e6\n", CONTENT);
        let params = parse_params_content(&content, "test").unwrap();
        assert_eq!(params.energy_ev, 3e5);
    }
}
