//! # 输出命名语法
//!
//! 图像文件名与输入卡标签都是运行参数的纯函数：
//! 相同参数必须产生逐字节相同的名称，重复运行覆盖而非累积产物。
//!
//! 数值片段沿用参考脚本的记法：能量用最少有效位数的通用格式
//! （C 的 `%g`），粒子数用去掉指数正号的科学记数法（`%.0e`）。
//!
//! ## 依赖关系
//! - 被 `commands/compare.rs`, `deck/builder.rs` 使用
//! - 使用 `models/params.rs`

use crate::models::RunParameters;

/// 图像文件名: `fig_<材料>_<E_MeV>MeV_th<角度整数>_<粒子数>.png`
pub fn figure_filename(params: &RunParameters) -> String {
    format!(
        "fig_{}_{}MeV_th{}_{}.png",
        params.material_symbol,
        format_general(params.energy_mev(), 6),
        params.angle_deg.round() as i64,
        format_count_sci(params.n_particles),
    )
}

/// 输入卡标签: `lw_<材料>_<E:.2g>eV_1e<位数-1>p`
pub fn deck_tag(params: &RunParameters) -> String {
    let np_exponent = params.n_particles.to_string().len() - 1;
    format!(
        "lw_{}_{}eV_1e{}p",
        params.material_symbol,
        format_general(params.energy_ev, 2),
        np_exponent,
    )
}

/// 比较图标题
pub fn chart_title(params: &RunParameters) -> String {
    format!(
        "Energy Deposition of {} MeV Electrons in {} at {}° Incidence",
        format_general(params.energy_mev(), 6),
        params.material_symbol,
        format_general(params.angle_deg, 6),
    )
}

/// `%g` 等价格式化：`sig` 位有效数字，去除尾随零，
/// 指数超出 [-4, sig) 时转科学记数法（指数两位带符号）
pub fn format_general(value: f64, sig: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let sig = sig.max(1);
    let negative = value < 0.0;
    let abs = value.abs();

    let mut exponent = abs.log10().floor() as i32;
    let mut mantissa = abs / 10f64.powi(exponent);
    // log10 在 10 的幂附近可能差一个 ulp，规范化尾数到 [1, 10)
    if mantissa < 1.0 {
        exponent -= 1;
        mantissa = abs / 10f64.powi(exponent);
    } else if mantissa >= 10.0 {
        exponent += 1;
        mantissa = abs / 10f64.powi(exponent);
    }
    // 先按有效位数舍入，进位可能抬高指数
    let scale = 10f64.powi(sig as i32 - 1);
    mantissa = (mantissa * scale).round() / scale;
    if mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    }

    let body = if exponent < -4 || exponent >= sig as i32 {
        let m = trim_trailing_zeros(&format!("{:.*}", sig - 1, mantissa));
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", m, sign, exponent.abs())
    } else {
        let decimals = (sig as i32 - 1 - exponent).max(0) as usize;
        trim_trailing_zeros(&format!("{:.*}", decimals, abs))
    };

    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// `%.0e` 等价格式化并去掉指数正号：1000 → `1e03`
pub fn format_count_sci(count: u64) -> String {
    let mut exponent = count.to_string().len() as i32 - 1;
    let mut mantissa = (count as f64 / 10f64.powi(exponent)).round();
    if mantissa >= 10.0 {
        mantissa = 1.0;
        exponent += 1;
    }
    format!("{}e{:02}", mantissa as u64, exponent)
}

fn trim_trailing_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
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
    fn test_format_general() {
        assert_eq!(format_general(0.3, 6), "0.3");
        assert_eq!(format_general(0.25, 6), "0.25");
        assert_eq!(format_general(1.0, 6), "1");
        assert_eq!(format_general(123.456, 6), "123.456");
        assert_eq!(format_general(0.0, 6), "0");
        assert_eq!(format_general(1.0e6, 6), "1e+06");
        assert_eq!(format_general(1.0e-5, 6), "1e-05");
        assert_eq!(format_general(-0.3, 6), "-0.3");
    }

    #[test]
    fn test_format_general_two_digits() {
        assert_eq!(format_general(3e5, 2), "3e+05");
        assert_eq!(format_general(2.5e5, 2), "2.5e+05");
        assert_eq!(format_general(9.99e5, 2), "1e+06");
        assert_eq!(format_general(0.113, 2), "0.11");
    }

    #[test]
    fn test_format_count_sci() {
        assert_eq!(format_count_sci(1), "1e00");
        assert_eq!(format_count_sci(1000), "1e03");
        assert_eq!(format_count_sci(999), "1e03");
        assert_eq!(format_count_sci(20_000), "2e04");
        assert_eq!(format_count_sci(1_000_000), "1e06");
    }

    #[test]
    fn test_figure_filename() {
        assert_eq!(figure_filename(&al_300kev()), "fig_Al_0.3MeV_th0_1e03.png");
    }

    #[test]
    fn test_figure_filename_is_deterministic() {
        let a = figure_filename(&al_300kev());
        let b = figure_filename(&al_300kev());
        assert_eq!(a, b);
    }

    #[test]
    fn test_figure_filename_rounds_angle() {
        let mut params = al_300kev();
        params.angle_deg = 59.6;
        assert!(figure_filename(&params).contains("_th60_"));
    }

    #[test]
    fn test_deck_tag() {
        assert_eq!(deck_tag(&al_300kev()), "lw_Al_3e+05eV_1e3p");

        let mut params = al_300kev();
        params.n_particles = 1_000_000;
        params.energy_ev = 1e6;
        assert_eq!(deck_tag(&params), "lw_Al_1e+06eV_1e6p");
    }

    #[test]
    fn test_chart_title() {
        assert_eq!(
            chart_title(&al_300kev()),
            "Energy Deposition of 0.3 MeV Electrons in Al at 0° Incidence"
        );
    }
}
