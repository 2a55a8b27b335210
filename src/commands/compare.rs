//! # compare 子命令实现
//!
//! 后处理流水线：加载三个输入（参数文件、tally 档案、参考档案），
//! 解析参考曲线形态，归一化模拟输出，绘制比较图并按命名语法落盘。
//!
//! ## 依赖关系
//! - 使用 `cli/compare.rs` 定义的参数
//! - 使用 `parsers/`, `reduce/`
//! - 使用 `utils/output.rs`
//! - 被 `commands/batch.rs` 复用核心流水线

use crate::cli::compare::{ChartFormat, CompareArgs};
use crate::error::{LwbenchError, Result};
use crate::models::{ComparisonCurve, RunParameters};
use crate::parsers::{self, PARAMS_FILE, REFERENCE_FILE, TALLY_FILE};
use crate::reduce::{self, naming, normalize_tally, ReferenceData};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 比较流水线选项（batch 模式复用）
#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub results_dir: PathBuf,
    pub format: ChartFormat,
    pub width: u32,
    pub height: u32,
    pub export_csv: bool,
    /// 单运行模式打印曲线摘要，批量模式保持安静
    pub verbose: bool,
}

/// 曲线摘要行
#[derive(Debug, Tabled)]
struct CurveRow {
    #[tabled(rename = "Series")]
    series: String,
    #[tabled(rename = "Points")]
    points: usize,
    #[tabled(rename = "Peak (MeV/g/cm2)")]
    peak: String,
}

/// 执行比较流水线
pub fn execute(args: CompareArgs) -> Result<()> {
    output::print_header("Energy Deposition Benchmark Comparison");

    if !args.run_dir.is_dir() {
        return Err(LwbenchError::DirectoryNotFound {
            path: args.run_dir.display().to_string(),
        });
    }

    let options = CompareOptions {
        results_dir: args.results_dir,
        format: args.format,
        width: args.width,
        height: args.height,
        export_csv: args.export_csv,
        verbose: true,
    };

    let figure_path = run_compare(&args.run_dir, &options)?;
    output::print_success(&format!("Comparison figure saved to '{}'", figure_path.display()));
    Ok(())
}

/// 对单个运行目录执行完整流水线，返回图像路径
pub fn run_compare(run_dir: &Path, options: &CompareOptions) -> Result<PathBuf> {
    let (params, curves) = assemble_curves(run_dir)?;

    if options.verbose {
        print_curve_summary(&curves);
    }

    fs::create_dir_all(&options.results_dir).map_err(|e| LwbenchError::FileWriteError {
        path: options.results_dir.display().to_string(),
        source: e,
    })?;

    let figure_path = figure_path(&params, options);
    reduce::plot::render_comparison_plot(
        &curves,
        &figure_path,
        &naming::chart_title(&params),
        options.width,
        options.height,
        options.format == ChartFormat::Svg,
    )?;

    if options.export_csv {
        let csv_path = figure_path.with_extension("csv");
        reduce::export::curves_to_csv(&curves, &csv_path)?;
        if options.verbose {
            output::print_info(&format!("Curve data exported to '{}'", csv_path.display()));
        }
    }

    Ok(figure_path)
}

/// 加载三个输入并组装全部比较曲线（模拟曲线在前，参考曲线随后）
///
/// 任一输入缺失或不一致都在这里终止，不会产生部分产物。
pub fn assemble_curves(run_dir: &Path) -> Result<(RunParameters, Vec<ComparisonCurve>)> {
    let params = parsers::parse_params_file(&run_dir.join(PARAMS_FILE))?;
    let tally = parsers::parse_tally_file(&run_dir.join(TALLY_FILE))?;
    let archive = parsers::parse_reference_file(&run_dir.join(REFERENCE_FILE))?;

    let reference = ReferenceData::resolve(&archive)?;
    let simulation = normalize_tally(&params, &tally)?;

    let mut curves = vec![simulation];
    curves.extend(reference.curves());

    Ok((params, curves))
}

/// 运行参数决定的图像输出路径
pub fn figure_path(params: &RunParameters, options: &CompareOptions) -> PathBuf {
    let filename = naming::figure_filename(params);
    let path = options.results_dir.join(filename);
    match options.format {
        ChartFormat::Png => path,
        ChartFormat::Svg => path.with_extension("svg"),
    }
}

/// 打印曲线摘要表
fn print_curve_summary(curves: &[ComparisonCurve]) {
    let rows: Vec<CurveRow> = curves
        .iter()
        .map(|c| CurveRow {
            series: c.label.clone(),
            points: c.len(),
            peak: c
                .max_deposition()
                .map(|y| format!("{:.4}", y))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    println!("{}", Table::new(&rows));
}
