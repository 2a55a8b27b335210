//! # compare 子命令 CLI 定义
//!
//! 后处理流水线：读取运行参数、tally 档案与参考档案，
//! 归一化并生成比较图。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/compare.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ChartFormat {
    /// PNG image (publication quality)
    Png,
    /// SVG vector image
    Svg,
}

impl std::fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartFormat::Png => write!(f, "png"),
            ChartFormat::Svg => write!(f, "svg"),
        }
    }
}

/// compare 子命令参数
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Run directory containing run.params, answer.json and reference.json
    pub run_dir: PathBuf,

    /// Directory the figure is written to (created if missing)
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,

    /// Output image format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: ChartFormat,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1400)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 900)]
    pub height: u32,

    /// Also export all plotted curves as a CSV next to the figure
    #[arg(long, default_value_t = false)]
    pub export_csv: bool,
}
