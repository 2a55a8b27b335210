//! # batch 子命令 CLI 定义
//!
//! 扫描基准目录树并批量执行比较流水线。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use super::compare::ChartFormat;
use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Root directory of the benchmark tree (searched recursively for run.params)
    pub root_dir: PathBuf,

    /// Directory the figures are written to (default: '<root>/results')
    #[arg(long)]
    pub results_dir: Option<PathBuf>,

    /// Output image format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: ChartFormat,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1400)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 900)]
    pub height: u32,

    /// Also export all plotted curves as a CSV next to each figure
    #[arg(long, default_value_t = false)]
    pub export_csv: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing figures
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
