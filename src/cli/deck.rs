//! # deck 子命令 CLI 定义
//!
//! 由运行参数文件生成模拟引擎输入卡。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/deck.rs`

use clap::Args;
use std::path::PathBuf;

/// deck 子命令参数
#[derive(Args, Debug)]
pub struct DeckArgs {
    /// Run directory containing run.params (or a path to the params file itself)
    pub run_dir: PathBuf,

    /// Output deck file (default: '<run tag>.json' next to the params file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Cross-section library directory recorded in the deck settings
    #[arg(long)]
    pub xslib_dir: Option<PathBuf>,

    /// Source starting position z0 (cm)
    #[arg(long, default_value_t = 0.0)]
    pub source_z0: f64,
}
