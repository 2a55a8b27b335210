//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `deck`: 由运行参数生成模拟输入卡
//! - `compare`: 归一化 tally 结果并与参考曲线比较、绘图
//! - `batch`: 批量处理整个基准目录树
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: deck, compare, batch

pub mod batch;
pub mod compare;
pub mod deck;

use clap::{Parser, Subcommand};

/// Lwbench - 电子输运基准验证流水线
#[derive(Parser)]
#[command(name = "lwbench")]
#[command(version)]
#[command(about = "A benchmark verification toolkit for slab-geometry electron transport simulations", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Build the simulation input deck from run parameters
    Deck(deck::DeckArgs),

    /// Normalize tally output and compare against reference curves
    Compare(compare::CompareArgs),

    /// Process every run directory under a benchmark tree
    Batch(batch::BatchArgs),
}
