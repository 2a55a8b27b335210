//! # Lwbench - 电子输运基准验证流水线
//!
//! 针对平板几何电子输运基准问题（Lockwood 能量沉积实验）的
//! 输入卡生成与结果后处理工具。
//!
//! ## 子命令
//! - `deck`    - 由运行参数生成模拟输入卡
//! - `compare` - 归一化 tally 结果并与参考曲线比较、绘图
//! - `batch`   - 批量处理整个基准目录树
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (参数与数据档案解析)
//!   │     ├── deck/      (输入卡构造)
//!   │     ├── reduce/    (归一化、参考曲线解析、绘图)
//!   │     └── models/    (数据模型)
//!   ├── batch/      (批量执行)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod deck;
mod error;
mod models;
mod parsers;
mod reduce;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
