//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `deck/`, `reduce/`, `utils/`
//! - 子模块: deck, compare, batch

pub mod batch;
pub mod compare;
pub mod deck;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Deck(args) => deck::execute(args),
        Commands::Compare(args) => compare::execute(args),
        Commands::Batch(args) => batch::execute(args),
    }
}
