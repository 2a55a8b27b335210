//! # 输入卡构造模块
//!
//! 将运行参数翻译为模拟引擎的输入卡规格：
//! 两个真空边界之间的单层均匀平板、准直单能电子源、
//! 纵向网格 tally 与两个边界流 tally。
//!
//! ## 子模块
//! - `spec`: 输入卡数据结构（序列化为 JSON 供引擎消费）
//! - `builder`: 由参数与派生几何组装输入卡
//!
//! ## 依赖关系
//! - 被 `commands/deck.rs` 使用
//! - 使用 `models/params.rs` 的共享派生几何

pub mod builder;
pub mod spec;

pub use builder::{build_deck, DeckConfig};
pub use spec::InputDeck;
