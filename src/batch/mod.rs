//! # 批量处理模块
//!
//! 提供基准目录树的运行目录发现与并行执行能力。
//!
//! ## 功能
//! - 递归收集含参数文件的运行目录
//! - 并行处理
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::RunCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
