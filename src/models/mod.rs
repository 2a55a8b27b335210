//! # 数据模型模块
//!
//! 定义运行参数、派生几何量、tally 输出与比较曲线的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `deck/`, `reduce/`, `commands/` 使用
//! - 子模块: params, tally, curve

pub mod curve;
pub mod params;
pub mod tally;

pub use curve::ComparisonCurve;
pub use params::{DerivedGeometry, RunParameters};
pub use tally::TallyOutput;
