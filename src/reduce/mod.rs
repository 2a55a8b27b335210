//! # 数据归约与比较模块
//!
//! 后处理阶段的核心逻辑：参考曲线模式解析、tally 归一化、
//! 输出命名、比较图绘制与数据导出。
//!
//! ## 子模块
//! - `reference`: 参考档案模式判定与曲线解析
//! - `normalize`: tally 原始输出的物理归一化
//! - `naming`: 输出文件命名语法
//! - `plot`: 比较图生成
//! - `export`: 曲线数据导出
//!
//! ## 依赖关系
//! - 被 `commands/compare.rs` 使用
//! - 使用 `models/` 数据模型

pub mod export;
pub mod naming;
pub mod normalize;
pub mod plot;
pub mod reference;

pub use normalize::normalize_tally;
pub use reference::ReferenceData;
