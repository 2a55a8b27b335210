//! # 解析器模块
//!
//! 提供运行参数文件与各数据档案（tally 输出、参考数据）的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: params, tally, reference

pub mod params;
pub mod reference;
pub mod tally;

pub use params::{parse_params_file, PARAMS_FILE};
pub use reference::{parse_reference_file, ReferenceArchive, REFERENCE_FILE};
pub use tally::{parse_tally_file, TALLY_FILE};
