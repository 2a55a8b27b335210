//! # 统一错误处理模块
//!
//! 定义 Lwbench 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Lwbench 统一错误类型
#[derive(Error, Debug)]
pub enum LwbenchError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 缺失资源（直接终止，不产生部分结果）
    // ─────────────────────────────────────────────────────────────
    #[error("Required {resource} not found: {path}")]
    MissingResource { resource: String, path: String },

    // ─────────────────────────────────────────────────────────────
    // 配置/参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Parameter '{parameter}' invalid: {reason}")]
    ConfigError { parameter: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 数据内容错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Reference archive is missing required data: {key}")]
    MissingReferenceData { key: String },

    #[error("Malformed reference archive: {reason}")]
    MalformedReference { reason: String },

    #[error("Malformed tally output: {reason}")]
    MalformedTally { reason: String },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, LwbenchError>;
