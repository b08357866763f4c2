//! # 统一错误处理模块
//!
//! 定义 frename 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个文件的重命名失败不属于错误，而是折叠进批处理结果中的 "跳过" 计数；
//! 这里只包含会让整个命令提前终止的情况。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// frename 统一错误类型
#[derive(Error, Debug)]
pub enum FrenameError {
    // ─────────────────────────────────────────────────────────────
    // 匹配配置错误（在触碰任何文件之前报告）
    // ─────────────────────────────────────────────────────────────
    #[error("Search text must not be empty")]
    EmptyPattern,

    #[error("Invalid regular expression '{pattern}'\nReason: {reason}")]
    InvalidRegex { pattern: String, reason: String },

    #[error("Invalid glob pattern '{pattern}'\nReason: {reason}")]
    InvalidGlob { pattern: String, reason: String },

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
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No files collected; pass FILES, --dir or --paths-from")]
    NoFilesCollected,
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FrenameError>;
