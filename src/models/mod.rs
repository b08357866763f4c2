//! # 数据模型模块
//!
//! 定义匹配配置和重命名结果数据模型。
//!
//! ## 依赖关系
//! - 被 `engine/` 和 `commands/` 使用
//! - 子模块: config, outcome

pub mod config;
pub mod outcome;

pub use config::MatchConfig;
pub use outcome::{RenameOutcome, RewriteReport};
