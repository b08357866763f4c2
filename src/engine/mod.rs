//! # 文件名重写引擎
//!
//! 根据匹配配置计算每个文件的新文件名，并逐个执行重命名。
//!
//! ## 功能
//! - 纯文本 / 正则 × 区分 / 不区分大小写 四种匹配模式
//! - 单个文件重命名失败不会中断整批处理
//! - 配置错误（空查找内容、非法正则）在触碰任何文件前报告
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `models/` 中的配置与结果类型
//! - 子模块: matcher, backend, rewrite

pub mod backend;
pub mod matcher;
pub mod rewrite;

pub use backend::{FsBackend, RenameBackend};
pub use matcher::Matcher;
pub use rewrite::rewrite_with;
