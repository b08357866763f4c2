//! # 批量输入模块
//!
//! 收集待处理文件并维护待处理列表。
//!
//! ## 功能
//! - 直接指定文件 / 递归遍历目录 / 粘贴路径列表
//! - 有序、去重的待处理列表
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `walkdir`, `glob`

pub mod collector;
pub mod pending;

pub use collector::{read_path_list, Collected, FileCollector};
pub use pending::PendingFiles;
