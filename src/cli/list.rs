//! # list 子命令 CLI 定义
//!
//! 收集并列出待处理文件，不做任何修改
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use super::input::InputArgs;
use clap::Args;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub input: InputArgs,
}
