//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `rename`: 查找替换并重命名
//! - `list`: 列出待处理文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: input, rename, list

pub mod input;
pub mod list;
pub mod rename;

use clap::{Parser, Subcommand};

/// frename - 批量文件名查找替换
#[derive(Parser)]
#[command(name = "frename")]
#[command(author = "Oahc")]
#[command(version)]
#[command(about = "Batch find-and-replace for file names", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true, env = "FRENAME_NO_COLOR", default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Find text in file names and rename the matching files
    Rename(rename::RenameArgs),

    /// Collect files and print the pending list without renaming
    List(list::ListArgs),
}
