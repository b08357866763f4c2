//! # frename - 批量文件名查找替换
//!
//! 收集一批文件，在文件名中查找文本（可选忽略大小写或正则表达式）并替换，
//! 然后在磁盘上重命名。
//!
//! ## 子命令
//! - `rename` - 执行查找替换并重命名
//! - `list`   - 仅列出待处理文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/   (待处理列表与文件收集)
//!   │     ├── engine/  (文件名重写引擎)
//!   │     └── models/  (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod engine;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
