//! # 输入文件参数
//!
//! `rename` 和 `list` 共用的文件收集参数。
//!
//! ## 依赖关系
//! - 被 `cli/rename.rs`, `cli/list.rs` 展开使用
//! - 参数传递给 `commands/mod.rs::collect_pending`

use clap::Args;
use std::path::PathBuf;

/// 文件收集参数
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Files to process
    pub files: Vec<PathBuf>,

    /// Directory to walk recursively (may be repeated)
    #[arg(short, long = "dir", value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// Comma-separated glob patterns applied to file names found under --dir
    #[arg(short, long, default_value = "*")]
    pub glob: String,

    /// Descend into symlinked directories while walking (symlinked files are always included)
    #[arg(long, default_value_t = false)]
    pub follow_links: bool,

    /// Read a newline-separated list of paths from FILE ('-' for stdin)
    #[arg(short = 'l', long, value_name = "FILE")]
    pub paths_from: Option<PathBuf>,
}
