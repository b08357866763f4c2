//! # rename 子命令 CLI 定义
//!
//! 在文件名中查找并替换文本，然后重命名文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use super::input::InputArgs;
use crate::models::MatchConfig;

use clap::Args;
use std::path::PathBuf;

/// rename 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Text to find in file names
    #[arg(short, long, env = "FRENAME_FIND")]
    pub find: String,

    /// Replacement text (inserted verbatim)
    #[arg(short, long, env = "FRENAME_REPLACE", default_value = "")]
    pub replace: String,

    /// Match case-insensitively (plain mode replaces only the first match)
    #[arg(short = 'i', long, default_value_t = false)]
    pub ignore_case: bool,

    /// Treat the search text as a regular expression
    #[arg(short = 'E', long, default_value_t = false)]
    pub regex: bool,

    /// Print a line for every file, including skipped ones
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Write a per-file CSV report
    #[arg(long, value_name = "CSV")]
    pub report: Option<PathBuf>,

    /// Do not print the table of renamed files
    #[arg(long, default_value_t = false)]
    pub no_table: bool,
}

impl RenameArgs {
    /// 构造匹配配置
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig::new(self.find.clone(), self.replace.clone())
            .case_insensitive(self.ignore_case)
            .regex(self.regex)
    }
}
