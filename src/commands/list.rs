//! # list 命令实现
//!
//! 收集待处理文件并逐行打印，不做任何修改。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的参数
//! - 使用 `batch/`, `utils/output.rs`

use super::collect_pending;
use crate::batch::PendingFiles;
use crate::cli::list::ListArgs;
use crate::error::Result;
use crate::utils::output;

/// 执行 list 命令
pub fn execute(args: ListArgs) -> Result<()> {
    output::print_header("Pending Files");

    let mut pending = PendingFiles::new();
    collect_pending(&args.input, &mut pending)?;

    if pending.is_empty() {
        output::print_warning("No files collected.");
        return Ok(());
    }

    output::print_separator();
    for path in pending.iter() {
        println!("{}", path.display());
    }
    output::print_separator();

    output::print_done(&format!("Pending files: {}", pending.len()));
    Ok(())
}
