//! # rename 命令实现
//!
//! 收集文件，在文件名中查找替换，并在磁盘上重命名。
//!
//! ## 功能
//! - 先编译匹配配置，配置错误在遍历任何目录之前报告
//! - 收集待处理列表（文件 / 目录 / 路径列表）
//! - 顺序执行重命名，显示进度
//! - 输出已重命名表格与统计，可选写入 CSV 报告
//! - 处理结束后无论成败都清空待处理列表
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/`, `engine/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/report.rs`

use super::collect_pending;
use crate::batch::PendingFiles;
use crate::cli::rename::RenameArgs;
use crate::engine::{self, FsBackend, Matcher};
use crate::error::{FrenameError, Result};
use crate::models::{RenameOutcome, RewriteReport};
use crate::utils::{output, progress, report};

/// 执行 rename 命令
pub fn execute(args: RenameArgs) -> Result<()> {
    let config = args.match_config();

    output::print_header(&format!(
        "Renaming: '{}' -> '{}' ({})",
        config.pattern,
        config.replacement,
        config.mode()
    ));

    let matcher = Matcher::compile(&config)?;

    let mut pending = PendingFiles::new();
    collect_pending(&args.input, &mut pending)?;

    if pending.is_empty() {
        return Err(FrenameError::NoFilesCollected);
    }

    output::print_info(&format!("Pending files: {}", pending.len()));

    rename_pending(&args, &matcher, &mut pending).map(|_| ())
}

/// 重命名待处理列表中的全部文件，返回后列表总是为空
pub fn rename_pending(
    args: &RenameArgs,
    matcher: &Matcher,
    pending: &mut PendingFiles,
) -> Result<RewriteReport> {
    let result = process_pending(args, matcher, pending);
    pending.clear();
    result
}

fn process_pending(
    args: &RenameArgs,
    matcher: &Matcher,
    pending: &PendingFiles,
) -> Result<RewriteReport> {
    let pb = progress::create_progress_bar(pending.len() as u64, "Renaming");
    let verbose = args.verbose;

    let rewrite_report =
        engine::rewrite_with(pending.as_slice(), matcher, &mut FsBackend, |outcome| {
            pb.suspend(|| print_outcome(outcome, verbose));
            pb.inc(1);
        });

    pb.finish_and_clear();

    if !args.no_table {
        if let Some(table) = report::renamed_table(&rewrite_report) {
            println!("{}", table);
        }
    }

    if let Some(ref csv_path) = args.report {
        report::write_csv(&rewrite_report, csv_path)?;
        output::print_success(&format!("Report saved to '{}'", csv_path.display()));
    }

    let failed = rewrite_report.failed();
    if failed > 0 {
        output::print_warning(&format!("{} file(s) could not be renamed", failed));
    }

    output::print_done(&format!(
        "Processed {} file(s): {} renamed, {} skipped",
        rewrite_report.total(),
        rewrite_report.renamed,
        rewrite_report.skipped
    ));

    Ok(rewrite_report)
}

/// 逐文件输出；成功项只在 verbose 时打印，系统错误总是打印
fn print_outcome(outcome: &RenameOutcome, verbose: bool) {
    match outcome {
        RenameOutcome::Renamed { from, to } => {
            if verbose {
                output::print_rename(from, to);
            }
        }
        RenameOutcome::SkippedNoMatch { path } => {
            if verbose {
                output::print_skip(path, "no change");
            }
        }
        RenameOutcome::SkippedOsError { path, reason, .. } => {
            output::print_skip(path, reason);
        }
    }
}
