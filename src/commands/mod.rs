//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `engine/`, `utils/`
//! - 子模块: rename, list

pub mod list;
pub mod rename;

use crate::batch::{read_path_list, Collected, FileCollector, PendingFiles};
use crate::cli::input::InputArgs;
use crate::cli::Commands;
use crate::error::Result;
use crate::utils::output;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Rename(args) => rename::execute(args),
        Commands::List(args) => list::execute(args),
    }
}

/// 按三种输入方式收集待处理文件
pub fn collect_pending(input: &InputArgs, pending: &mut PendingFiles) -> Result<()> {
    let collector = FileCollector::new()
        .with_pattern(&input.glob)?
        .follow_links(input.follow_links);

    if !input.files.is_empty() {
        let collected = collector.from_files(&input.files);
        add_collected(pending, collected, "selected files");
    }

    for dir in &input.dirs {
        let files = collector.walk_dir(dir)?;
        let added = pending.extend(&files);
        output::print_info(&format!(
            "Found {} file(s) under '{}' ({} new)",
            files.len(),
            dir.display(),
            added
        ));
    }

    if let Some(source) = &input.paths_from {
        let text = read_path_list(source)?;
        let collected = collector.from_path_list(&text);
        add_collected(pending, collected, "path list");
    }

    Ok(())
}

fn add_collected(pending: &mut PendingFiles, collected: Collected, origin: &str) {
    for path in &collected.missing {
        output::print_warning(&format!("Path does not exist: {}", path));
    }
    let added = pending.extend(&collected.found);
    output::print_info(&format!(
        "Added {} path(s) from {} ({} missing)",
        added,
        origin,
        collected.missing.len()
    ));
}
