//! # 终端输出
//!
//! 带颜色标签的状态行。逐文件的行以文件名为主，目录放在末尾淡化显示，
//! 长路径下也能一眼看出改了什么。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::path::Path;

/// 成功
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 错误，写到 stderr
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 整批处理结束
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 单个文件被跳过：`[SKIP] name: reason (dir)`
pub fn print_skip(path: &Path, reason: &str) {
    println!(
        "{} {}: {} {}",
        "[SKIP]".dimmed(),
        display_name(path),
        reason,
        display_dir(path).dimmed()
    );
}

/// 单个文件重命名成功：`[OK] old -> new (dir)`
pub fn print_rename(from: &Path, to: &Path) {
    println!(
        "{} {} {} {} {}",
        "[OK]".green().bold(),
        display_name(from).dimmed(),
        "->".cyan(),
        display_name(to),
        display_dir(to).dimmed()
    );
}

/// 标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn display_dir(path: &Path) -> String {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => format!("({})", dir.display()),
        _ => String::new(),
    }
}
