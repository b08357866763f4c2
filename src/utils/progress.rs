//! # 进度条工具
//!
//! 封装 `indicatif` 提供统一的进度条样式。
//! 输出不是终端时（重定向、管道）进度条隐藏，只保留文本行。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `indicatif`, `console` crate

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// 创建标准进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if !console::user_attended() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    ) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(message.to_string());
    pb
}
