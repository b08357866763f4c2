//! # 重命名后端
//!
//! 引擎唯一的副作用：把一个文件从旧路径移到新路径。
//!
//! ## 依赖关系
//! - 被 `engine/rewrite.rs` 使用
//! - 使用 `same-file` 判断目标是否就是源文件本身

use std::fs;
use std::io;
use std::path::Path;

/// 执行单次重命名
pub trait RenameBackend {
    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()>;
}

/// 真实文件系统后端
///
/// POSIX `rename(2)` 会静默覆盖已存在的目标，这里先检查：目标是另一个文件时视为失败。
/// 大小写不敏感的文件系统上 `Photo.JPG -> Photo.jpg` 的目标解析到源文件本身，照常重命名。
#[derive(Debug, Default, Clone, Copy)]
pub struct FsBackend;

impl RenameBackend for FsBackend {
    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        if destination_conflicts(from, to) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("destination already exists: {}", to.display()),
            ));
        }
        fs::rename(from, to)
    }
}

/// 目标已存在且不是源文件本身
fn destination_conflicts(from: &Path, to: &Path) -> bool {
    if fs::symlink_metadata(to).is_err() {
        return false;
    }
    !same_file::is_same_file(from, to).unwrap_or(false)
}
