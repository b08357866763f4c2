//! # 待处理文件列表
//!
//! 保持插入顺序、拒绝重复的路径集合。只能通过添加和清空来修改，
//! 重写引擎只读取它。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 填充
//! - 被 `commands/` 读取和清空

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 待处理文件列表
#[derive(Debug, Default)]
pub struct PendingFiles {
    files: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl PendingFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一个路径，已存在时返回 false
    ///
    /// 相对路径先转为绝对路径再去重。
    pub fn add(&mut self, path: impl AsRef<Path>) -> bool {
        let path = absolutize(path.as_ref());
        if self.seen.contains(&path) {
            return false;
        }
        self.seen.insert(path.clone());
        self.files.push(path);
        true
    }

    /// 批量添加，返回实际新增的数量
    pub fn extend<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths.into_iter().filter(|p| self.add(p)).count()
    }

    /// 清空列表
    pub fn clear(&mut self) {
        self.files.clear();
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.files
    }
}

fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
