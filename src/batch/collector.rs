//! # 文件收集器
//!
//! 三种方式收集待处理文件：
//! - 直接指定文件
//! - 递归遍历目录（任意深度的全部文件，可用 glob 过滤文件名）
//! - 粘贴的路径列表（每行一个，空行忽略，不存在的路径丢弃）
//!
//! 存在性只在收集时检查一次，重命名时不再重新检查。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{FrenameError, Result};

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 收集结果
#[derive(Debug, Default)]
pub struct Collected {
    /// 存在的路径，按输入顺序
    pub found: Vec<PathBuf>,
    /// 不存在而被丢弃的输入
    pub missing: Vec<String>,
}

/// 文件收集器
pub struct FileCollector {
    /// 目录遍历时的文件名匹配模式
    patterns: Vec<glob::Pattern>,
    /// 遍历时是否跟随符号链接
    follow_links: bool,
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCollector {
    /// 创建新的文件收集器（匹配全部文件，不跟随符号链接）
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
            follow_links: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty() && *s != "*")
            .map(|s| {
                glob::Pattern::new(s).map_err(|e| FrenameError::InvalidGlob {
                    pattern: s.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// 设置是否跟随符号链接
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// 直接指定的文件
    pub fn from_files(&self, paths: &[PathBuf]) -> Collected {
        let mut collected = Collected::default();
        for path in paths {
            if path.exists() {
                collected.found.push(path.clone());
            } else {
                collected.missing.push(path.display().to_string());
            }
        }
        collected
    }

    /// 递归收集目录下的所有文件
    pub fn walk_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(FrenameError::DirectoryNotFound {
                path: dir.display().to_string(),
            });
        }

        let files = WalkDir::new(dir)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| is_file_entry(e))
            .filter(|e| self.matches_patterns(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        Ok(files)
    }

    /// 解析粘贴的路径列表
    pub fn from_path_list(&self, text: &str) -> Collected {
        let mut collected = Collected::default();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let path = PathBuf::from(line);
            if path.exists() {
                collected.found.push(path);
            } else {
                collected.missing.push(line.to_string());
            }
        }
        collected
    }

    /// 检查文件名是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return true;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.iter().any(|p| p.matches(filename))
    }
}

/// 普通文件，或指向文件的符号链接（不跟随链接时也保留，重命名的是链接本身）
fn is_file_entry(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// 读取路径列表：`-` 表示标准输入
pub fn read_path_list(source: &Path) -> Result<String> {
    if source == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| FrenameError::FileReadError {
                path: "<stdin>".to_string(),
                source: e,
            })?;
        return Ok(text);
    }

    fs::read_to_string(source).map_err(|e| FrenameError::FileReadError {
        path: source.display().to_string(),
        source: e,
    })
}
