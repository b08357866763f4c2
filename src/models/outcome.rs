//! # 重命名结果数据模型
//!
//! 单个文件的处理结果，以及整批的统计汇总。
//!
//! ## 依赖关系
//! - 被 `engine/rewrite.rs` 生成
//! - 被 `commands/rename.rs`, `utils/report.rs` 使用

use std::path::{Path, PathBuf};

/// 单个文件的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// 重命名成功
    Renamed { from: PathBuf, to: PathBuf },
    /// 没有匹配，或替换后文件名没有变化
    SkippedNoMatch { path: PathBuf },
    /// 系统重命名失败（目标已存在、权限不足、源文件消失等）
    SkippedOsError {
        path: PathBuf,
        target: PathBuf,
        reason: String,
    },
}

impl RenameOutcome {
    /// 原始路径
    pub fn source(&self) -> &Path {
        match self {
            RenameOutcome::Renamed { from, .. } => from,
            RenameOutcome::SkippedNoMatch { path } => path,
            RenameOutcome::SkippedOsError { path, .. } => path,
        }
    }

    /// 目标路径（无匹配时为 None）
    pub fn target(&self) -> Option<&Path> {
        match self {
            RenameOutcome::Renamed { to, .. } => Some(to),
            RenameOutcome::SkippedNoMatch { .. } => None,
            RenameOutcome::SkippedOsError { target, .. } => Some(target),
        }
    }

    pub fn is_renamed(&self) -> bool {
        matches!(self, RenameOutcome::Renamed { .. })
    }

    /// 状态标签，用于报告
    pub fn status(&self) -> &'static str {
        match self {
            RenameOutcome::Renamed { .. } => "renamed",
            RenameOutcome::SkippedNoMatch { .. } => "no-match",
            RenameOutcome::SkippedOsError { .. } => "os-error",
        }
    }
}

/// 整批处理结果统计
#[derive(Debug, Default)]
pub struct RewriteReport {
    /// 成功重命名数量
    pub renamed: usize,
    /// 跳过数量（无匹配 + 系统错误）
    pub skipped: usize,
    /// 按输入顺序排列的逐文件结果
    pub outcomes: Vec<RenameOutcome>,
}

impl RewriteReport {
    /// 合并处理结果
    pub fn merge(&mut self, outcome: RenameOutcome) {
        if outcome.is_renamed() {
            self.renamed += 1;
        } else {
            self.skipped += 1;
        }
        self.outcomes.push(outcome);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.renamed + self.skipped
    }

    /// 因系统错误跳过的数量
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::SkippedOsError { .. }))
            .count()
    }
}
