//! # 结果报告
//!
//! 把一批重命名结果渲染成终端表格或写入 CSV。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `tabled` 渲染表格，`csv` + `serde` 写报告

use crate::error::{FrenameError, Result};
use crate::models::{RenameOutcome, RewriteReport};

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 表格中的一行：一次成功的重命名
#[derive(Debug, Clone, Tabled)]
struct RenamedRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Old name")]
    old_name: String,
    #[tabled(rename = "New name")]
    new_name: String,
}

/// CSV 报告中的一条记录
#[derive(Debug, Serialize)]
struct ReportRecord<'a> {
    status: &'a str,
    source: String,
    target: String,
    detail: String,
}

impl<'a> From<&'a RenameOutcome> for ReportRecord<'a> {
    fn from(outcome: &'a RenameOutcome) -> Self {
        let detail = match outcome {
            RenameOutcome::SkippedOsError { reason, .. } => reason.clone(),
            _ => String::new(),
        };
        ReportRecord {
            status: outcome.status(),
            source: outcome.source().display().to_string(),
            target: outcome
                .target()
                .map(|t| t.display().to_string())
                .unwrap_or_default(),
            detail,
        }
    }
}

/// 成功重命名的文件表格，没有成功项时返回 None
pub fn renamed_table(report: &RewriteReport) -> Option<String> {
    let rows: Vec<RenamedRow> = report
        .outcomes
        .iter()
        .filter_map(|o| match o {
            RenameOutcome::Renamed { from, to } => Some((from, to)),
            _ => None,
        })
        .enumerate()
        .map(|(i, (from, to))| RenamedRow {
            index: i + 1,
            old_name: file_name_of(from),
            new_name: file_name_of(to),
        })
        .collect();

    if rows.is_empty() {
        return None;
    }
    Some(Table::new(&rows).to_string())
}

/// 写入逐文件 CSV 报告
pub fn write_csv(report: &RewriteReport, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(FrenameError::CsvError)?;

    for outcome in &report.outcomes {
        wtr.serialize(ReportRecord::from(outcome))?;
    }

    wtr.flush().map_err(|e| FrenameError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn sample_report() -> RewriteReport {
        let mut report = RewriteReport::default();
        report.merge(RenameOutcome::Renamed {
            from: PathBuf::from("/data/img001.png"),
            to: PathBuf::from("/data/img1.png"),
        });
        report.merge(RenameOutcome::SkippedNoMatch {
            path: PathBuf::from("/data/cover.png"),
        });
        report.merge(RenameOutcome::SkippedOsError {
            path: PathBuf::from("/data/img002.png"),
            target: PathBuf::from("/data/img2.png"),
            reason: "destination already exists".to_string(),
        });
        report
    }

    #[test]
    fn test_renamed_table_lists_only_renamed() {
        let table = renamed_table(&sample_report()).unwrap();
        assert!(table.contains("img001.png"));
        assert!(table.contains("img1.png"));
        assert!(!table.contains("cover.png"));
    }

    #[test]
    fn test_renamed_table_empty() {
        assert!(renamed_table(&RewriteReport::default()).is_none());
    }

    #[test]
    fn test_write_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.csv");

        write_csv(&sample_report(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "status,source,target,detail");
        assert_eq!(lines[1], "renamed,/data/img001.png,/data/img1.png,");
        assert_eq!(lines[2], "no-match,/data/cover.png,,");
        assert_eq!(
            lines[3],
            "os-error,/data/img002.png,/data/img2.png,destination already exists"
        );
    }
}
