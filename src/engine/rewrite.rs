//! # 批量重写
//!
//! 顺序处理待处理列表中的每个路径：拆分目录与文件名、计算新文件名、重命名。
//!
//! ## 功能
//! - 无匹配或替换后文件名不变：跳过，不做任何文件系统调用
//! - 重命名失败：记录为跳过并继续处理后续文件
//! - 引擎不持有状态，也不修改待处理列表
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `engine/matcher.rs`, `engine/backend.rs`

use super::backend::RenameBackend;
use super::matcher::Matcher;
use crate::models::{RenameOutcome, RewriteReport};

use std::path::{Path, PathBuf};

/// 对一批路径执行查找替换重命名
///
/// 匹配器须先由 `Matcher::compile` 构造，配置错误因此在触碰任何文件之前就已报告。
/// 每处理完一个路径回调一次（用于进度条和逐文件输出）。
pub fn rewrite_with<B, F>(
    paths: &[PathBuf],
    matcher: &Matcher,
    backend: &mut B,
    mut on_outcome: F,
) -> RewriteReport
where
    B: RenameBackend,
    F: FnMut(&RenameOutcome),
{
    let mut report = RewriteReport::default();
    for path in paths {
        let outcome = process_one(path, matcher, backend);
        on_outcome(&outcome);
        report.merge(outcome);
    }
    report
}

/// 处理单个路径
fn process_one<B: RenameBackend>(path: &Path, matcher: &Matcher, backend: &mut B) -> RenameOutcome {
    let Some(new_name) = new_file_name(path, matcher) else {
        return RenameOutcome::SkippedNoMatch {
            path: path.to_path_buf(),
        };
    };

    if new_name.is_empty() {
        return RenameOutcome::SkippedOsError {
            path: path.to_path_buf(),
            target: path.parent().unwrap_or(Path::new("")).to_path_buf(),
            reason: "new file name is empty".to_string(),
        };
    }

    let target = path.with_file_name(&new_name);
    if target == path {
        return RenameOutcome::SkippedNoMatch {
            path: path.to_path_buf(),
        };
    }

    match backend.rename(path, &target) {
        Ok(()) => RenameOutcome::Renamed {
            from: path.to_path_buf(),
            to: target,
        },
        Err(e) => RenameOutcome::SkippedOsError {
            path: path.to_path_buf(),
            target,
            reason: e.to_string(),
        },
    }
}

/// 计算新文件名；没有匹配时返回 None
fn new_file_name(path: &Path, matcher: &Matcher) -> Option<String> {
    // 非 UTF-8 文件名无法与文本模式匹配
    let name = path.file_name()?.to_str()?;
    matcher.rewrite_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FsBackend;
    use crate::error::{FrenameError, Result};
    use crate::models::MatchConfig;

    use std::fs;
    use std::io;
    use tempfile::tempdir;

    /// 只记录调用、不触碰磁盘的后端
    #[derive(Default)]
    struct RecordingBackend {
        calls: Vec<(PathBuf, PathBuf)>,
        fail_on: Option<PathBuf>,
    }

    impl RenameBackend for RecordingBackend {
        fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
            self.calls.push((from.to_path_buf(), to.to_path_buf()));
            if self.fail_on.as_deref() == Some(from) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            Ok(())
        }
    }

    fn rewrite<B: RenameBackend>(
        paths: &[PathBuf],
        config: &MatchConfig,
        backend: &mut B,
    ) -> Result<RewriteReport> {
        let matcher = Matcher::compile(config)?;
        Ok(rewrite_with(paths, &matcher, backend, |_| {}))
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|n| Path::new("/data").join(n)).collect()
    }

    #[test]
    fn test_no_match_makes_no_filesystem_call() {
        let mut backend = RecordingBackend::default();
        let report = rewrite(
            &paths(&["readme.md", "notes.txt"]),
            &MatchConfig::new("zzz", "y"),
            &mut backend,
        )
        .unwrap();

        assert!(backend.calls.is_empty());
        assert_eq!(report.renamed, 0);
        assert_eq!(report.skipped, 2);
        assert!(report
            .outcomes
            .iter()
            .all(|o| matches!(o, RenameOutcome::SkippedNoMatch { .. })));
    }

    #[test]
    fn test_plain_rename_target() {
        let mut backend = RecordingBackend::default();
        let report = rewrite(
            &paths(&["a_x_x_b.txt"]),
            &MatchConfig::new("x", "y"),
            &mut backend,
        )
        .unwrap();

        assert_eq!(report.renamed, 1);
        assert_eq!(
            report.outcomes[0],
            RenameOutcome::Renamed {
                from: PathBuf::from("/data/a_x_x_b.txt"),
                to: PathBuf::from("/data/a_y_y_b.txt"),
            }
        );
    }

    #[test]
    fn test_only_basename_is_rewritten() {
        let mut backend = RecordingBackend::default();
        let input = vec![PathBuf::from("/x_dir/x_file.txt")];
        let report = rewrite(&input, &MatchConfig::new("x", "y"), &mut backend).unwrap();

        assert_eq!(
            report.outcomes[0].target(),
            Some(Path::new("/x_dir/y_file.txt"))
        );
    }

    #[test]
    fn test_identity_substitution_is_skipped() {
        let mut backend = RecordingBackend::default();
        let report = rewrite(
            &paths(&["abc.txt"]),
            &MatchConfig::new("abc", "abc"),
            &mut backend,
        )
        .unwrap();

        assert!(backend.calls.is_empty());
        assert_eq!(report.renamed, 0);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_regex_identical_output_is_skipped() {
        let mut backend = RecordingBackend::default();
        let report = rewrite(
            &paths(&["img1.png"]),
            &MatchConfig::new(r"\d+", "1").regex(true),
            &mut backend,
        )
        .unwrap();

        assert!(backend.calls.is_empty());
        assert_eq!(report.skipped, 1);
        assert!(matches!(
            report.outcomes[0],
            RenameOutcome::SkippedNoMatch { .. }
        ));
    }

    #[test]
    fn test_empty_new_name_is_not_attempted() {
        let mut backend = RecordingBackend::default();
        let report = rewrite(
            &paths(&["abc"]),
            &MatchConfig::new("abc", ""),
            &mut backend,
        )
        .unwrap();

        assert!(backend.calls.is_empty());
        assert_eq!(report.skipped, 1);
        assert!(matches!(
            report.outcomes[0],
            RenameOutcome::SkippedOsError { .. }
        ));
    }

    #[test]
    fn test_backend_failure_does_not_stop_batch() {
        let input = paths(&["x1.txt", "x2.txt", "x3.txt"]);
        let mut backend = RecordingBackend {
            fail_on: Some(input[1].clone()),
            ..Default::default()
        };
        let report = rewrite(&input, &MatchConfig::new("x", "y"), &mut backend).unwrap();

        assert_eq!(backend.calls.len(), 3);
        assert_eq!(report.renamed, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.outcomes[1].status(), "os-error");
    }

    #[test]
    fn test_config_error_before_any_file() {
        let mut backend = RecordingBackend::default();
        let err = rewrite(
            &paths(&["a(b.txt"]),
            &MatchConfig::new("(", "x").regex(true),
            &mut backend,
        )
        .unwrap_err();

        assert!(matches!(err, FrenameError::InvalidRegex { .. }));
        assert!(backend.calls.is_empty());
    }

    #[test]
    fn test_callback_sees_every_outcome_in_order() {
        let mut backend = RecordingBackend::default();
        let matcher = Matcher::compile(&MatchConfig::new("x", "y")).unwrap();
        let mut seen = Vec::new();
        rewrite_with(
            &paths(&["x.txt", "a.txt"]),
            &matcher,
            &mut backend,
            |o| seen.push(o.status()),
        );

        assert_eq!(seen, vec!["renamed", "no-match"]);
    }

    #[test]
    fn test_existing_destination_partial_success_on_disk() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("draft_a.txt");
        let blocked = dir.path().join("draft_b.txt");
        let last = dir.path().join("draft_c.txt");
        for p in [&first, &blocked, &last] {
            fs::write(p, "data").unwrap();
        }
        fs::write(dir.path().join("final_b.txt"), "keep").unwrap();

        let input = vec![first.clone(), blocked.clone(), last.clone()];
        let report = rewrite(&input, &MatchConfig::new("draft", "final"), &mut FsBackend).unwrap();

        assert_eq!(report.renamed, 2);
        assert_eq!(report.skipped, 1);
        assert!(dir.path().join("final_a.txt").exists());
        assert!(dir.path().join("final_c.txt").exists());
        assert!(blocked.exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("final_b.txt")).unwrap(),
            "keep"
        );
    }

    #[test]
    fn test_case_insensitive_on_disk() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Photo_ABC_abc.jpg");
        fs::write(&file, "jpg").unwrap();

        let report = rewrite(
            &[file],
            &MatchConfig::new("abc", "X").case_insensitive(true),
            &mut FsBackend,
        )
        .unwrap();

        assert_eq!(report.renamed, 1);
        assert!(dir.path().join("Photo_X_abc.jpg").exists());
    }
}
