//! # 文件名匹配器
//!
//! 把 `MatchConfig` 编译成可重复使用的匹配器，并对单个文件名做替换。
//!
//! 替换策略：
//! - 纯文本、区分大小写：替换所有出现位置
//! - 纯文本、不区分大小写：只替换第一个出现位置，其余部分保持原有大小写
//! - 正则：替换所有不重叠的匹配，替换文本支持 `$1` / `${name}` 分组引用
//!
//! 纯文本模式下 "全部" 与 "仅第一个" 的差异是沿用下来的既有行为，不要统一。
//!
//! ## 依赖关系
//! - 被 `engine/rewrite.rs` 使用
//! - 使用 `regex` crate

use crate::error::{FrenameError, Result};
use crate::models::MatchConfig;

use regex::{Regex, RegexBuilder};

/// 编译后的匹配器
#[derive(Debug, Clone)]
pub enum Matcher {
    Plain {
        pattern: String,
        replacement: String,
    },
    PlainIgnoreCase {
        /// 已逐字符转为小写的查找内容
        needle: String,
        replacement: String,
    },
    Regex {
        regex: Regex,
        replacement: String,
    },
}

impl Matcher {
    /// 编译匹配配置
    pub fn compile(config: &MatchConfig) -> Result<Self> {
        if config.pattern.is_empty() {
            return Err(FrenameError::EmptyPattern);
        }

        let replacement = config.replacement.clone();

        if config.use_regex {
            let regex = RegexBuilder::new(&config.pattern)
                .case_insensitive(config.case_insensitive)
                .build()
                .map_err(|e| FrenameError::InvalidRegex {
                    pattern: config.pattern.clone(),
                    reason: e.to_string(),
                })?;
            return Ok(Matcher::Regex { regex, replacement });
        }

        if config.case_insensitive {
            Ok(Matcher::PlainIgnoreCase {
                needle: lowercase_chars(&config.pattern),
                replacement,
            })
        } else {
            Ok(Matcher::Plain {
                pattern: config.pattern.clone(),
                replacement,
            })
        }
    }

    /// 计算新文件名，没有匹配时返回 None
    ///
    /// 有匹配但替换后与原名相同时仍返回 Some，是否跳过由调用方判断。
    pub fn rewrite_name(&self, name: &str) -> Option<String> {
        match self {
            Matcher::Plain {
                pattern,
                replacement,
            } => {
                if name.contains(pattern.as_str()) {
                    Some(name.replace(pattern.as_str(), replacement))
                } else {
                    None
                }
            }
            Matcher::PlainIgnoreCase {
                needle,
                replacement,
            } => splice_first_ignore_case(name, needle, replacement),
            Matcher::Regex { regex, replacement } => {
                if regex.is_match(name) {
                    Some(regex.replace_all(name, replacement.as_str()).into_owned())
                } else {
                    None
                }
            }
        }
    }
}

/// 逐字符转小写
///
/// 不使用 `str::to_lowercase`，它对词尾的 Σ 有上下文相关的处理，
/// 会与 `splice_first_ignore_case` 里的偏移表对不上。
fn lowercase_chars(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// 在小写化的文件名中找到第一个匹配，把替换文本拼接回原大小写的文件名
fn splice_first_ignore_case(name: &str, needle: &str, replacement: &str) -> Option<String> {
    // (小写串中的偏移, 原文件名中的偏移)，每个原字符一项
    let mut offsets: Vec<(usize, usize)> = Vec::with_capacity(name.len());
    let mut lowered = String::with_capacity(name.len());

    for (idx, ch) in name.char_indices() {
        offsets.push((lowered.len(), idx));
        lowered.extend(ch.to_lowercase());
    }

    let pos = lowered.find(needle)?;
    let end = pos + needle.len();

    // 小写展开为多个字符时，匹配边界可能落在展开中间，向外扩到整个原字符
    let start = offsets
        .iter()
        .rev()
        .find(|(low, _)| *low <= pos)
        .map(|&(_, orig)| orig)
        .unwrap_or(0);
    let stop = offsets
        .iter()
        .find(|(low, _)| *low >= end)
        .map(|&(_, orig)| orig)
        .unwrap_or(name.len());

    let mut result = String::with_capacity(name.len() + replacement.len());
    result.push_str(&name[..start]);
    result.push_str(replacement);
    result.push_str(&name[stop..]);
    Some(result)
}
