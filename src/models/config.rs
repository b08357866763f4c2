//! # 匹配配置数据模型
//!
//! 一次重写批处理所使用的查找/替换配置，在批处理期间不可变。
//!
//! ## 依赖关系
//! - 由 `cli/rename.rs` 的参数构造
//! - 被 `engine/` 使用

/// 查找替换配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchConfig {
    /// 查找内容
    pub pattern: String,

    /// 替换为（原样插入，不做大小写转换）
    pub replacement: String,

    /// 不区分大小写
    pub case_insensitive: bool,

    /// 启用正则表达式
    pub use_regex: bool,
}

impl MatchConfig {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        MatchConfig {
            pattern: pattern.into(),
            replacement: replacement.into(),
            case_insensitive: false,
            use_regex: false,
        }
    }

    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    pub fn regex(mut self, yes: bool) -> Self {
        self.use_regex = yes;
        self
    }

    /// 当前匹配模式
    pub fn mode(&self) -> MatchMode {
        match (self.use_regex, self.case_insensitive) {
            (false, false) => MatchMode::Plain,
            (false, true) => MatchMode::PlainIgnoreCase,
            (true, false) => MatchMode::Regex,
            (true, true) => MatchMode::RegexIgnoreCase,
        }
    }
}

/// 匹配模式：{纯文本, 正则} × {区分大小写, 不区分大小写}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// 替换所有出现位置
    Plain,
    /// 只替换第一个出现位置
    PlainIgnoreCase,
    Regex,
    RegexIgnoreCase,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Plain => write!(f, "plain"),
            MatchMode::PlainIgnoreCase => write!(f, "plain, ignore case (first match only)"),
            MatchMode::Regex => write!(f, "regex"),
            MatchMode::RegexIgnoreCase => write!(f, "regex, ignore case"),
        }
    }
}
