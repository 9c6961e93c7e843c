use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 查询串的类型（由 `classifier::classify` 判定）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StringType {
    /// 汉字（简体/繁体）
    Hanzi,
    /// 拼音（声调符号或数字声调）
    Pinyin,
    /// 英文释义
    English,
}

impl fmt::Display for StringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StringType::Hanzi => "Hanzi",
            StringType::Pinyin => "Pinyin",
            StringType::English => "English",
        };
        f.write_str(label)
    }
}

/// 词条（只读）。
///
/// 注意：`pinyin` 是**数字声调**的规范形式（例如 `"ni3 hao3"`），
/// 展示时由 `jade_pinyin::render` 转成带声调符号的形式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// 词库分配的 id（词表引用它）
    pub id: u64,
    /// 简体
    pub simplified: String,
    /// 繁体；与简体相同或不适用时为 None
    pub traditional: Option<String>,
    /// 数字声调拼音，音节间单空格
    pub pinyin: String,
    /// 英文释义
    pub definition: Option<String>,
}

impl Word {
    pub fn new(simplified: impl Into<String>, pinyin: impl Into<String>) -> Self {
        Self {
            id: 0,
            simplified: simplified.into(),
            traditional: None,
            pinyin: pinyin.into(),
            definition: None,
        }
    }

    pub fn traditional(mut self, traditional: impl Into<String>) -> Self {
        self.traditional = Some(traditional.into());
        self
    }

    pub fn definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }
}

/// 用户自建词表。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    /// 词条 id，保持加入顺序且不重复
    pub word_ids: Vec<u64>,
    pub created_at: DateTime<Utc>,
}

impl WordList {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            word_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// 词表排序方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    TitleAsc,
    TitleDesc,
    DateRecent,
    DateLeastRecent,
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortOption::TitleAsc => "Title asc",
            SortOption::TitleDesc => "Title desc",
            SortOption::DateRecent => "Date recent",
            SortOption::DateLeastRecent => "Date least recent",
        };
        f.write_str(label)
    }
}
