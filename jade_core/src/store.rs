//! 存储抽象：core 不关心词条来自文件/内存/数据库。
//!
//! 约定：
//! - 查询返回“活”的结果流：立即给出当前结果，存储变化后再次给出
//! - 丢弃流即取消订阅；取消/替换旧查询由存储实现负责

use std::pin::Pin;

use futures::Stream;

use crate::{
    error::Result,
    model::{Word, WordList},
};

/// 词条结果流。
pub type WordStream = Pin<Box<dyn Stream<Item = Vec<Word>> + Send>>;

/// 词表结果流。
pub type WordListStream = Pin<Box<dyn Stream<Item = Vec<WordList>> + Send>>;

/// 词库：三种查询入口，匹配语义由实现决定。
pub trait WordStore: Send + Sync {
    /// 按简体/繁体查询（key 已去掉空白）。
    fn lookup_by_hanzi(&self, key: &str) -> WordStream;

    /// 按规范化后的数字声调拼音查询（例如 `"ni3 hao3"`）。
    fn lookup_by_pinyin(&self, normalized_key: &str) -> WordStream;

    /// 按释义子串查询。
    fn lookup_by_definition(&self, substring: &str) -> WordStream;
}

/// 用户词表存储（普通增删改查）。
pub trait WordListStore: Send + Sync {
    fn all_word_lists(&self) -> WordListStream;

    /// 插入；id 冲突时覆盖。
    fn insert_word_list(&self, list: WordList);

    /// 更新；不存在时返回 `Error::NotFound`。
    fn update_word_list(&self, list: WordList) -> Result<()>;

    /// 删除；不存在时返回 `Error::NotFound`。
    fn delete_word_list(&self, id: u64) -> Result<()>;

    fn word_list_by_id(&self, id: u64) -> Option<WordList>;
}
