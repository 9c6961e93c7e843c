//! 内存词库：从 TSV / CC-CEDICT 加载，查询返回“活”的结果流。

pub mod cedict;
pub mod word_list;

use std::{
    fs,
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use jade_core::{
    error::{Error, Result},
    filter::{ExactFirstTruncate, Filter},
    model::Word,
    store::{WordStore, WordStream},
};
use jade_pinyin::normalize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub use word_list::MemoryWordListStore;

/// 默认每次查询最多返回多少条
pub const DEFAULT_RESULT_LIMIT: usize = 50;

/// 一次查询的匹配规则（匹配语义由词库决定）。
#[derive(Debug, Clone)]
enum Query {
    /// 简体或繁体包含 key
    Hanzi(String),
    /// 拼音等于 key，或以 `key + " "` 开头（按音节前缀）
    Pinyin(String),
    /// 释义包含 key（不区分大小写）
    Definition(String),
}

impl Query {
    fn matches(&self, word: &Word) -> bool {
        match self {
            Query::Hanzi(key) => {
                word.simplified.contains(key.as_str())
                    || word
                        .traditional
                        .as_deref()
                        .is_some_and(|t| t.contains(key.as_str()))
            }
            Query::Pinyin(key) => {
                word.pinyin == *key
                    || word
                        .pinyin
                        .strip_prefix(key.as_str())
                        .is_some_and(|rest| rest.starts_with(' '))
            }
            Query::Definition(key) => word
                .definition
                .as_deref()
                .map(str::to_lowercase)
                .is_some_and(|d| d.contains(key.as_str())),
        }
    }

    fn is_exact(&self, word: &Word) -> bool {
        match self {
            Query::Hanzi(key) => {
                word.simplified == *key || word.traditional.as_deref() == Some(key.as_str())
            }
            Query::Pinyin(key) => word.pinyin == *key,
            Query::Definition(key) => word
                .definition
                .as_deref()
                .is_some_and(|d| d.split("; ").any(|g| g.to_lowercase() == *key)),
        }
    }

    fn collect(&self, words: &[Word], limit: usize) -> Vec<Word> {
        let hits: Vec<Word> = words.iter().filter(|w| self.matches(w)).cloned().collect();
        ExactFirstTruncate {
            is_exact: |w: &Word| self.is_exact(w),
            limit,
        }
        .apply(hits)
    }
}

/// 内存词库。
///
/// 词条快照放在 `watch` 里：每个查询流订阅一次，词库变化后重新过滤并推送。
#[derive(Debug)]
pub struct MemoryWordStore {
    words: watch::Sender<Arc<Vec<Word>>>,
    next_id: AtomicU64,
    /// 单次查询结果上限（>= 1）
    result_limit: usize,
}

impl Default for MemoryWordStore {
    fn default() -> Self {
        let (words, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            words,
            next_id: AtomicU64::new(1),
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置单次查询结果上限；0 会被提升为 1。
    pub fn result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit.max(1);
        self
    }

    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let store = Self::new();
        store.extend(words);
        store
    }

    /// TSV 格式：
    ///
    /// - `simplified<TAB>traditional<TAB>pinyin<TAB>definition`
    /// - traditional / definition 可为空
    /// - 允许 `#` 开头注释行
    ///
    /// pinyin 可以写数字声调或声调符号，入库前统一规范化。
    pub fn from_tsv_str(s: &str) -> Result<Self> {
        let mut words = Vec::new();
        for (idx, line) in s.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let mut it = line.split('\t').map(str::trim);
            let simplified = it.next().unwrap_or("");
            let traditional = it.next().unwrap_or("");
            let pinyin = it.next().unwrap_or("");
            let definition = it.next().unwrap_or("");
            if simplified.is_empty() || pinyin.is_empty() {
                return Err(Error::Parse {
                    line: idx + 1,
                    reason: "missing simplified or pinyin".to_string(),
                });
            }
            let mut word = Word::new(simplified, pinyin);
            if !traditional.is_empty() && traditional != simplified {
                word.traditional = Some(traditional.to_string());
            }
            if !definition.is_empty() {
                word.definition = Some(definition.to_string());
            }
            words.push(word);
        }
        Ok(Self::from_words(words))
    }

    pub fn from_tsv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)?;
        let store = Self::from_tsv_str(&s)?;
        info!(path = %path.display(), words = store.len(), "loaded TSV dictionary");
        Ok(store)
    }

    /// CC-CEDICT 格式；无法解析的行记录 warn 后跳过。
    pub fn from_cedict_str(s: &str) -> Self {
        let mut words = Vec::new();
        for (idx, line) in s.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match cedict::parse_line(trimmed) {
                Some(word) => words.push(word),
                None => warn!(line = idx + 1, "skipping malformed CC-CEDICT line"),
            }
        }
        Self::from_words(words)
    }

    pub fn from_cedict_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)?;
        let store = Self::from_cedict_str(&s);
        info!(path = %path.display(), words = store.len(), "loaded CC-CEDICT dictionary");
        Ok(store)
    }

    /// 加入一条词条，返回分配的 id；所有查询流会收到新结果。
    pub fn insert(&self, word: Word) -> u64 {
        let word = self.prepare(word);
        let id = word.id;
        self.words.send_modify(|words| Arc::make_mut(words).push(word));
        id
    }

    /// 批量加入，只通知一次。
    pub fn extend(&self, words: impl IntoIterator<Item = Word>) {
        let prepared: Vec<Word> = words.into_iter().map(|w| self.prepare(w)).collect();
        if prepared.is_empty() {
            return;
        }
        self.words
            .send_modify(|words| Arc::make_mut(words).extend(prepared));
    }

    pub fn len(&self) -> usize {
        self.words.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn word_by_id(&self, id: u64) -> Option<Word> {
        self.words.borrow().iter().find(|w| w.id == id).cloned()
    }

    /// 按给定 id 顺序取词条（例如展示词表内容），不存在的 id 跳过。
    pub fn words_by_ids(&self, ids: &[u64]) -> Vec<Word> {
        let words = self.words.borrow();
        ids.iter()
            .filter_map(|id| words.iter().find(|w| w.id == *id).cloned())
            .collect()
    }

    /// 分配 id，并把拼音转成与查询 key 一致的规范形式。
    fn prepare(&self, mut word: Word) -> Word {
        word.id = self.next_id.fetch_add(1, Ordering::Relaxed);
        word.pinyin = normalize(&word.pinyin.to_lowercase());
        word
    }

    fn live(&self, query: Query) -> WordStream {
        let mut rx = self.words.subscribe();
        let limit = self.result_limit;
        debug!(?query, "subscribing lookup");
        Box::pin(async_stream::stream! {
            loop {
                let snapshot = rx.borrow_and_update().clone();
                yield query.collect(&snapshot, limit);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        })
    }
}

impl WordStore for MemoryWordStore {
    fn lookup_by_hanzi(&self, key: &str) -> WordStream {
        self.live(Query::Hanzi(key.to_string()))
    }

    fn lookup_by_pinyin(&self, normalized_key: &str) -> WordStream {
        self.live(Query::Pinyin(normalized_key.to_string()))
    }

    fn lookup_by_definition(&self, substring: &str) -> WordStream {
        self.live(Query::Definition(substring.to_lowercase()))
    }
}
