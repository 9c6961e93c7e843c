//! `search`：查询分发。
//!
//! 流水线：小写化 -> classifier（判定类型）-> normalizer（仅拼音）-> store（三种查询之一）。
//! 分发器本身不缓存、不去重，直接转交存储返回的结果流。

use tracing::debug;

use crate::{
    classifier::classify,
    model::StringType,
    store::{WordStore, WordStream},
};

/// 纯接口：把拼音查询串转成规范化的数字声调 key。
///
/// 备注：具体实现在 `jade_pinyin::PinyinNormalizer`。
pub trait Normalizer: Send + Sync {
    fn normalize(&self, input: &str) -> String;
}

/// 查询分发器。
pub struct SearchDispatcher<S, N> {
    /// 词库（三种查询入口）
    store: S,
    /// 拼音规范化
    normalizer: N,
}

impl<S, N> SearchDispatcher<S, N>
where
    S: WordStore,
    N: Normalizer,
{
    pub fn new(store: S, normalizer: N) -> Self {
        Self { store, normalizer }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 判定查询类型并给出对应的查询 key（不发起查询）。
    pub fn classify_query(&self, query: &str) -> (StringType, String) {
        let query = query.to_lowercase();
        let kind = classify(&query);
        let key = match kind {
            StringType::Hanzi => query.chars().filter(|c| !c.is_whitespace()).collect(),
            StringType::Pinyin => self.normalizer.normalize(&query),
            StringType::English => query,
        };
        (kind, key)
    }

    /// 执行查询，返回存储的结果流。
    pub fn search(&self, query: &str) -> WordStream {
        let (kind, key) = self.classify_query(query);
        debug!(query, %kind, key = %key, "dispatching search");
        match kind {
            StringType::Hanzi => self.store.lookup_by_hanzi(&key),
            StringType::Pinyin => self.store.lookup_by_pinyin(&key),
            StringType::English => self.store.lookup_by_definition(&key),
        }
    }
}
