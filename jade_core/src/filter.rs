//! `filter`：查询结果后处理（排序/去重/截断）。

use crate::model::Word;

/// Filter：对查询结果做后处理。
pub trait Filter: Send + Sync {
    fn apply(&self, words: Vec<Word>) -> Vec<Word>;
}

/// 默认 filter：精确匹配排前，其余按 id 升序；按 id 去重；截断到 limit。
pub struct ExactFirstTruncate<F> {
    /// 判断一条结果是否“精确匹配”
    pub is_exact: F,
    pub limit: usize,
}

impl<F> Filter for ExactFirstTruncate<F>
where
    F: Fn(&Word) -> bool + Send + Sync,
{
    fn apply(&self, mut words: Vec<Word>) -> Vec<Word> {
        let limit = self.limit.max(1);
        words.sort_by(|a, b| {
            (self.is_exact)(b)
                .cmp(&(self.is_exact)(a))
                .then_with(|| a.id.cmp(&b.id))
        });
        // 去重：同 id 可能一个精确一个不精确，排序后不一定相邻，需要全局去重
        let mut seen = std::collections::HashSet::new();
        words.retain(|w| seen.insert(w.id));
        words.truncate(limit);
        words
    }
}
