//! 内存词表存储：增删改查 + 排序。

use std::{collections::BTreeMap, sync::Arc};

use jade_core::{
    error::{Error, Result},
    model::{SortOption, WordList},
    store::{WordListStore, WordListStream},
};
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug)]
pub struct MemoryWordListStore {
    lists: watch::Sender<Arc<BTreeMap<u64, WordList>>>,
}

impl Default for MemoryWordListStore {
    fn default() -> Self {
        let (lists, _) = watch::channel(Arc::new(BTreeMap::new()));
        Self { lists }
    }
}

impl MemoryWordListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按 `option` 排序后的全部词表。
    pub fn sorted(&self, option: SortOption) -> Vec<WordList> {
        let mut lists: Vec<WordList> = self.lists.borrow().values().cloned().collect();
        sort_lists(&mut lists, option);
        lists
    }

    /// 向词表追加词条；已存在时不重复添加。
    pub fn add_word(&self, list_id: u64, word_id: u64) -> Result<()> {
        self.modify(list_id, |list| {
            if !list.word_ids.contains(&word_id) {
                list.word_ids.push(word_id);
            }
        })
    }

    pub fn remove_word(&self, list_id: u64, word_id: u64) -> Result<()> {
        self.modify(list_id, |list| list.word_ids.retain(|id| *id != word_id))
    }

    fn modify(&self, id: u64, f: impl FnOnce(&mut WordList)) -> Result<()> {
        let found = self
            .lists
            .send_if_modified(|lists| match Arc::make_mut(lists).get_mut(&id) {
                Some(list) => {
                    f(list);
                    true
                }
                None => false,
            });
        if found {
            Ok(())
        } else {
            Err(Error::NotFound(format!("word list {id}")))
        }
    }
}

fn sort_lists(lists: &mut [WordList], option: SortOption) {
    match option {
        SortOption::TitleAsc => lists.sort_by(|a, b| a.title.cmp(&b.title)),
        SortOption::TitleDesc => lists.sort_by(|a, b| b.title.cmp(&a.title)),
        SortOption::DateRecent => lists.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::DateLeastRecent => lists.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
}

impl WordListStore for MemoryWordListStore {
    fn all_word_lists(&self) -> WordListStream {
        let mut rx = self.lists.subscribe();
        Box::pin(async_stream::stream! {
            loop {
                let snapshot = rx.borrow_and_update().clone();
                yield snapshot.values().cloned().collect::<Vec<_>>();
                if rx.changed().await.is_err() {
                    break;
                }
            }
        })
    }

    fn insert_word_list(&self, list: WordList) {
        debug!(id = list.id, title = %list.title, "insert word list");
        self.lists.send_modify(|lists| {
            Arc::make_mut(lists).insert(list.id, list);
        });
    }

    fn update_word_list(&self, list: WordList) -> Result<()> {
        let id = list.id;
        self.modify(id, |current| *current = list)
    }

    fn delete_word_list(&self, id: u64) -> Result<()> {
        let removed = self
            .lists
            .send_if_modified(|lists| Arc::make_mut(lists).remove(&id).is_some());
        if removed {
            Ok(())
        } else {
            Err(Error::NotFound(format!("word list {id}")))
        }
    }

    fn word_list_by_id(&self, id: u64) -> Option<WordList> {
        self.lists.borrow().get(&id).cloned()
    }
}
