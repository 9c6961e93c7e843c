use futures::StreamExt;
use jade_core::{
    model::{StringType, Word, WordList},
    search::SearchDispatcher,
    store::WordListStore,
};
use jade_dict::{MemoryWordListStore, MemoryWordStore};
use jade_pinyin::{PinyinNormalizer, render_display};

const TSV: &str = "\
你好\t\tnǐ hǎo\thello; hi
你\t\tni3\tyou
好\t\thao3\tgood; well
书\t書\tshu1\tbook
书包\t書包\tshu1 bao1\tschoolbag
中国\t中國\tzhong1guo2\tChina
绿\t綠\tlü4\tgreen
";

fn dispatcher() -> SearchDispatcher<MemoryWordStore, PinyinNormalizer> {
    let store = MemoryWordStore::from_tsv_str(TSV).unwrap();
    SearchDispatcher::new(store, PinyinNormalizer::new())
}

async fn first(d: &SearchDispatcher<MemoryWordStore, PinyinNormalizer>, q: &str) -> Vec<String> {
    let mut s = d.search(q);
    s.next()
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|w| w.simplified)
        .collect()
}

#[tokio::test]
async fn hanzi_search() {
    let d = dispatcher();
    assert_eq!(first(&d, "书").await, vec!["书", "书包"]);
    assert_eq!(first(&d, "書 包").await, vec!["书包"]);
}

#[tokio::test]
async fn tone_marks_and_numbers_hit_same_words() {
    let d = dispatcher();
    let marked = first(&d, "nǐ hǎo").await;
    let numbered = first(&d, "ni3hao3").await;
    assert_eq!(marked, vec!["你好"]);
    assert_eq!(marked, numbered);
    assert_eq!(first(&d, "Zhōng Guó").await, vec!["中国"]);
    assert_eq!(first(&d, "lǜ").await, vec!["绿"]);
}

#[tokio::test]
async fn pinyin_prefix_by_syllable() {
    let d = dispatcher();
    // 精确匹配排在前面
    assert_eq!(first(&d, "ni3").await, vec!["你", "你好"]);
    assert_eq!(first(&d, "shu1").await, vec!["书", "书包"]);
}

#[tokio::test]
async fn english_search() {
    let d = dispatcher();
    assert_eq!(first(&d, "GOOD").await, vec!["好"]);
    assert_eq!(first(&d, "book").await, vec!["书"]);
    assert!(first(&d, "nothing here").await.is_empty());
    // 空查询：所有带释义的词条
    assert_eq!(first(&d, "").await.len(), 7);
}

#[tokio::test]
async fn results_are_live() {
    let d = dispatcher();
    let mut s = d.search("apple");
    assert!(s.next().await.unwrap().is_empty());

    d.store()
        .insert(Word::new("苹果", "píng guǒ").traditional("蘋果").definition("apple"));
    let words = s.next().await.unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].pinyin, "ping2 guo3");
    assert_eq!(render_display(&words[0], StringType::Pinyin), "píng guǒ");
    assert_eq!(render_display(&words[0], StringType::Hanzi), "苹果(蘋果)");
}

#[tokio::test]
async fn result_limit_applies() {
    let store = MemoryWordStore::from_tsv_str(TSV).unwrap().result_limit(2);
    let d = SearchDispatcher::new(store, PinyinNormalizer::new());
    assert_eq!(first(&d, "").await.len(), 2);
}

#[tokio::test]
async fn word_list_stream_follows_changes() {
    let store = MemoryWordListStore::new();
    let mut lists = store.all_word_lists();
    assert!(lists.next().await.unwrap().is_empty());

    store.insert_word_list(WordList::new(1, "HSK 1"));
    let snapshot = lists.next().await.unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title, "HSK 1");

    store.delete_word_list(1).unwrap();
    assert!(lists.next().await.unwrap().is_empty());
}
