//! 展示：数字声调拼音 -> 带声调符号的拼音，以及按 `StringType` 取词条的展示文本。

use jade_core::model::{StringType, Word};

use crate::tone::apply_mark;

/// 标调优先级：a > o > e > ü > i > u（`v` 等同 `ü`）。
const MARK_PRIORITY: [char; 6] = ['a', 'o', 'e', 'ü', 'i', 'u'];

/// `"ni3 hao3"` -> `"nǐ hǎo"`；按单个空格切分音节。
pub fn render_accented(numbered: &str) -> String {
    numbered
        .split(' ')
        .map(render_syllable)
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_syllable(syllable: &str) -> String {
    let mut chars = syllable.chars();
    let Some(last) = chars.next_back() else {
        return String::new();
    };
    let body = chars.as_str();
    // 末尾不是数字时丢掉最后一个字符（沿用既有的兼容行为）
    let Some(tone) = last.to_digit(10) else {
        return body.to_string();
    };
    match tone {
        5 => body.to_string(),
        1..=4 => mark_primary_vowel(body, tone as u8),
        _ => syllable.to_string(),
    }
}

fn mark_primary_vowel(body: &str, tone: u8) -> String {
    let target = MARK_PRIORITY.iter().find_map(|&vowel| {
        body.char_indices()
            .find(|&(_, ch)| ch == vowel || (vowel == 'ü' && ch == 'v'))
    });
    let Some((idx, ch)) = target else {
        return body.to_string();
    };
    let Some(marked) = apply_mark(ch, tone) else {
        return body.to_string();
    };
    let mut out = String::with_capacity(body.len() + 2);
    out.push_str(&body[..idx]);
    out.push(marked);
    out.push_str(&body[idx + ch.len_utf8()..]);
    out
}

/// 按类型取词条的展示文本。
///
/// - `English`：释义（无则空串）
/// - `Pinyin`：带声调符号的拼音
/// - `Hanzi`：简体；繁体存在且不同时追加 `(繁体)`
pub fn render_display(word: &Word, as_type: StringType) -> String {
    match as_type {
        StringType::English => word.definition.clone().unwrap_or_default(),
        StringType::Pinyin => render_accented(&word.pinyin),
        StringType::Hanzi => match &word.traditional {
            Some(traditional) if *traditional != word.simplified => {
                format!("{}({})", word.simplified, traditional)
            }
            _ => word.simplified.clone(),
        },
    }
}
