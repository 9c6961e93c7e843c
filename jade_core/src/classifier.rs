//! `classifier`：判定查询串是汉字、拼音还是英文。
//!
//! 判定顺序（先命中先返回）：
//! - 含 CJK 字符（U+3400..=U+9FBF）-> `Hanzi`
//! - 含“字母 + 1-5 数字”或带声调符号的元音 -> `Pinyin`
//! - 其他（包括空串）-> `English`
//!
//! 这是启发式判定，不是语法；只要有一处子串满足即可。

use crate::model::StringType;

/// 带声调符号的元音（外加不带声调的 `ü`）。
pub const TONE_MARKED_VOWELS: &str = "āáǎàēéěèīíǐìōóǒòūúǔùǖǘǚǜü";

pub fn is_hanzi(ch: char) -> bool {
    ('\u{3400}'..='\u{9FBF}').contains(&ch)
}

pub fn is_tone_marked(ch: char) -> bool {
    TONE_MARKED_VOWELS.contains(ch)
}

pub fn classify(input: &str) -> StringType {
    let input = input.trim();
    if input.is_empty() {
        return StringType::English;
    }
    if input.chars().any(is_hanzi) {
        return StringType::Hanzi;
    }
    if has_numbered_syllable(input) || input.chars().any(is_tone_marked) {
        return StringType::Pinyin;
    }
    StringType::English
}

/// 是否存在“字母（含 ü/Ü）紧跟 1-5”的片段，例如 `hao3`。
fn has_numbered_syllable(input: &str) -> bool {
    let mut prev_is_letter = false;
    for ch in input.chars() {
        if prev_is_letter && ('1'..='5').contains(&ch) {
            return true;
        }
        prev_is_letter = ch.is_ascii_alphabetic() || ch == 'ü' || ch == 'Ü';
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hanzi() {
        assert_eq!(classify("你好"), StringType::Hanzi);
        assert_eq!(classify("  书 "), StringType::Hanzi);
        // 混合输入：汉字优先
        assert_eq!(classify("ni3 好"), StringType::Hanzi);
        assert_eq!(classify("hello 世界"), StringType::Hanzi);
    }

    #[test]
    fn numbered_pinyin() {
        assert_eq!(classify("ni3 hao3"), StringType::Pinyin);
        assert_eq!(classify("ni3hao3"), StringType::Pinyin);
        assert_eq!(classify("lü4"), StringType::Pinyin);
        assert_eq!(classify("MA5"), StringType::Pinyin);
    }

    #[test]
    fn tone_marked_pinyin() {
        assert_eq!(classify("nǐ hǎo"), StringType::Pinyin);
        assert_eq!(classify("hǎo"), StringType::Pinyin);
        assert_eq!(classify("lü"), StringType::Pinyin);
    }

    #[test]
    fn english() {
        assert_eq!(classify("hello"), StringType::English);
        assert_eq!(classify("to be"), StringType::English);
        // 数字前不是字母
        assert_eq!(classify("3 apples"), StringType::English);
        // 6-9 不是声调
        assert_eq!(classify("abc6"), StringType::English);
    }

    #[test]
    fn empty_is_english() {
        assert_eq!(classify(""), StringType::English);
        assert_eq!(classify("   \t"), StringType::English);
    }

    #[test]
    fn cjk_range_bounds() {
        assert!(is_hanzi('\u{3400}'));
        assert!(is_hanzi('\u{9FBF}'));
        assert!(!is_hanzi('\u{9FC0}'));
        assert!(!is_hanzi('\u{33FF}'));
    }
}
