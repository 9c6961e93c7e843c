//! 拼音规范化：把用户输入（声调符号或数字声调）转成统一的数字声调 key。
//!
//! 流程：
//! 1. 声调符号 -> 基础元音 + 数字（`ǐ` -> `i3`），不带声调的 `ü` -> `v`
//! 2. 按空白切开，逐个音节把夹在韵腹/韵尾之间的数字挪到音节末尾（`ha3o` -> `hao3`）
//! 3. 单空格拼回，并在“数字后紧跟声母”处补空格（`ni3hao3` -> `ni3 hao3`）
//! 4. 补空格后新切出的音节再整理一遍
//!
//! 对已经规范的 key 是幂等的。

use jade_core::{classifier::is_tone_marked, search::Normalizer};

use crate::tone::{base_to_key, split_mark};

/// 声母字母
const INITIALS: &str = "bpmfdtnlgkhjqxzcsryw";
/// 韵腹元音
const VOWELS: &str = "aeiouüv";
/// 韵尾字母（`n`/`ng`，以及儿化的 `r`）
const CODAS: &str = "nghr";
const MAX_CODA_LEN: usize = 2;

fn is_tone_digit(ch: char) -> bool {
    ('1'..='5').contains(&ch)
}

pub fn normalize(input: &str) -> String {
    let numbered = if input.chars().any(is_tone_marked) {
        marks_to_numbers(input)
    } else {
        input.to_string()
    };
    let joined = rearrange_all(&numbered);
    rearrange_all(&insert_boundaries(&joined))
}

/// 声调符号转数字；不在表里的字符原样保留。
pub fn marks_to_numbers(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for ch in input.chars() {
        if let Some((base, tone)) = split_mark(ch) {
            out.push(base_to_key(base));
            out.push(char::from(b'0' + tone));
        } else if ch == 'ü' {
            out.push('v');
        } else {
            out.push(ch);
        }
    }
    out
}

fn rearrange_all(input: &str) -> String {
    input
        .split_whitespace()
        .map(|s| rearrange_syllable(s).unwrap_or_else(|| s.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 按 `[声母]*[韵腹(可夹一个数字)][韵尾]?[数字]?` 扫描一个音节，并把数字挪到末尾。
///
/// 不符合该结构时返回 None（调用方原样保留）。
pub fn rearrange_syllable(syllable: &str) -> Option<String> {
    let chars: Vec<char> = syllable.chars().collect();
    let mut i = 0;

    while i < chars.len() && INITIALS.contains(chars[i]) {
        i += 1;
    }
    let initials_end = i;

    let mut tone: Option<char> = None;
    let mut body = String::new();
    body.extend(&chars[..initials_end]);
    let mut vowels = 0;
    while i < chars.len() {
        let ch = chars[i];
        if VOWELS.contains(ch) {
            body.push(ch);
            vowels += 1;
        } else if is_tone_digit(ch) && vowels > 0 && tone.is_none() {
            tone = Some(ch);
        } else {
            break;
        }
        i += 1;
    }
    if vowels == 0 {
        return None;
    }

    let coda_start = i;
    while i < chars.len() && i - coda_start < MAX_CODA_LEN && CODAS.contains(chars[i]) {
        body.push(chars[i]);
        i += 1;
    }

    if tone.is_none() && i < chars.len() && is_tone_digit(chars[i]) {
        tone = Some(chars[i]);
        i += 1;
    }
    if i != chars.len() {
        return None;
    }

    body.extend(tone);
    Some(body)
}

/// 在“数字 1-5 紧跟声母”处插入空格。
pub fn insert_boundaries(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut prev_is_digit = false;
    for ch in input.chars() {
        if prev_is_digit && INITIALS.contains(ch) {
            out.push(' ');
        }
        out.push(ch);
        prev_is_digit = is_tone_digit(ch);
    }
    out
}

/// `Normalizer` 的拼音实现，供 `SearchDispatcher` 使用。
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinNormalizer;

impl PinyinNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for PinyinNormalizer {
    fn normalize(&self, input: &str) -> String {
        normalize(input)
    }
}
