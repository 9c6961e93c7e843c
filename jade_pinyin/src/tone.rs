//! 声调符号 <-> 数字声调 对照表（双向查表）。

/// 每个基础元音对应的 1-4 声写法。
///
/// `ü` 在数字声调里统一写成 `v`（见 `base_to_key`）。
pub const TONE_TABLE: [(char, [char; 4]); 6] = [
    ('a', ['ā', 'á', 'ǎ', 'à']),
    ('e', ['ē', 'é', 'ě', 'è']),
    ('i', ['ī', 'í', 'ǐ', 'ì']),
    ('o', ['ō', 'ó', 'ǒ', 'ò']),
    ('u', ['ū', 'ú', 'ǔ', 'ù']),
    ('ü', ['ǖ', 'ǘ', 'ǚ', 'ǜ']),
];

/// 带声调符号的元音 -> (基础元音, 声调 1-4)。
pub fn split_mark(ch: char) -> Option<(char, u8)> {
    TONE_TABLE.iter().find_map(|(base, marks)| {
        marks
            .iter()
            .position(|&m| m == ch)
            .map(|i| (*base, i as u8 + 1))
    })
}

/// (基础元音, 声调 1-4) -> 带声调符号的元音；`v` 视为 `ü`。
pub fn apply_mark(base: char, tone: u8) -> Option<char> {
    if !(1..=4).contains(&tone) {
        return None;
    }
    let base = if base == 'v' { 'ü' } else { base };
    TONE_TABLE
        .iter()
        .find(|(b, _)| *b == base)
        .map(|(_, marks)| marks[usize::from(tone - 1)])
}

/// 基础元音在规范 key 里的写法（`ü` -> `v`）。
pub fn base_to_key(base: char) -> char {
    if base == 'ü' { 'v' } else { base }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_every_mark() {
        for (base, marks) in TONE_TABLE {
            for (i, m) in marks.iter().enumerate() {
                assert_eq!(split_mark(*m), Some((base, i as u8 + 1)));
            }
        }
        assert_eq!(split_mark('a'), None);
        assert_eq!(split_mark('ü'), None);
    }

    #[test]
    fn apply_marks() {
        assert_eq!(apply_mark('a', 1), Some('ā'));
        assert_eq!(apply_mark('i', 3), Some('ǐ'));
        assert_eq!(apply_mark('v', 4), Some('ǜ'));
        assert_eq!(apply_mark('ü', 2), Some('ǘ'));
        assert_eq!(apply_mark('a', 5), None);
        assert_eq!(apply_mark('b', 1), None);
    }
}
