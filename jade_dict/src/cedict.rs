//! CC-CEDICT 行解析：`傳統 传统 [chuan2 tong3] /tradition/traditional/`

use jade_core::model::Word;

/// 解析一行 CC-CEDICT；注释、空行或格式不对时返回 None。
///
/// - `u:` 统一写成 `v`，拼音转小写（专名在 CEDICT 里首字母大写）
/// - 多条释义用 `"; "` 连接
/// - 繁体与简体相同时不保存繁体
pub fn parse_line(line: &str) -> Option<Word> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (traditional, rest) = line.split_once(' ')?;
    let (simplified, rest) = rest.split_once(' ')?;
    let rest = rest.trim_start().strip_prefix('[')?;
    let (pinyin, rest) = rest.split_once(']')?;
    let glosses = rest.trim().strip_prefix('/')?;

    let definition = glosses
        .split('/')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .collect::<Vec<_>>()
        .join("; ");
    if simplified.is_empty() || pinyin.trim().is_empty() {
        return None;
    }

    let mut word = Word::new(simplified, pinyin.replace("u:", "v").to_lowercase());
    if traditional != simplified {
        word.traditional = Some(traditional.to_string());
    }
    if !definition.is_empty() {
        word.definition = Some(definition);
    }
    Some(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_line() {
        let w = parse_line("傳統 传统 [chuan2 tong3] /tradition/traditional/").unwrap();
        assert_eq!(w.simplified, "传统");
        assert_eq!(w.traditional.as_deref(), Some("傳統"));
        assert_eq!(w.pinyin, "chuan2 tong3");
        assert_eq!(w.definition.as_deref(), Some("tradition; traditional"));
    }

    #[test]
    fn same_traditional_and_umlaut() {
        let w = parse_line("女 女 [nu:3] /female/woman/").unwrap();
        assert_eq!(w.traditional, None);
        assert_eq!(w.pinyin, "nv3");
    }

    #[test]
    fn proper_noun_lowercased() {
        let w = parse_line("北京 北京 [Bei3 jing1] /Beijing/").unwrap();
        assert_eq!(w.pinyin, "bei3 jing1");
    }

    #[test]
    fn skips_comments_and_garbage() {
        assert!(parse_line("# CC-CEDICT").is_none());
        assert!(parse_line("").is_none());
        assert!(parse_line("书 书 shu1 /book/").is_none());
        assert!(parse_line("书 书 [shu1 /book/").is_none());
    }
}
