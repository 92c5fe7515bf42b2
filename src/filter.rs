/// Check whether a token consists solely of Chinese ideographs
///
/// Accepted ranges: CJK Unified Ideographs (U+4E00–U+9FFF),
/// Extension A (U+3400–U+4DBF) and Extension B (U+20000–U+2A6DF).
/// Empty tokens are rejected.
pub fn is_chinese_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_chinese_char)
}

fn is_chinese_char(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{20000}'..='\u{2A6DF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_chinese_words() {
        assert!(is_chinese_word("你好"));
        assert!(is_chinese_word("世界"));
        assert!(is_chinese_word("甲"));
    }

    #[test]
    fn test_range_boundaries() {
        assert!(is_chinese_word("\u{4E00}"));
        assert!(is_chinese_word("\u{9FFF}"));
        assert!(is_chinese_word("\u{3400}"));
        assert!(is_chinese_word("\u{4DBF}"));
        assert!(is_chinese_word("\u{20000}"));
        assert!(is_chinese_word("\u{2A6DF}"));

        assert!(!is_chinese_word("\u{4DFF}"));
        assert!(!is_chinese_word("\u{A000}"));
        assert!(!is_chinese_word("\u{33FF}"));
        assert!(!is_chinese_word("\u{2A6E0}"));
    }

    #[test]
    fn test_rejects_empty_and_mixed() {
        assert!(!is_chinese_word(""));
        assert!(!is_chinese_word("hello"));
        assert!(!is_chinese_word("你好a"));
        assert!(!is_chinese_word("3号"));
        assert!(!is_chinese_word(" 你好"));
    }

    #[test]
    fn test_rejects_punctuation() {
        // Full-width punctuation sits outside the ideograph blocks
        for token in ["，", "。", "！", "、", "《", "》", "你好！"] {
            assert!(!is_chinese_word(token), "Accepted {:?}", token);
        }
    }
}
