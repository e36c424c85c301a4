use once_cell::sync::Lazy;
use regex::Regex;

/// Distance between a hiragana code point and its katakana counterpart.
const KATA_OFFSET: u32 = 0x60;

const LONG_VOWEL: char = 'ー';

static SYMBOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[（）＜＞＊「」、。＝〜!！\?？…・\s]").expect("symbol pattern is valid")
});

/// ぁ (U+3041) through ゖ (U+3096).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c)
}

/// ァ (U+30A1) through ヺ (U+30FA). The long-vowel mark ー is not included.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30FA}').contains(&c)
}

/// Converts hiragana to katakana; every other character passes through.
pub fn hira_to_kata(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            let shifted = match c {
                c if is_hiragana(c) => char::from_u32(c as u32 + KATA_OFFSET),
                // Iteration marks ゝゞ -> ヽヾ
                '\u{309D}' | '\u{309E}' => char::from_u32(c as u32 + KATA_OFFSET),
                _ => None,
            };
            shifted.unwrap_or(c)
        })
        .collect()
}

/// True if `reading` is non-empty and made only of katakana and the long-vowel mark.
pub fn is_katakana_reading(reading: &str) -> bool {
    !reading.is_empty() && reading.chars().all(|c| is_katakana(c) || c == LONG_VOWEL)
}

/// True if `term` contains punctuation or whitespace that a dictionary
/// surface form should not carry.
pub fn contains_symbol(term: &str) -> bool {
    SYMBOL.is_match(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hira_to_kata() {
        assert_eq!(hira_to_kata("えうおわえっい"), "エウオワエッイ");
        assert_eq!(hira_to_kata("けりゃ"), "ケリャ");
        assert_eq!(hira_to_kata("ゅぅ"), "ュゥ");
        assert_eq!(hira_to_kata("ゝゞ"), "ヽヾ");
        assert_eq!(hira_to_kata(""), "");
    }

    #[test]
    fn test_non_hiragana_passes_through() {
        assert_eq!(hira_to_kata("込むABCカタカナー"), "込ムABCカタカナー");
    }

    #[test]
    fn test_kana_predicates() {
        assert!(is_hiragana('ぁ'));
        assert!(is_hiragana('ゖ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ァ'));
        assert!(is_katakana('ヺ'));
        assert!(!is_katakana('ー'));
        assert!(!is_katakana('あ'));
    }

    #[test]
    fn test_katakana_reading() {
        assert!(is_katakana_reading("アヤシイ"));
        assert!(is_katakana_reading("ラーメン"));
        assert!(!is_katakana_reading("あやしい"));
        assert!(!is_katakana_reading("アヤ シイ"));
        assert!(!is_katakana_reading(""));
        assert!(!is_katakana_reading("ー-"));
        assert!(is_katakana_reading("ヴァー"));
    }

    #[test]
    fn test_contains_symbol() {
        assert!(contains_symbol("単語！"));
        assert!(contains_symbol("a b"));
        assert!(contains_symbol("「引用」"));
        assert!(!contains_symbol("単語"));
        assert!(!contains_symbol("ぁゃιぃ"));
    }
}
