//! Answer normalization
//!
//! Every comparison between a guess and a stored answer goes through
//! [`normalize`], applied identically to both sides.

/// Punctuation folded to a single space before whitespace is collapsed
const FOLDED: &[char] = &[
    '_', '-', '\u{2014}', '\u{2013}', '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']',
    '{', '}',
];

/// Lower-case, fold punctuation/dashes to spaces, collapse whitespace runs, trim.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .map(|ch| if FOLDED.contains(&ch) { ' ' } else { ch })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip everything except ASCII letters, lower-cased
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_case_and_whitespace() {
        assert_eq!(normalize("  Hello   World  "), "hello world");
        assert_eq!(normalize("Hello\tWorld\n"), "hello world");
    }

    #[test]
    fn test_normalize_folds_punctuation() {
        assert_eq!(normalize("Khoor Zruog!"), "khoor zruog");
        assert_eq!(normalize("well-known_fact"), "well known fact");
        assert_eq!(normalize("wait\u{2014}what?"), "wait what");
        assert_eq!(normalize("(a) [b] {c}"), "a b c");
    }

    #[test]
    fn test_normalize_keeps_digits_and_other_symbols() {
        assert_eq!(normalize("Agent 007 / HQ"), "agent 007 / hq");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" .,!? "), "");
    }

    #[test]
    fn test_letters_only() {
        assert_eq!(letters_only("T_nhii sgs!"), "tnhiisgs");
    }

    proptest! {
        #[test]
        fn prop_normalize_idempotent(s in "[ -~\t\n\u{2013}\u{2014}\u{e9}\u{c9}]{0,64}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
