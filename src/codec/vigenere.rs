//! Vigenere polyalphabetic shift
//!
//! The keyword is lower-cased and stripped of non-letters; an empty keyword
//! makes the transform the identity. The key position only advances on
//! letters, so spaces and punctuation do not consume key characters.

/// Keyword reduced to its shift amounts (a=0 .. z=25)
fn key_shifts(keyword: &str) -> Vec<u8> {
    keyword
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_lowercase() as u8 - b'a')
        .collect()
}

fn apply(text: &str, keyword: &str, decode: bool) -> String {
    let shifts = key_shifts(keyword);
    if shifts.is_empty() {
        return text.to_string();
    }

    let mut key_index = 0;
    text.chars()
        .map(|ch| {
            if !ch.is_ascii_alphabetic() {
                return ch;
            }
            let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
            let k = shifts[key_index % shifts.len()];
            key_index += 1;
            let k = if decode { 26 - k } else { k };
            ((ch as u8 - base + k) % 26 + base) as char
        })
        .collect()
}

pub fn encode(text: &str, keyword: &str) -> String {
    apply(text, keyword, false)
}

pub fn decode(text: &str, keyword: &str) -> String {
    apply(text, keyword, true)
}
