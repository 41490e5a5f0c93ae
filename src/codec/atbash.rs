//! Atbash mirror alphabet (A<->Z, B<->Y, ...). Self-inverse.

pub fn mirror(text: &str) -> String {
    text.chars()
        .map(|ch| {
            if !ch.is_ascii_alphabetic() {
                return ch;
            }
            let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
            (base + (25 - (ch as u8 - base))) as char
        })
        .collect()
}
