//! Caesar shift

/// Shift every ASCII letter by `shift` positions, preserving case.
/// Any integer shift is accepted; it is reduced mod 26.
pub fn shift_letters(text: &str, shift: i32) -> String {
    let shift = shift.rem_euclid(26) as u8;
    text.chars()
        .map(|ch| {
            if !ch.is_ascii_alphabetic() {
                return ch;
            }
            let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
            ((ch as u8 - base + shift) % 26 + base) as char
        })
        .collect()
}

pub fn encode(text: &str, shift: i32) -> String {
    shift_letters(text, shift)
}

pub fn decode(text: &str, shift: i32) -> String {
    // rem_euclid on the negated shift keeps i32::MIN from overflowing
    shift_letters(text, -(shift.rem_euclid(26)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_caesar_shift_three() {
        assert_eq!(encode("hello world", 3), "khoor zruog");
        assert_eq!(decode("Khoor Zruog!", 3), "Hello World!");
    }

    #[test]
    fn test_caesar_wraps_alphabet() {
        assert_eq!(encode("xyz XYZ", 3), "abc ABC");
        assert_eq!(decode("abc", 3), "xyz");
    }

    #[test]
    fn test_caesar_negative_and_large_shifts() {
        assert_eq!(encode("abc xyz", 29), "def abc");
        assert_eq!(encode("Meet at midnight", -29), "Jbbq xq jfakfdeq");
        assert_eq!(encode("abc", 26), "abc");
        assert_eq!(decode(&encode("abc", i32::MIN), i32::MIN), "abc");
    }

    #[test]
    fn test_caesar_non_letters_pass_through() {
        assert_eq!(encode("a1 b2, é!", 1), "b1 c2, é!");
    }

    proptest! {
        #[test]
        fn prop_caesar_additivity(s in "[A-Za-z ,.!]{0,40}", k in any::<i32>()) {
            prop_assert_eq!(decode(&encode(&s, k), k), s);
        }

        #[test]
        fn prop_caesar_shift_composes(s in "[A-Za-z ]{0,40}", a in -100i32..100, b in -100i32..100) {
            prop_assert_eq!(encode(&encode(&s, a), b), encode(&s, a + b));
        }
    }
}
