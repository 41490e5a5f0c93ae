//! International Morse code
//!
//! Letters are separated by a single space and words by three spaces.
//! Decoding also accepts a `/` token as a word break.

/// Separator between encoded words
pub const WORD_SEPARATOR: &str = "   ";

const TABLE: &[(char, &str)] = &[
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('!', "-.-.--"),
    ('-', "-....-"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('"', ".-..-."),
    (':', "---..."),
    ('+', ".-.-."),
    ('=', "-...-"),
];

fn code_for(ch: char) -> Option<&'static str> {
    let ch = ch.to_ascii_lowercase();
    TABLE.iter().find(|(c, _)| *c == ch).map(|(_, code)| *code)
}

fn char_for(code: &str) -> Option<char> {
    TABLE.iter().find(|(_, c)| *c == code).map(|(ch, _)| *ch)
}

/// Encode text; characters without a Morse code are dropped.
pub fn encode(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter_map(code_for)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(WORD_SEPARATOR)
}

/// Decode Morse; unrecognized tokens decode to nothing.
pub fn decode(morse: &str) -> String {
    morse
        .split(WORD_SEPARATOR)
        .flat_map(|chunk| chunk.split('/'))
        .map(|word| word.split_whitespace().filter_map(char_for).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_morse_encode() {
        assert_eq!(encode("Hello agent"), ".... . .-.. .-.. ---   .- --. . -. -");
        assert_eq!(encode("SOS"), "... --- ...");
    }

    #[test]
    fn test_morse_decode() {
        assert_eq!(decode(".... . .-.. .-.. ---   .- --. . -. -"), "hello agent");
        assert_eq!(decode("... --- ... / .... .."), "sos hi");
    }

    #[test]
    fn test_morse_unknown_tokens_are_empty() {
        assert_eq!(decode(".... ........ .."), "hi");
        assert_eq!(decode("........"), "");
    }

    #[test]
    fn test_morse_digits_and_punctuation() {
        assert_eq!(decode(&encode("agent 007!")), "agent 007!");
    }

    #[test]
    fn test_morse_drops_unknown_chars() {
        assert_eq!(encode("a~b"), ".- -...");
        assert_eq!(encode("~~ a"), ".-");
    }

    proptest! {
        #[test]
        fn prop_morse_round_trip(s in "[A-Za-z ]{0,40}") {
            prop_assert_eq!(
                crate::codec::normalize(&decode(&encode(&s))),
                crate::codec::normalize(&s)
            );
        }
    }
}
