//! The authored "Nightfall" tutorial set: one level per cipher family,
//! easiest first.

use super::{Level, LevelError, MatchMode};
use crate::codec::{CipherFamily, ColumnKey};

pub fn nightfall() -> Result<Vec<Level>, LevelError> {
    Ok(vec![
        Level::authored(
            "Caesar Shift",
            CipherFamily::Caesar { shift: 3 },
            "Khoor Zruog!",
            "Hello world",
            "Julius used this. Try shifting letters back by 3.",
            MatchMode::Exact,
        )?,
        Level::authored(
            "Atbash Mirror",
            CipherFamily::Atbash,
            "Zggzxp rh lfi mvd kozm.",
            "Attack is our new plan",
            "Mirror the alphabet: A\u{2194}Z, B\u{2194}Y, C\u{2194}X\u{2026}",
            MatchMode::PrefixOf { min_len: 17 },
        )?,
        Level::authored(
            "Vigen\u{e8}re",
            CipherFamily::vigenere("raven"),
            "Khz orp in vnmei!",
            "The key is raven",
            "A repeating keyword shifts each letter. The bird is the word.",
            MatchMode::Exact,
        )?,
        Level::authored(
            "Morse",
            CipherFamily::Morse,
            ".... . .-.. .-.. ---   .- --. . -. -",
            "Hello agent",
            "Dots and dashes with spaces between letters and words.",
            MatchMode::Exact,
        )?,
        Level::authored(
            "Transposition",
            CipherFamily::Transposition {
                key: ColumnKey::columns(4),
            },
            "TITNA HSEOM IAGGS SAR",
            "This is a steganogram",
            "Write rows, read columns \u{2014} a simple columnar shuffle.",
            MatchMode::PrefixOf { min_len: 16 },
        )?,
    ])
}
