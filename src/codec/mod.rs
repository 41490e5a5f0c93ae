//! Cipher codecs
//!
//! Pure, stateless encode/decode for the five classical families. Nothing in
//! here touches session state; the session only calls into the codec when
//! levels are built.

pub mod atbash;
pub mod caesar;
pub mod morse;
pub mod normalize;
pub mod transposition;
pub mod vigenere;

pub use normalize::{letters_only, normalize};
pub use transposition::ColumnKey;

use serde::{Deserialize, Serialize};

/// A cipher family together with the parameters it needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum CipherFamily {
    Caesar { shift: i32 },
    Atbash,
    Vigenere { keyword: String },
    Morse,
    Transposition { key: ColumnKey },
}

impl CipherFamily {
    /// Plain columnar transposition with `columns` columns
    pub fn transposition(columns: usize) -> Self {
        CipherFamily::Transposition {
            key: ColumnKey::columns(columns),
        }
    }

    pub fn vigenere(keyword: impl Into<String>) -> Self {
        CipherFamily::Vigenere {
            keyword: keyword.into(),
        }
    }

    /// Display name used in level titles
    pub fn name(&self) -> &'static str {
        match self {
            CipherFamily::Caesar { .. } => "Caesar Shift",
            CipherFamily::Atbash => "Atbash Mirror",
            CipherFamily::Vigenere { .. } => "Vigen\u{e8}re",
            CipherFamily::Morse => "Morse",
            CipherFamily::Transposition { .. } => "Transposition",
        }
    }

    pub fn encode(&self, plaintext: &str) -> String {
        match self {
            CipherFamily::Caesar { shift } => caesar::encode(plaintext, *shift),
            CipherFamily::Atbash => atbash::mirror(plaintext),
            CipherFamily::Vigenere { keyword } => vigenere::encode(plaintext, keyword),
            CipherFamily::Morse => morse::encode(plaintext),
            CipherFamily::Transposition { key } => transposition::encode(plaintext, key),
        }
    }

    pub fn decode(&self, ciphertext: &str) -> String {
        match self {
            CipherFamily::Caesar { shift } => caesar::decode(ciphertext, *shift),
            CipherFamily::Atbash => atbash::mirror(ciphertext),
            CipherFamily::Vigenere { keyword } => vigenere::decode(ciphertext, keyword),
            CipherFamily::Morse => morse::decode(ciphertext),
            CipherFamily::Transposition { key } => transposition::decode(ciphertext, key),
        }
    }

    /// Whether the transform discards word breaks (and all non-letters)
    pub fn drops_word_breaks(&self) -> bool {
        matches!(self, CipherFamily::Transposition { .. })
    }

    /// Comparison form used by the round-trip check: normalized text, with
    /// spaces removed for families that drop word breaks.
    pub fn fingerprint(&self, text: &str) -> String {
        if self.drops_word_breaks() {
            letters_only(text)
        } else {
            normalize(text)
        }
    }

    /// Decode `ciphertext` and reduce it to its comparison form
    pub fn decode_fingerprint(&self, ciphertext: &str) -> String {
        self.fingerprint(&self.decode(ciphertext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_family() -> impl Strategy<Value = CipherFamily> {
        prop_oneof![
            any::<i32>().prop_map(|shift| CipherFamily::Caesar { shift }),
            Just(CipherFamily::Atbash),
            "[A-Za-z]{0,8}".prop_map(CipherFamily::vigenere),
            Just(CipherFamily::Morse),
            (1usize..8).prop_map(CipherFamily::transposition),
        ]
    }

    #[test]
    fn test_family_dispatch() {
        let caesar = CipherFamily::Caesar { shift: 3 };
        assert_eq!(caesar.encode("hello world"), "khoor zruog");
        assert_eq!(caesar.decode_fingerprint("Khoor Zruog!"), "hello world");

        assert_eq!(CipherFamily::Atbash.decode("Svool"), "Hello");
        assert_eq!(CipherFamily::vigenere("raven").decode("khz orp in vnmei"), "the key is raven");
        assert_eq!(CipherFamily::Morse.encode("hi"), ".... ..");
        assert_eq!(CipherFamily::transposition(4).decode("hoell"), "hello");
    }

    #[test]
    fn test_vigenere_scenario_round_trip() {
        let family = CipherFamily::vigenere("raven");
        let cipher = family.encode("the key is raven");
        assert_eq!(normalize(&family.decode(&cipher)), "the key is raven");
    }

    #[test]
    fn test_fingerprint_ignores_spaces_for_transposition() {
        let family = CipherFamily::transposition(4);
        assert_eq!(family.fingerprint("This is a steganogram"), "thisisasteganogram");
        assert_eq!(CipherFamily::Morse.fingerprint(" Hello,  Agent "), "hello agent");
    }

    #[test]
    fn test_family_serde_shape() {
        let json = serde_json::to_string(&CipherFamily::Caesar { shift: 3 }).unwrap();
        assert_eq!(json, r#"{"family":"caesar","shift":3}"#);

        let family: CipherFamily =
            serde_json::from_str(r#"{"family":"transposition","key":[2,0,1]}"#).unwrap();
        assert_eq!(family.decode(&family.encode("abcde")), "abcde");

        assert!(serde_json::from_str::<CipherFamily>(r#"{"family":"rot13"}"#).is_err());
    }

    #[test]
    fn test_family_names() {
        assert_eq!(CipherFamily::Atbash.name(), "Atbash Mirror");
        assert_eq!(CipherFamily::vigenere("x").name(), "Vigen\u{e8}re");
    }

    proptest! {
        #[test]
        fn prop_every_family_round_trips(p in "[A-Za-z ]{0,40}", family in arb_family()) {
            let cipher = family.encode(&p);
            prop_assert_eq!(family.decode_fingerprint(&cipher), family.fingerprint(&p));
        }
    }
}
