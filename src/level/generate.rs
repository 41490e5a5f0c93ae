//! Seeded level generation
//!
//! All randomness comes from the caller's RNG so a session dealt from the same
//! seed always gets the same phrases, ciphers and parameters.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use super::{Level, LevelError};
use crate::codec::{CipherFamily, ColumnKey};

/// Phrase pool for generated levels (letters and spaces only)
const PHRASES: &[&str] = &[
    "hello world",
    "meet at midnight",
    "the owl flies at dawn",
    "follow the lantern",
    "the key is under the stone",
    "trust no shadow",
    "the raven knows",
    "burn after reading",
    "signal at nightfall",
    "the vault opens at nine",
    "fog hides the harbor",
    "listen to the wind",
    "the bridge is watched",
    "wait for the second bell",
];

/// Keywords for Vigenere and keyed transposition
const KEYWORDS: &[&str] = &["raven", "lantern", "cipher", "shadow", "harbor", "nightfall", "zebra"];

#[derive(Debug, Clone, Copy)]
enum Kind {
    Caesar,
    Atbash,
    Vigenere,
    Morse,
    Transposition,
}

const KINDS: [Kind; 5] = [
    Kind::Caesar,
    Kind::Atbash,
    Kind::Vigenere,
    Kind::Morse,
    Kind::Transposition,
];

fn keyword<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    KEYWORDS.choose(rng).copied().unwrap_or("raven")
}

fn roll_family<R: Rng + ?Sized>(kind: Kind, rng: &mut R) -> Result<CipherFamily, LevelError> {
    Ok(match kind {
        Kind::Caesar => CipherFamily::Caesar {
            shift: rng.random_range(1..=25),
        },
        Kind::Atbash => CipherFamily::Atbash,
        Kind::Vigenere => CipherFamily::vigenere(keyword(rng)),
        Kind::Morse => CipherFamily::Morse,
        Kind::Transposition => {
            // One in three transposition levels uses a keyword read order
            let key = if rng.random_ratio(1, 3) {
                ColumnKey::from_keyword(keyword(rng))?
            } else {
                ColumnKey::columns(rng.random_range(3..=6))
            };
            CipherFamily::Transposition { key }
        }
    })
}

/// Hint text describing how to undo `family`
pub fn describe(family: &CipherFamily) -> String {
    match family {
        CipherFamily::Caesar { shift } => format!(
            "Julius used this. Try shifting letters back by {}.",
            shift.rem_euclid(26)
        ),
        CipherFamily::Atbash => {
            "Mirror the alphabet: A\u{2194}Z, B\u{2194}Y, C\u{2194}X\u{2026}".to_string()
        }
        CipherFamily::Vigenere { keyword } => format!(
            "A repeating keyword shifts each letter. Try \"{}\".",
            keyword
        ),
        CipherFamily::Morse => "Dots and dashes with spaces between letters and words.".to_string(),
        CipherFamily::Transposition { key } if key.is_sequential() => format!(
            "Write rows of {}, read columns \u{2014} a simple columnar shuffle.",
            key.column_count()
        ),
        CipherFamily::Transposition { key } => format!(
            "{} columns, read in the order {:?}. Put them back and read across.",
            key.column_count(),
            key.order()
        ),
    }
}

/// Deal `count` levels. Every run of five consecutive levels covers all five
/// cipher families; phrases are not repeated until the pool is exhausted.
pub fn generate_levels<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Vec<Level>, LevelError> {
    let mut phrases: Vec<&str> = Vec::new();
    let mut kinds: Vec<Kind> = Vec::new();
    let mut levels = Vec::new();

    for _ in 0..count {
        if phrases.is_empty() {
            phrases = PHRASES.to_vec();
            phrases.shuffle(rng);
        }
        if kinds.is_empty() {
            kinds = KINDS.to_vec();
            kinds.shuffle(rng);
        }
        let (Some(phrase), Some(kind)) = (phrases.pop(), kinds.pop()) else {
            break;
        };

        let family = roll_family(kind, rng)?;
        let hint = describe(&family);
        levels.push(Level::generated(family.name(), family, phrase, hint)?);
    }

    log::debug!("Generated {} levels", levels.len());
    Ok(levels)
}

/// Fisher-Yates shuffle of the level order
pub fn shuffle_levels<R: Rng + ?Sized>(rng: &mut R, levels: &mut [Level]) {
    levels.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashSet;

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate_levels(&mut Pcg32::seed_from_u64(42), 5).unwrap();
        let b = generate_levels(&mut Pcg32::seed_from_u64(42), 5).unwrap();
        assert_eq!(a, b);

        let c = generate_levels(&mut Pcg32::seed_from_u64(43), 5).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_generate_covers_every_family() {
        for seed in 0..20 {
            let levels = generate_levels(&mut Pcg32::seed_from_u64(seed), 5).unwrap();
            let names: HashSet<_> = levels.iter().map(|l| l.family().name()).collect();
            assert_eq!(names.len(), 5, "seed {}", seed);
        }
    }

    #[test]
    fn test_generated_levels_round_trip() {
        for seed in 0..50 {
            for level in generate_levels(&mut Pcg32::seed_from_u64(seed), 12).unwrap() {
                assert!(level.validate().is_ok());
                assert!(level.accepts(level.plaintext()));
            }
        }
    }

    #[test]
    fn test_generate_count() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert!(generate_levels(&mut rng, 0).unwrap().is_empty());
        assert_eq!(generate_levels(&mut rng, 30).unwrap().len(), 30);
    }

    #[test]
    fn test_phrases_unique_within_pool() {
        let levels = generate_levels(&mut Pcg32::seed_from_u64(9), PHRASES.len()).unwrap();
        let phrases: HashSet<_> = levels.iter().map(|l| l.plaintext()).collect();
        assert_eq!(phrases.len(), PHRASES.len());
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(&CipherFamily::Caesar { shift: -3 }),
            "Julius used this. Try shifting letters back by 23."
        );
        assert!(describe(&CipherFamily::transposition(4)).contains("rows of 4"));
    }

    #[test]
    fn test_shuffle_levels_seeded() {
        let mut a = crate::level::nightfall().unwrap();
        let mut b = a.clone();
        shuffle_levels(&mut Pcg32::seed_from_u64(1), &mut a);
        shuffle_levels(&mut Pcg32::seed_from_u64(1), &mut b);
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
    }
}
