//! Level data model
//!
//! A [`Level`] pairs the ciphertext shown to the player with the answer they
//! must produce. Levels are immutable once built and every constructor checks
//! that the ciphertext decodes back to the answer, so a broken level is
//! rejected up front instead of surfacing mid-play.

pub mod catalogue;
pub mod generate;

pub use catalogue::nightfall;
pub use generate::{generate_levels, shuffle_levels};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::{CipherFamily, normalize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("level {title:?}: ciphertext decodes to {decoded:?}, expected {expected:?}")]
    MalformedLevelData {
        title: String,
        expected: String,
        decoded: String,
    },
    #[error("invalid cipher parameters: {0}")]
    InvalidParameters(String),
    #[error("level {title:?} has an empty answer")]
    EmptyPlaintext { title: String },
}

/// How a normalized guess is compared to the normalized answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MatchMode {
    /// Guess must equal the answer
    #[default]
    Exact,
    /// Guess and answer must agree over their common prefix and the guess must
    /// be at least `min_len` characters (capped at the answer length). Used for
    /// intentionally truncated solutions.
    PrefixOf { min_len: usize },
}

impl MatchMode {
    /// Compare two already-normalized strings
    pub fn accepts(&self, guess: &str, answer: &str) -> bool {
        match *self {
            MatchMode::Exact => guess == answer,
            MatchMode::PrefixOf { min_len } => {
                let needed = min_len.min(answer.chars().count()).max(1);
                guess.chars().count() >= needed
                    && (guess.starts_with(answer) || answer.starts_with(guess))
            }
        }
    }
}

/// One puzzle: ciphertext, expected answer and display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    title: String,
    family: CipherFamily,
    /// Answer in display form; compared after normalization
    plaintext: String,
    ciphertext: String,
    hint: String,
    #[serde(default)]
    match_mode: MatchMode,
}

impl Level {
    /// Build a level by encoding `plaintext` under `family`
    pub fn generated(
        title: impl Into<String>,
        family: CipherFamily,
        plaintext: impl Into<String>,
        hint: impl Into<String>,
    ) -> Result<Self, LevelError> {
        let plaintext = plaintext.into();
        let ciphertext = family.encode(&plaintext);
        Self::authored(title, family, ciphertext, plaintext, hint, MatchMode::Exact)
    }

    /// Build a level from hand-written ciphertext. The ciphertext must still
    /// decode to the answer (or, for prefix levels, start with it).
    pub fn authored(
        title: impl Into<String>,
        family: CipherFamily,
        ciphertext: impl Into<String>,
        plaintext: impl Into<String>,
        hint: impl Into<String>,
        match_mode: MatchMode,
    ) -> Result<Self, LevelError> {
        let level = Self {
            title: title.into(),
            family,
            plaintext: plaintext.into(),
            ciphertext: ciphertext.into(),
            hint: hint.into(),
            match_mode,
        };
        level.validate()?;
        Ok(level)
    }

    /// Check the round-trip contract: decoding the ciphertext reproduces the
    /// answer, modulo normalization.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.answer().is_empty() {
            return Err(LevelError::EmptyPlaintext {
                title: self.title.clone(),
            });
        }

        let expected = self.family.fingerprint(&self.plaintext);
        let decoded = self.family.decode_fingerprint(&self.ciphertext);
        let ok = match self.match_mode {
            MatchMode::Exact => decoded == expected,
            MatchMode::PrefixOf { .. } => decoded.starts_with(&expected),
        };

        if ok {
            Ok(())
        } else {
            Err(LevelError::MalformedLevelData {
                title: self.title.clone(),
                expected,
                decoded,
            })
        }
    }

    /// Whether a raw guess solves this level
    pub fn accepts(&self, guess: &str) -> bool {
        self.match_mode.accepts(&normalize(guess), &self.answer())
    }

    /// Normalized answer; the reveal mask indexes its characters
    pub fn answer(&self) -> String {
        normalize(&self.plaintext)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn family(&self) -> &CipherFamily {
        &self.family
    }

    pub fn plaintext(&self) -> &str {
        &self.plaintext
    }

    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }
}
