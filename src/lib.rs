//! Cipher Nexus - A noir cipher-breaking puzzle game
//!
//! Core modules:
//! - `codec`: Classical ciphers (Caesar, Atbash, Vigenère, Morse, columnar transposition)
//! - `level`: Puzzle levels, the authored Nightfall set and seeded generation
//! - `session`: Deterministic session state machine (guesses, hints, reveals, navigation)
//! - `persistence`: Save/load with integrity verification
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Player preferences

pub mod codec;
pub mod level;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;

pub use codec::CipherFamily;
pub use level::{Level, LevelError, MatchMode};
pub use session::{Session, SessionError, Snapshot};
pub use settings::{HintStyle, LevelSource, Settings};

/// Game configuration constants
pub mod consts {
    /// Levels dealt by a generated session unless settings say otherwise
    pub const DEFAULT_LEVEL_COUNT: usize = 5;
    /// Upper bound on a generated deal, whatever stored settings claim
    pub const MAX_LEVEL_COUNT: usize = 50;

    /// LocalStorage keys
    pub const SETTINGS_KEY: &str = "cipher_nexus_settings";
    pub const SAVE_KEY: &str = "cipher_nexus_save";

    /// Bump when the save layout changes incompatibly
    pub const SAVE_VERSION: u32 = 1;
}
