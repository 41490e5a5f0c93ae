//! Save/load persistence with integrity verification
//!
//! Features:
//! - Versioned JSON envelope
//! - Structural and round-trip validation on restore
//! - Works against any [`KeyValueStore`] (LocalStorage on web)

pub mod envelope;
pub mod validation;

pub use envelope::SaveEnvelope;

use thiserror::Error;

use crate::consts::SAVE_KEY;
use crate::platform::{KeyValueStore, StorageError};
use crate::session::Session;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("failed to serialize save: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to parse save: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error("unsupported save version {0}")]
    UnsupportedVersion(u32),
    #[error("corrupt save: {0}")]
    Corrupt(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Write the session under the save key
pub fn save(store: &mut impl KeyValueStore, session: &Session) -> Result<(), PersistError> {
    let json = SaveEnvelope::new(session.clone()).to_json()?;
    store.set(SAVE_KEY, &json)?;
    log::info!(
        "Game saved (level {}/{})",
        session.current_index() + 1,
        session.levels().len()
    );
    Ok(())
}

/// Restore a saved session. `Ok(None)` when nothing is saved.
pub fn load(store: &impl KeyValueStore) -> Result<Option<Session>, PersistError> {
    let Some(json) = store.get(SAVE_KEY) else {
        return Ok(None);
    };

    let envelope = SaveEnvelope::from_json(&json)?;
    validation::verify(&envelope.session)?;
    log::info!(
        "Found saved game at level {}",
        envelope.session.current_index() + 1
    );
    Ok(Some(envelope.session))
}

/// Restore a saved session, discarding it if it cannot be used
pub fn load_or_discard(store: &mut impl KeyValueStore) -> Option<Session> {
    match load(store) {
        Ok(session) => session,
        Err(e) => {
            log::warn!("Discarding unusable save: {}", e);
            clear(store);
            None
        }
    }
}

pub fn clear(store: &mut impl KeyValueStore) {
    store.remove(SAVE_KEY);
    log::info!("Saved game cleared");
}
