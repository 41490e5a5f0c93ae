//! Versioned JSON save envelope

use serde::{Deserialize, Serialize};

use super::PersistError;
use crate::consts::SAVE_VERSION;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveEnvelope {
    pub version: u32,
    pub session: Session,
}

impl SaveEnvelope {
    pub fn new(session: Session) -> Self {
        Self {
            version: SAVE_VERSION,
            session,
        }
    }

    pub fn to_json(&self) -> Result<String, PersistError> {
        serde_json::to_string(self).map_err(PersistError::Serialize)
    }

    /// Parse a save, checking the version before touching the payload
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(PersistError::Deserialize)?;

        let version = value
            .get("version")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| PersistError::Corrupt("missing save version".into()))?;
        let version = u32::try_from(version).unwrap_or(u32::MAX);
        if version != SAVE_VERSION {
            return Err(PersistError::UnsupportedVersion(version));
        }

        serde_json::from_value(value).map_err(PersistError::Deserialize)
    }
}
