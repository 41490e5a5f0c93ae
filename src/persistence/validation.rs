//! Integrity checks for restored sessions
//!
//! A save that deserializes cleanly can still be inconsistent (hand-edited,
//! truncated by an old build). Anything that could make a session operation
//! misbehave is rejected here instead.

use super::PersistError;
use crate::session::{LevelStatus, Session};

pub fn verify(session: &Session) -> Result<(), PersistError> {
    let levels = session.levels();
    let progress = session.progress();

    if levels.is_empty() {
        return Err(PersistError::Corrupt("save has no levels".into()));
    }
    if progress.len() != levels.len() {
        return Err(PersistError::Corrupt(format!(
            "{} progress records for {} levels",
            progress.len(),
            levels.len()
        )));
    }
    if session.current_index() >= levels.len() {
        return Err(PersistError::Corrupt(format!(
            "current level {} out of range",
            session.current_index()
        )));
    }

    for (i, (level, p)) in levels.iter().zip(progress).enumerate() {
        level
            .validate()
            .map_err(|e| PersistError::Corrupt(format!("level {}: {}", i + 1, e)))?;

        let answer: Vec<char> = level.answer().chars().collect();
        if p.revealed.len() != answer.len() {
            return Err(PersistError::Corrupt(format!(
                "level {}: reveal mask length {} for answer length {}",
                i + 1,
                p.revealed.len(),
                answer.len()
            )));
        }
        if answer.iter().zip(&p.revealed).any(|(ch, shown)| *ch == ' ' && !shown) {
            return Err(PersistError::Corrupt(format!(
                "level {}: space hidden in reveal mask",
                i + 1
            )));
        }
        if p.status == LevelStatus::GivenUp && p.revealed.iter().any(|shown| !shown) {
            return Err(PersistError::Corrupt(format!(
                "level {}: given up but answer not fully revealed",
                i + 1
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn tamper(session: &Session, edit: impl FnOnce(&mut serde_json::Value)) -> Session {
        let mut value = serde_json::to_value(session).unwrap();
        edit(&mut value);
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_fresh_session_verifies() {
        let session = Session::new(2, &Settings::default()).unwrap();
        assert!(verify(&session).is_ok());
    }

    #[test]
    fn test_index_out_of_range() {
        let session = Session::new(2, &Settings::default()).unwrap();
        let bad = tamper(&session, |v| v["current_index"] = 5.into());
        assert!(matches!(verify(&bad), Err(PersistError::Corrupt(_))));
    }

    #[test]
    fn test_mask_length_mismatch() {
        let session = Session::new(2, &Settings::default()).unwrap();
        let bad = tamper(&session, |v| {
            v["progress"][0]["revealed"] = serde_json::json!([true]);
        });
        assert!(matches!(verify(&bad), Err(PersistError::Corrupt(_))));
    }

    #[test]
    fn test_hidden_space() {
        let session = Session::new(2, &Settings::default()).unwrap();
        let bad = tamper(&session, |v| v["progress"][0]["revealed"][5] = false.into());
        assert!(matches!(verify(&bad), Err(PersistError::Corrupt(_))));
    }

    #[test]
    fn test_tampered_ciphertext() {
        let session = Session::new(2, &Settings::default()).unwrap();
        let bad = tamper(&session, |v| {
            v["levels"][0]["ciphertext"] = "Nope".into();
        });
        assert!(matches!(verify(&bad), Err(PersistError::Corrupt(_))));
    }

    #[test]
    fn test_progress_count_mismatch() {
        let session = Session::new(2, &Settings::default()).unwrap();
        let bad = tamper(&session, |v| {
            v["progress"].as_array_mut().unwrap().pop();
        });
        assert!(matches!(verify(&bad), Err(PersistError::Corrupt(_))));
    }
}
