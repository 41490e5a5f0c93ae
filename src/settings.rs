//! Game settings and preferences
//!
//! Persisted separately from game saves.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LEVEL_COUNT, MAX_LEVEL_COUNT, SETTINGS_KEY};
use crate::platform::KeyValueStore;

/// Where a session's levels come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LevelSource {
    /// Authored tutorial set, one level per cipher family
    #[default]
    Nightfall,
    /// Seeded random phrases and cipher parameters
    Generated,
    /// Levels supplied by the host; restart keeps them
    Custom,
}

impl LevelSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelSource::Nightfall => "Nightfall",
            LevelSource::Generated => "Generated",
            LevelSource::Custom => "Custom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nightfall" | "authored" => Some(LevelSource::Nightfall),
            "generated" | "random" => Some(LevelSource::Generated),
            _ => None,
        }
    }
}

/// What `request_hint` hands out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HintStyle {
    /// The level's fixed hint text
    #[default]
    Fixed,
    /// A seeded-random letter from the answer
    RandomLetter,
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub level_source: LevelSource,
    /// Number of levels dealt for `Generated` sessions
    pub level_count: usize,
    /// Shuffle the level order at session start/restart
    pub shuffle: bool,
    pub hint_style: HintStyle,
    /// Ambient audio preference (playback is the host's job)
    pub audio_on: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level_source: LevelSource::Nightfall,
            level_count: DEFAULT_LEVEL_COUNT,
            shuffle: false,
            hint_style: HintStyle::Fixed,
            // Audio is off until the player opts in
            audio_on: false,
        }
    }
}

impl Settings {
    /// Settings for a seeded random deal of `count` levels
    pub fn generated(count: usize) -> Self {
        Self {
            level_source: LevelSource::Generated,
            level_count: count,
            shuffle: true,
            ..Self::default()
        }
    }

    /// Level count actually dealt (never zero, never above the cap)
    pub fn effective_level_count(&self) -> usize {
        self.level_count.clamp(1, MAX_LEVEL_COUNT)
    }

    /// Load settings, falling back to defaults on missing or corrupt data
    pub fn load(store: &impl KeyValueStore) -> Self {
        if let Some(json) = store.get(SETTINGS_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring corrupt settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, store: &mut impl KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => match store.set(SETTINGS_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Settings not saved: {}", e),
            },
            Err(e) => log::warn!("Settings not serialized: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_level_source_parse() {
        assert_eq!(LevelSource::from_str("Generated"), Some(LevelSource::Generated));
        assert_eq!(LevelSource::from_str("AUTHORED"), Some(LevelSource::Nightfall));
        assert_eq!(LevelSource::from_str("custom"), None);
        assert_eq!(LevelSource::Nightfall.as_str(), "Nightfall");
    }

    #[test]
    fn test_settings_save_load() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::generated(8);
        settings.audio_on = true;
        settings.hint_style = HintStyle::RandomLetter;
        settings.save(&mut store);

        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_settings_fallbacks() {
        let mut store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());

        store.set(SETTINGS_KEY, "{not json").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());

        // Missing fields take their defaults
        store.set(SETTINGS_KEY, r#"{"audio_on": true}"#).unwrap();
        let settings = Settings::load(&store);
        assert!(settings.audio_on);
        assert_eq!(settings.level_count, DEFAULT_LEVEL_COUNT);
    }

    #[test]
    fn test_effective_level_count() {
        assert_eq!(Settings::generated(0).effective_level_count(), 1);
        assert_eq!(Settings::default().effective_level_count(), 5);
        assert_eq!(Settings::generated(usize::MAX).effective_level_count(), MAX_LEVEL_COUNT);
    }

    #[test]
    fn test_oversized_stored_level_count_still_deals() {
        let mut store = MemoryStore::new();
        store
            .set(
                SETTINGS_KEY,
                r#"{"level_source":"Generated","level_count":18446744073709551615}"#,
            )
            .unwrap();
        let settings = Settings::load(&store);
        assert_eq!(settings.level_count, usize::MAX);

        let session = crate::session::Session::new(1, &settings).unwrap();
        assert_eq!(session.levels().len(), MAX_LEVEL_COUNT);
    }
}
