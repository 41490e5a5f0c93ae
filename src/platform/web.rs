//! Browser bindings
//!
//! `WebGame` is the only thing the page talks to. Every call runs one session
//! operation, autosaves to LocalStorage and returns the snapshot as JSON.

use wasm_bindgen::prelude::*;

use super::storage::LocalStore;
use crate::persistence;
use crate::session::Session;
use crate::settings::{HintStyle, LevelSource, Settings};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    log::info!("Cipher Nexus starting...");
}

fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct WebGame {
    session: Session,
    settings: Settings,
    /// None when LocalStorage is blocked; the game still runs, unsaved
    store: Option<LocalStore>,
}

#[wasm_bindgen]
impl WebGame {
    /// Resume the saved game if there is a usable one, otherwise deal a new session
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebGame, JsValue> {
        let mut store = LocalStore::open();
        if store.is_none() {
            log::warn!("LocalStorage unavailable, progress will not be saved");
        }

        let settings = store.as_ref().map(Settings::load).unwrap_or_default();
        let saved = store.as_mut().and_then(persistence::load_or_discard);
        let session = match saved {
            Some(session) => session,
            None => Session::new(clock_seed(), &settings).map_err(js_error)?,
        };

        Ok(Self {
            session,
            settings,
            store,
        })
    }

    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.snapshot()).map_err(js_error)
    }

    pub fn submit(&mut self, guess: &str) -> Result<String, JsValue> {
        // Rejections are reported through the snapshot's feedback
        let _ = self.session.submit_guess(guess);
        self.commit()
    }

    pub fn hint(&mut self) -> Result<String, JsValue> {
        let _ = self.session.request_hint();
        self.commit()
    }

    pub fn reveal(&mut self) -> Result<String, JsValue> {
        let _ = self.session.reveal_next_letter();
        self.commit()
    }

    pub fn give_up(&mut self) -> Result<String, JsValue> {
        let _ = self.session.give_up();
        self.commit()
    }

    pub fn next(&mut self) -> Result<String, JsValue> {
        self.session.advance();
        self.commit()
    }

    pub fn prev(&mut self) -> Result<String, JsValue> {
        self.session.retreat();
        self.commit()
    }

    pub fn go_to(&mut self, index: usize) -> Result<String, JsValue> {
        self.session.go_to(index);
        self.commit()
    }

    pub fn skip(&mut self) -> Result<String, JsValue> {
        self.session.skip();
        self.commit()
    }

    /// Reset all progress, drop the saved game and re-deal
    pub fn restart(&mut self) -> Result<String, JsValue> {
        self.session.restart(clock_seed()).map_err(js_error)?;
        if let Some(store) = self.store.as_mut() {
            persistence::clear(store);
        }
        self.commit()
    }

    /// Switch between "nightfall" and "generated" levels; starts a new session
    pub fn set_level_source(&mut self, source: &str) -> Result<String, JsValue> {
        let source = LevelSource::from_str(source)
            .ok_or_else(|| js_error(format!("unknown level source: {}", source)))?;
        self.settings.level_source = source;
        self.settings.shuffle = source == LevelSource::Generated;
        self.save_settings();

        self.session = Session::new(clock_seed(), &self.settings).map_err(js_error)?;
        self.commit()
    }

    pub fn set_random_letter_hints(&mut self, enabled: bool) -> Result<String, JsValue> {
        self.settings.hint_style = if enabled {
            HintStyle::RandomLetter
        } else {
            HintStyle::Fixed
        };
        self.session.set_hint_style(self.settings.hint_style);
        self.save_settings();
        self.commit()
    }

    pub fn audio_on(&self) -> bool {
        self.settings.audio_on
    }

    pub fn toggle_audio(&mut self) -> bool {
        self.settings.audio_on = !self.settings.audio_on;
        self.save_settings();
        self.settings.audio_on
    }
}

impl WebGame {
    /// Autosave, then hand back the snapshot
    fn commit(&mut self) -> Result<String, JsValue> {
        if let Some(store) = self.store.as_mut()
            && let Err(e) = persistence::save(store, &self.session)
        {
            log::warn!("Autosave failed: {}", e);
        }
        self.snapshot()
    }

    fn save_settings(&mut self) {
        if let Some(store) = self.store.as_mut() {
            self.settings.save(store);
        }
    }
}
