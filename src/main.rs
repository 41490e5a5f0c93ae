//! Cipher Nexus entry point
//!
//! On the web the page drives `platform::web::WebGame`; natively this runs a
//! scripted walk through a session as a smoke demo.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use cipher_nexus::platform::MemoryStore;
    use cipher_nexus::session::{Navigation, SubmitOutcome};
    use cipher_nexus::{Session, Settings, persistence};

    env_logger::init();
    log::info!("Cipher Nexus (native) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });

    let mut session = match Session::new(seed, &Settings::default()) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Could not start session: {}", e);
            std::process::exit(1);
        }
    };

    loop {
        let level = session.current_level().clone();
        let decoded = level.family().decode(level.ciphertext());
        log::info!("{} decodes to {:?}", level.title(), decoded);

        match session.submit_guess(&decoded) {
            Ok(SubmitOutcome::Correct) => {}
            Ok(SubmitOutcome::Incorrect) => {
                // Lost word breaks; fall back to the hint, then surrender
                if let Err(e) = session.request_hint() {
                    log::warn!("{}", e);
                }
                if let Err(e) = session.give_up() {
                    log::warn!("{}", e);
                }
            }
            Err(e) => log::warn!("{}", e),
        }

        match serde_json::to_string(&session.snapshot()) {
            Ok(json) => log::info!("{}", json),
            Err(e) => log::warn!("Snapshot not serialized: {}", e),
        }

        if session.advance() == Navigation::SessionComplete {
            break;
        }
    }

    let mut store = MemoryStore::new();
    let restored = persistence::save(&mut store, &session).and_then(|()| persistence::load(&store));
    match restored {
        Ok(Some(restored)) if restored == session => log::info!("Save round trip verified"),
        Ok(_) => log::warn!("Save round trip mismatch"),
        Err(e) => log::warn!("Save round trip failed: {}", e),
    }

    println!(
        "Solved {}/{} ciphers in {} attempts with {} hints (seed {})",
        session.solved_levels(),
        session.levels().len(),
        session.attempts(),
        session.hints_used(),
        seed
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
