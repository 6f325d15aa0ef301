//! Catchfall native entry point
//!
//! Runs a headless autopilot session and records the result on the
//! leaderboard. The browser build is driven through `platform::WebGame`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use catchfall::Game;
    use catchfall::persistence::FileStorage;
    use catchfall::sim::{GameEvent, SessionPhase};

    env_logger::init();
    log::info!("Catchfall (native) starting...");

    let data_dir = std::env::var("CATCHFALL_DATA_DIR").unwrap_or_else(|_| ".catchfall".to_string());
    let seed = std::env::var("CATCHFALL_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
    let storage = FileStorage::new(data_dir);
    log::info!("Seed {}, data in {}", seed, storage.dir().display());

    let mut game = Game::from_storage(seed, Box::new(storage));
    game.set_idle_mode(true);
    game.start();

    // Simulated 60 Hz display
    let frame_dt = 1.0 / 60.0;
    while game.state().phase == SessionPhase::Running {
        for event in game.frame(frame_dt) {
            if let GameEvent::LevelUp { level } = event {
                println!("Level {level}");
            }
        }
    }

    let state = game.state();
    let outcome = if state.phase == SessionPhase::Won { "WON" } else { "LOST" };
    println!(
        "{} {} with {} points (lives {}, level {}, {:.1}s left)",
        state.player_name, outcome, state.score, state.lives, state.level, state.time_remaining
    );

    println!("\nHigh scores:");
    for (i, entry) in game.leaderboard().entries().iter().enumerate() {
        println!("{:>2}. {:<8} {:>4}", i + 1, entry.name, entry.score);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
