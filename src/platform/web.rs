//! wasm-bindgen surface for the browser

use wasm_bindgen::prelude::*;

use super::Snapshot;
use crate::game::Game;
use crate::persistence::{LocalStorage, MemoryStorage, Storage};
use crate::sim::GameEvent;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Catchfall (web) starting...");
}

/// Opaque game handle owned by JavaScript
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    events: Vec<GameEvent>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game backed by LocalStorage (in-memory if unavailable)
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let storage: Box<dyn Storage> = match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{}; scores will not persist", e);
                Box::new(MemoryStorage::default())
            }
        };
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        WebGame {
            game: Game::from_storage(seed, storage),
            events: Vec::new(),
        }
    }

    pub fn start(&mut self) {
        self.game.start();
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Advance by elapsed milliseconds since the previous animation frame
    pub fn frame(&mut self, elapsed_ms: f64) {
        self.events = self.game.frame((elapsed_ms / 1000.0) as f32);
    }

    /// Pointer x in field coordinates
    pub fn pointer_move(&mut self, x: f32) {
        self.game.set_pointer_x(x);
    }

    pub fn pointer_leave(&mut self) {
        self.game.clear_pointer();
    }

    /// -1 left, 1 right, 0 released
    pub fn key_direction(&mut self, dir: f32) {
        self.game.set_move_dir(dir);
    }

    pub fn shoot(&mut self) {
        self.game.request_shoot();
    }

    pub fn toggle_pause(&mut self) {
        self.game.request_pause();
    }

    pub fn set_idle_mode(&mut self, idle: bool) {
        self.game.set_idle_mode(idle);
    }

    /// JSON snapshot for rendering
    pub fn snapshot(&self) -> String {
        Snapshot::capture(&self.game, &self.events).to_json()
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
