//! Catchfall - a single-screen falling-object arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, session rules)
//! - `game`: Caller-owned frame driver around the simulation
//! - `highscores`: Top-5 leaderboard
//! - `persistence`: Key/value storage backends (memory, file, LocalStorage)
//! - `tuning`: Data-driven game balance
//! - `platform`: Browser bindings

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use highscores::Leaderboard;
pub use settings::{Difficulty, Settings};
pub use tuning::{Tuning, Variant};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will simulate (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default play-field dimensions
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Player sprite
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 24.0;
    /// Gap between the player's bottom edge and the field bottom
    pub const PLAYER_MARGIN: f32 = 16.0;

    /// Falling objects
    pub const OBJECT_SIZE: f32 = 32.0;

    /// Projectiles
    pub const PROJECTILE_WIDTH: f32 = 6.0;
    pub const PROJECTILE_HEIGHT: f32 = 16.0;
}
