//! Platform abstraction layer
//!
//! The browser presentation layer drives the game through an opaque
//! [`WebGame`] handle: it forwards pointer/key events, calls `frame` from
//! `requestAnimationFrame`, and reads a JSON snapshot to render.

use serde::Serialize;

use crate::game::Game;
use crate::highscores::HighScoreEntry;
use crate::sim::{FallingObject, FloatingText, GameEvent, Particle, Player, Projectile, SessionPhase};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebGame;

/// Everything the renderer needs for one frame
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub phase: SessionPhase,
    pub paused: bool,
    pub player_name: &'a str,
    pub score: u32,
    pub lives: i32,
    pub level: u32,
    pub time_remaining: f32,
    pub field: (f32, f32),
    pub player: &'a Player,
    pub objects: &'a [FallingObject],
    pub projectiles: &'a [Projectile],
    pub particles: &'a [Particle],
    pub floating_texts: &'a [FloatingText],
    pub leaderboard: &'a [HighScoreEntry],
    pub last_rank: Option<usize>,
    /// Events from the latest frame (sounds, flashes)
    pub events: &'a [GameEvent],
}

impl<'a> Snapshot<'a> {
    pub fn capture(game: &'a Game, events: &'a [GameEvent]) -> Self {
        let state = game.state();
        Self {
            phase: state.phase,
            paused: state.paused,
            player_name: state.player_name,
            score: state.score,
            lives: state.lives,
            level: state.level,
            time_remaining: state.time_remaining,
            field: (state.tuning.field_width, state.tuning.field_height),
            player: &state.player,
            objects: &state.objects,
            projectiles: &state.projectiles,
            particles: &state.particles,
            floating_texts: &state.floating_texts,
            leaderboard: game.leaderboard().entries(),
            last_rank: game.last_rank(),
            events,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            log::warn!("Snapshot serialization failed: {}", e);
            "{}".to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;
    use crate::settings::Settings;

    #[test]
    fn test_snapshot_json() {
        let mut game = Game::new(3, Settings::default(), Box::new(MemoryStorage::default()));
        game.start();
        let events = game.frame(1.0 / 60.0);
        let json = Snapshot::capture(&game, &events).to_json();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "Running");
        assert_eq!(value["score"], 0);
        assert_eq!(value["lives"], 3);
        assert!(value["objects"].is_array());
        assert!(value["leaderboard"].is_array());
    }
}
