//! Data-driven game balance
//!
//! Every number the simulation consults lives in [`Tuning`], so difficulty
//! presets and tests can adjust behavior without touching the sim.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rule variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    /// Every object is good; catch them all
    Baseline,
    /// Some objects are bad: catching them hurts, shooting them heals
    #[default]
    Enriched,
}

/// Gameplay balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub variant: Variant,

    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Keyboard movement speed (pixels/sec)
    pub player_speed: f32,

    // === Falling objects ===
    pub object_width: f32,
    pub object_height: f32,
    /// Fall speed at score 0 (pixels/sec)
    pub base_fall_speed: f32,
    /// Extra fall speed per point scored
    pub fall_speed_per_point: f32,
    pub max_fall_speed: f32,
    /// Probability a spawned object is bad (enriched variant only)
    pub bad_probability: f64,

    // === Spawning ===
    /// Spawn interval at level 1 (seconds)
    pub base_spawn_interval: f32,
    /// Interval reduction per level
    pub spawn_interval_step: f32,
    /// Interval never drops below this
    pub min_spawn_interval: f32,

    // === Session ===
    pub points_per_level: u32,
    pub win_score: u32,
    pub initial_lives: i32,
    /// Session countdown (seconds)
    pub time_limit: f32,

    // === Projectiles ===
    pub projectile_width: f32,
    pub projectile_height: f32,
    pub projectile_speed: f32,
    /// Minimum seconds between shots
    pub shoot_cooldown: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            variant: Variant::Enriched,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: 420.0,

            object_width: OBJECT_SIZE,
            object_height: OBJECT_SIZE,
            base_fall_speed: 120.0,
            fall_speed_per_point: 6.0,
            max_fall_speed: 360.0,
            bad_probability: 0.2,

            base_spawn_interval: 1.0,
            spawn_interval_step: 0.1,
            min_spawn_interval: 0.3,

            points_per_level: 5,
            win_score: 20,
            initial_lives: 3,
            time_limit: 60.0,

            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            projectile_speed: 480.0,
            shoot_cooldown: 0.25,
        }
    }
}

impl Tuning {
    /// Player's fixed top edge
    pub fn player_y(&self) -> f32 {
        self.field_height - self.player_height - PLAYER_MARGIN
    }

    /// Rightmost x the player may occupy
    pub fn player_max_x(&self) -> f32 {
        (self.field_width - self.player_width).max(0.0)
    }

    /// Rightmost x a spawned object may occupy
    pub fn spawn_max_x(&self) -> f32 {
        (self.field_width - self.object_width).max(0.0)
    }
}
