//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time is passed in, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (store order, reverse index for removals)
//! - No rendering or platform dependencies

pub mod collision;
pub mod effects;
pub mod names;
pub mod rules;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use spawner::{Spawner, fall_speed_for_score, spawn_interval_for_level};
pub use state::{
    FallingObject, FloatingText, GameEvent, GameState, LossReason, ObjectKind, Particle, Player,
    Projectile, SessionPhase,
};
pub use tick::{StateDelta, TickInput, tick};
