//! Game state and core simulation types
//!
//! The whole session lives in one [`GameState`] value owned by the caller and
//! threaded through [`tick`](super::tick::tick). Presentation reads it between
//! ticks and never mutates it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::names;
use super::spawner::Spawner;
use crate::tuning::Tuning;

/// Session lifecycle
///
/// `NotStarted -> Running -> {Won, Lost}`. Both terminal phases can only be
/// left through [`GameState::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    NotStarted,
    Running,
    Won,
    Lost,
}

impl SessionPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::Won | SessionPhase::Lost)
    }
}

/// Why a session was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    OutOfLives,
    OutOfTime,
}

/// Good objects reward catching; bad objects punish catching and reward shooting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObjectKind {
    #[default]
    Good,
    Bad,
}

/// Something that happened during a tick (for sounds, animations, HUD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, kind: ObjectKind },
    Caught { id: u32, kind: ObjectKind },
    ShotDown { id: u32, kind: ObjectKind },
    Missed { id: u32, kind: ObjectKind },
    Fired { id: u32 },
    LevelUp { level: u32 },
    Won { score: u32 },
    Lost { score: u32, reason: LossReason },
}

/// An object falling toward the bottom of the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    pub aabb: Aabb,
    /// Downward speed (pixels/sec)
    pub speed: f32,
    pub kind: ObjectKind,
}

/// A player shot travelling up the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub aabb: Aabb,
    /// Upward speed (pixels/sec)
    pub speed: f32,
}

/// The player's sprite; only x ever changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub aabb: Aabb,
}

impl Player {
    /// Player centred horizontally on its fixed row
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            aabb: Aabb::new(
                tuning.player_max_x() / 2.0,
                tuning.player_y(),
                tuning.player_width,
                tuning.player_height,
            ),
        }
    }

    pub fn x(&self) -> f32 {
        self.aabb.pos.x
    }

    /// Move to `x`, clamped to `[0, max_x]`
    pub fn move_to(&mut self, x: f32, max_x: f32) {
        self.aabb.pos.x = x.clamp(0.0, max_x);
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: ObjectKind,
    pub alpha: f32, // 1 -> 0, removed at 0
    pub size: f32,
}

/// Rising text such as "+1" shown where something happened
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingText {
    pub pos: Vec2,
    pub vel: Vec2,
    pub alpha: f32,
    pub text: String,
}

/// Maximum particles
pub const MAX_PARTICLES: usize = 256;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Session RNG (spawn position, classification, display name)
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: SessionPhase,
    /// Paused inside Running; a paused tick advances nothing
    pub paused: bool,
    /// Display name for the leaderboard
    pub player_name: &'static str,

    pub score: u32,
    pub lives: i32,
    /// Starts at 1, never decreases
    pub level: u32,
    /// Points scored since the last level-up
    pub points_since_level: u32,
    /// Countdown in seconds
    pub time_remaining: f32,
    /// Simulation tick counter
    pub time_ticks: u64,

    pub player: Player,
    pub spawner: Spawner,
    /// Seconds until the player may fire again
    pub shoot_cooldown: f32,

    pub objects: Vec<FallingObject>,
    pub projectiles: Vec<Projectile>,
    /// Visual only
    pub particles: Vec<Particle>,
    /// Visual only
    pub floating_texts: Vec<FloatingText>,
    /// Particle cap (0 disables particles)
    pub max_particles: usize,
    pub floating_text_enabled: bool,

    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a not-yet-started session with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: SessionPhase::NotStarted,
            paused: false,
            player_name: names::PLAYER_NAMES[0],
            score: 0,
            lives: tuning.initial_lives,
            level: 1,
            points_since_level: 0,
            time_remaining: tuning.time_limit,
            time_ticks: 0,
            player: Player::new(&tuning),
            spawner: Spawner::new(&tuning),
            shoot_cooldown: 0.0,
            objects: Vec::new(),
            projectiles: Vec::new(),
            particles: Vec::new(),
            floating_texts: Vec::new(),
            max_particles: MAX_PARTICLES,
            floating_text_enabled: true,
            tuning,
            next_id: 1,
        }
    }

    /// Begin play if the session has not started yet
    pub fn start(&mut self) {
        if self.phase == SessionPhase::NotStarted {
            self.reset();
        }
    }

    /// Reinitialize every store and counter and enter Running.
    ///
    /// The RNG keeps its stream so consecutive sessions differ.
    pub fn reset(&mut self) {
        self.paused = false;
        self.score = 0;
        self.lives = self.tuning.initial_lives;
        self.level = 1;
        self.points_since_level = 0;
        self.time_remaining = self.tuning.time_limit;
        self.time_ticks = 0;
        self.player = Player::new(&self.tuning);
        self.spawner = Spawner::new(&self.tuning);
        self.shoot_cooldown = 0.0;
        self.objects.clear();
        self.projectiles.clear();
        self.particles.clear();
        self.floating_texts.clear();
        self.next_id = 1;
        self.player_name = names::pick_name(&mut self.rng);
        self.phase = SessionPhase::Running;
        log::info!("Session started for {}", self.player_name);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place a falling object with its top-left corner at (x, y)
    pub fn push_object(&mut self, x: f32, y: f32, kind: ObjectKind) -> u32 {
        let id = self.next_entity_id();
        self.objects.push(FallingObject {
            id,
            aabb: Aabb::new(x, y, self.tuning.object_width, self.tuning.object_height),
            speed: super::spawner::fall_speed_for_score(&self.tuning, self.score),
            kind,
        });
        id
    }

    /// Fire a projectile centred on the player's current x, from its top edge
    pub fn fire_projectile(&mut self) -> u32 {
        let id = self.next_entity_id();
        let t = &self.tuning;
        let x = self.player.aabb.center().x - t.projectile_width / 2.0;
        let y = self.player.aabb.top() - t.projectile_height;
        self.projectiles.push(Projectile {
            id,
            aabb: Aabb::new(x, y, t.projectile_width, t.projectile_height),
            speed: t.projectile_speed,
        });
        id
    }
}
