//! Per-frame simulation step
//!
//! Order within a tick:
//! 1. input (pause, movement, firing)
//! 2. spawning
//! 3. movement of objects and projectiles
//! 4. collision resolution, one outcome per object
//! 5. effects, countdown, terminal guards

use glam::Vec2;

use super::collision::{exited_bottom, exited_top};
use super::effects;
use super::rules::{self, Outcome};
use super::spawner::roll_object;
use super::state::{GameEvent, GameState, ObjectKind, SessionPhase};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position mapped to the player's left edge; overrides `move_dir`
    pub target_x: Option<f32>,
    /// Keyboard movement in [-1, 1] (left/right)
    pub move_dir: f32,
    /// Fire a projectile (click/space)
    pub shoot: bool,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

/// What a tick changed
#[derive(Debug, Clone, PartialEq)]
pub struct StateDelta {
    pub score_delta: i64,
    pub lives_delta: i32,
    pub level_delta: u32,
    /// Phase after the tick
    pub phase: SessionPhase,
    pub events: Vec<GameEvent>,
}

impl StateDelta {
    fn unchanged(phase: SessionPhase) -> Self {
        Self {
            score_delta: 0,
            lives_delta: 0,
            level_delta: 0,
            phase,
            events: Vec::new(),
        }
    }

    /// Terminal phase entered during this tick, if any
    pub fn ended(&self) -> Option<SessionPhase> {
        let entered = self
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::Won { .. } | GameEvent::Lost { .. }));
        if entered { Some(self.phase) } else { None }
    }
}

/// Advance the session by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> StateDelta {
    if state.phase != SessionPhase::Running {
        return StateDelta::unchanged(state.phase);
    }

    if input.pause {
        state.paused = !state.paused;
        log::debug!("Paused: {}", state.paused);
    }
    if state.paused {
        return StateDelta::unchanged(state.phase);
    }

    let score_before = state.score;
    let lives_before = state.lives;
    let level_before = state.level;
    let mut events = Vec::new();

    let input = if input.idle_mode {
        autopilot(state, input)
    } else {
        input.clone()
    };

    state.time_ticks += 1;

    // Player movement
    let max_x = state.tuning.player_max_x();
    if let Some(x) = input.target_x {
        state.player.move_to(x, max_x);
    } else if input.move_dir != 0.0 {
        let dx = input.move_dir.clamp(-1.0, 1.0) * state.tuning.player_speed * dt;
        let x = state.player.x() + dx;
        state.player.move_to(x, max_x);
    }

    // Firing
    state.shoot_cooldown = (state.shoot_cooldown - dt).max(0.0);
    if input.shoot && state.shoot_cooldown <= 0.0 {
        let id = state.fire_projectile();
        state.shoot_cooldown = state.tuning.shoot_cooldown;
        events.push(GameEvent::Fired { id });
    }

    // Spawning
    if state.spawner.advance(dt) {
        let id = state.next_entity_id();
        let object = roll_object(&state.tuning, &mut state.rng, id, state.score);
        log::debug!("Spawned {:?} #{} at x={:.1}", object.kind, id, object.aabb.pos.x);
        events.push(GameEvent::Spawned {
            id,
            kind: object.kind,
        });
        state.objects.push(object);
    }

    // Movement
    for object in &mut state.objects {
        object.aabb.pos.y += object.speed * dt;
    }
    for projectile in &mut state.projectiles {
        projectile.aabb.pos.y -= projectile.speed * dt;
    }
    state.projectiles.retain(|p| !exited_top(&p.aabb));

    // Collisions
    if resolve_collisions(state, &mut events) {
        return finish(state, score_before, lives_before, level_before, events);
    }

    effects::update(state, dt);

    state.time_remaining = (state.time_remaining - dt).max(0.0);
    rules::check_all_guards(state, &mut events);

    finish(state, score_before, lives_before, level_before, events)
}

/// Resolve at most one outcome per object.
///
/// Objects are walked in reverse index order so removing the current entry
/// never shifts one that has not been visited yet. Returns true once the
/// session has ended; remaining objects are left untouched.
fn resolve_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    let field_height = state.tuning.field_height;

    for i in (0..state.objects.len()).rev() {
        let object = &state.objects[i];
        let (id, kind, aabb) = (object.id, object.kind, object.aabb);

        let outcome = if aabb.overlaps(&state.player.aabb) {
            state.objects.remove(i);
            events.push(GameEvent::Caught { id, kind });
            Outcome::Caught(kind)
        } else if let Some(j) = state
            .projectiles
            .iter()
            .rposition(|p| p.aabb.overlaps(&aabb))
        {
            state.objects.remove(i);
            state.projectiles.remove(j);
            events.push(GameEvent::ShotDown { id, kind });
            Outcome::ShotDown(kind)
        } else if exited_bottom(&aabb, field_height) {
            state.objects.remove(i);
            events.push(GameEvent::Missed { id, kind });
            Outcome::Missed(kind)
        } else {
            continue;
        };

        rules::apply_outcome(state, outcome, events);
        outcome_effects(state, outcome, aabb.center());

        if rules::check_outcome_guards(state, events) {
            return true;
        }
    }

    false
}

fn outcome_effects(state: &mut GameState, outcome: Outcome, center: Vec2) {
    match outcome {
        Outcome::Caught(ObjectKind::Good) => {
            effects::burst(state, center, ObjectKind::Good);
            effects::float_text(state, center, "+1");
        }
        Outcome::Caught(ObjectKind::Bad) => {
            effects::burst(state, center, ObjectKind::Bad);
            effects::float_text(state, center, "-1 life");
        }
        Outcome::ShotDown(kind) => {
            effects::burst(state, center, kind);
            if kind == ObjectKind::Bad {
                effects::float_text(state, center, "+1 life");
            }
        }
        Outcome::Missed(_) => {
            let pos = Vec2::new(center.x, state.tuning.field_height - 20.0);
            effects::float_text(state, pos, "-1 life");
        }
    }
}

fn finish(
    state: &GameState,
    score_before: u32,
    lives_before: i32,
    level_before: u32,
    events: Vec<GameEvent>,
) -> StateDelta {
    StateDelta {
        score_delta: state.score as i64 - score_before as i64,
        lives_delta: state.lives - lives_before,
        level_delta: state.level - level_before,
        phase: state.phase,
        events,
    }
}

/// Demo AI: chase the lowest good object, shoot bad ones overhead
fn autopilot(state: &GameState, input: &TickInput) -> TickInput {
    let mut input = input.clone();
    let player = &state.player.aabb;
    let half_width = player.size.x / 2.0;

    let overhead = |x0: f32, x1: f32| x0 < player.right() && player.left() < x1;

    let target = state
        .objects
        .iter()
        .filter(|o| o.kind == ObjectKind::Good && o.aabb.bottom() <= player.top())
        .max_by(|a, b| {
            a.aabb
                .pos
                .y
                .partial_cmp(&b.aabb.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(object) = target {
        input.target_x = Some(object.aabb.center().x - half_width);
    }

    input.shoot = state
        .objects
        .iter()
        .any(|o| o.kind == ObjectKind::Bad && overhead(o.aabb.left(), o.aabb.right()));

    input
}
