//! Score, lives and level bookkeeping plus the session state machine
//!
//! Collision outcomes feed [`apply_outcome`]. Terminal guards are evaluated in
//! a fixed priority order, first match wins:
//! 1. lives <= 0      -> Lost
//! 2. score >= win    -> Won
//! 3. time <= 0       -> Lost

use super::state::{GameEvent, GameState, LossReason, ObjectKind, SessionPhase};

/// The single result applied to an object in a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Object overlapped the player
    Caught(ObjectKind),
    /// Object hit by a projectile
    ShotDown(ObjectKind),
    /// Object left the bottom of the field uncaught
    Missed(ObjectKind),
}

/// Mutate score/lives/level for one outcome
pub fn apply_outcome(state: &mut GameState, outcome: Outcome, events: &mut Vec<GameEvent>) {
    match outcome {
        Outcome::Caught(ObjectKind::Good) => award_point(state, events),
        Outcome::Caught(ObjectKind::Bad) => state.lives -= 1,
        Outcome::ShotDown(ObjectKind::Bad) => state.lives += 1,
        Outcome::ShotDown(ObjectKind::Good) => {}
        Outcome::Missed(_) => state.lives -= 1,
    }
}

/// Score a point, levelling up every `points_per_level` points
fn award_point(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.score += 1;
    state.points_since_level += 1;

    if state.points_since_level >= state.tuning.points_per_level.max(1) {
        state.points_since_level = 0;
        state.level += 1;
        state.spawner.set_level(&state.tuning, state.level);
        log::info!(
            "Level {} (spawn interval {:.2}s)",
            state.level,
            state.spawner.interval
        );
        events.push(GameEvent::LevelUp { level: state.level });
    }
}

/// Guards 1 and 2 (lives, then score). Checked after every outcome.
pub fn check_outcome_guards(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    if state.lives <= 0 {
        end_session(state, SessionPhase::Lost, events);
        return true;
    }
    if state.score >= state.tuning.win_score {
        end_session(state, SessionPhase::Won, events);
        return true;
    }
    false
}

/// All three guards in priority order. Checked once at the end of a tick.
pub fn check_all_guards(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    if check_outcome_guards(state, events) {
        return true;
    }
    if state.time_remaining <= 0.0 {
        end_session(state, SessionPhase::Lost, events);
        return true;
    }
    false
}

fn end_session(state: &mut GameState, phase: SessionPhase, events: &mut Vec<GameEvent>) {
    state.phase = phase;
    let score = state.score;
    match phase {
        SessionPhase::Won => {
            log::info!("{} won with {} points", state.player_name, score);
            events.push(GameEvent::Won { score });
        }
        SessionPhase::Lost => {
            let reason = if state.lives <= 0 {
                LossReason::OutOfLives
            } else {
                LossReason::OutOfTime
            };
            log::info!("{} lost ({:?}) with {} points", state.player_name, reason, score);
            events.push(GameEvent::Lost { score, reason });
        }
        SessionPhase::NotStarted | SessionPhase::Running => {}
    }
}
