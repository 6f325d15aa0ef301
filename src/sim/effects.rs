//! Particles and floating text
//!
//! Purely visual. Nothing here reads or writes score, lives or the RNG, so
//! toggling effects never changes how a seeded session plays out.

use glam::Vec2;

use super::state::{FloatingText, GameState, ObjectKind, Particle};

/// Particles per burst
const BURST_COUNT: usize = 12;
/// Particle alpha lost per second
const PARTICLE_FADE: f32 = 1.8;
/// Floating text alpha lost per second
const TEXT_FADE: f32 = 1.0;
/// Floating text rise speed (pixels/sec)
const TEXT_RISE: f32 = 40.0;

/// Radial burst of particles at `center`
pub fn burst(state: &mut GameState, center: Vec2, kind: ObjectKind) {
    for i in 0..BURST_COUNT {
        if state.particles.len() >= state.max_particles {
            break;
        }
        let angle = i as f32 / BURST_COUNT as f32 * std::f32::consts::TAU;
        // Alternate fast/slow so the burst has two rings
        let speed = if i % 2 == 0 { 140.0 } else { 90.0 };
        state.particles.push(Particle {
            pos: center,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            kind,
            alpha: 1.0,
            size: 4.0,
        });
    }
}

/// Rising text at `pos`
pub fn float_text(state: &mut GameState, pos: Vec2, text: &str) {
    if !state.floating_text_enabled {
        return;
    }
    state.floating_texts.push(FloatingText {
        pos,
        vel: Vec2::new(0.0, -TEXT_RISE),
        alpha: 1.0,
        text: text.to_string(),
    });
}

/// Move, fade and drop finished effects
pub fn update(state: &mut GameState, dt: f32) {
    for particle in state.particles.iter_mut() {
        particle.pos += particle.vel * dt;
        particle.vel *= 0.96;
        particle.alpha -= PARTICLE_FADE * dt;
        particle.size *= 0.99;
    }
    state.particles.retain(|p| p.alpha > 0.0);

    for text in state.floating_texts.iter_mut() {
        text.pos += text.vel * dt;
        text.alpha -= TEXT_FADE * dt;
    }
    state.floating_texts.retain(|t| t.alpha > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_burst_respects_cap() {
        let mut state = GameState::new(1, Tuning::default());
        state.max_particles = 5;
        burst(&mut state, Vec2::ZERO, ObjectKind::Good);
        assert_eq!(state.particles.len(), 5);

        state.max_particles = 0;
        state.particles.clear();
        burst(&mut state, Vec2::ZERO, ObjectKind::Good);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_effects_decay_to_removal() {
        let mut state = GameState::new(1, Tuning::default());
        burst(&mut state, Vec2::new(100.0, 100.0), ObjectKind::Bad);
        float_text(&mut state, Vec2::new(100.0, 100.0), "+1");
        assert!(!state.particles.is_empty());
        assert_eq!(state.floating_texts.len(), 1);

        update(&mut state, 0.1);
        assert!(state.floating_texts[0].pos.y < 100.0);
        assert!(state.floating_texts[0].alpha < 1.0);

        for _ in 0..20 {
            update(&mut state, 0.1);
        }
        assert!(state.particles.is_empty());
        assert!(state.floating_texts.is_empty());
    }

    #[test]
    fn test_floating_text_toggle() {
        let mut state = GameState::new(1, Tuning::default());
        state.floating_text_enabled = false;
        float_text(&mut state, Vec2::ZERO, "+1");
        assert!(state.floating_texts.is_empty());
    }
}
