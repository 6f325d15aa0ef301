//! Falling-object spawner and difficulty curves

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::state::{FallingObject, ObjectKind};
use crate::tuning::{Tuning, Variant};

/// Fall speed for the current score: non-decreasing, capped at `max_fall_speed`
pub fn fall_speed_for_score(tuning: &Tuning, score: u32) -> f32 {
    (tuning.base_fall_speed + score as f32 * tuning.fall_speed_per_point)
        .min(tuning.max_fall_speed)
}

/// Spawn interval for a level: non-increasing, floored at `min_spawn_interval`
pub fn spawn_interval_for_level(tuning: &Tuning, level: u32) -> f32 {
    let steps = level.saturating_sub(1) as f32;
    (tuning.base_spawn_interval - steps * tuning.spawn_interval_step).max(tuning.min_spawn_interval)
}

/// Time accumulator deciding when the next object appears
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds since the last spawn
    pub accumulator: f32,
    /// Current spawn interval (seconds)
    pub interval: f32,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            accumulator: 0.0,
            interval: spawn_interval_for_level(tuning, 1),
        }
    }

    /// Recompute the interval after a level change
    pub fn set_level(&mut self, tuning: &Tuning, level: u32) {
        self.interval = spawn_interval_for_level(tuning, level);
    }

    /// Accumulate `dt`; returns true (and resets) once the interval is reached.
    /// At most one spawn per call.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.accumulator += dt;
        if self.accumulator >= self.interval {
            self.accumulator = 0.0;
            true
        } else {
            false
        }
    }
}

/// Roll a new object at the top of the field
pub fn roll_object<R: Rng>(tuning: &Tuning, rng: &mut R, id: u32, score: u32) -> FallingObject {
    let x = rng.random_range(0.0..=tuning.spawn_max_x());
    let kind = match tuning.variant {
        Variant::Baseline => ObjectKind::Good,
        Variant::Enriched => {
            if rng.random_bool(tuning.bad_probability.clamp(0.0, 1.0)) {
                ObjectKind::Bad
            } else {
                ObjectKind::Good
            }
        }
    };

    FallingObject {
        id,
        aabb: Aabb::new(x, 0.0, tuning.object_width, tuning.object_height),
        speed: fall_speed_for_score(tuning, score),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_fall_speed_curve() {
        let t = Tuning::default();
        assert_eq!(fall_speed_for_score(&t, 0), t.base_fall_speed);
        assert!(fall_speed_for_score(&t, 5) > fall_speed_for_score(&t, 4));
        assert_eq!(fall_speed_for_score(&t, 100_000), t.max_fall_speed);
    }

    #[test]
    fn test_spawn_interval_curve() {
        let t = Tuning::default();
        assert_eq!(spawn_interval_for_level(&t, 1), 1.0);
        assert!((spawn_interval_for_level(&t, 2) - 0.9).abs() < 1e-6);
        assert_eq!(spawn_interval_for_level(&t, 50), t.min_spawn_interval);
        assert!(spawn_interval_for_level(&t, u32::MAX) > 0.0);
    }

    #[test]
    fn test_spawner_fires_once_per_interval() {
        let t = Tuning::default();
        let mut s = Spawner::new(&t);
        assert!(!s.advance(0.5));
        assert!(s.advance(0.5));
        assert_eq!(s.accumulator, 0.0);
        // A huge step still yields exactly one spawn
        assert!(s.advance(10.0));
        assert_eq!(s.accumulator, 0.0);
    }

    #[test]
    fn test_roll_object_in_bounds() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        for id in 0..500 {
            let obj = roll_object(&t, &mut rng, id, 0);
            assert!(obj.aabb.left() >= 0.0);
            assert!(obj.aabb.right() <= t.field_width);
            assert_eq!(obj.aabb.top(), 0.0);
        }
    }

    #[test]
    fn test_baseline_has_no_bad_objects() {
        let t = Tuning {
            variant: Variant::Baseline,
            bad_probability: 1.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(42);
        for id in 0..100 {
            assert_eq!(roll_object(&t, &mut rng, id, 0).kind, ObjectKind::Good);
        }
    }

    #[test]
    fn test_enriched_bad_ratio() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let bad = (0..5000)
            .filter(|&id| roll_object(&t, &mut rng, id, 0).kind == ObjectKind::Bad)
            .count();
        // 0.2 * 5000 = 1000
        assert!((800..1200).contains(&bad), "bad count {bad}");
    }
}
