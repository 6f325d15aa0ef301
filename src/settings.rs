//! Game settings and preferences
//!
//! Persisted separately from high scores under their own storage key.

use serde::{Deserialize, Serialize};

use crate::persistence::{Storage, StorageError};
use crate::sim::state::MAX_PARTICLES;
use crate::tuning::{Tuning, Variant};

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Base tuning for this preset
    pub fn tuning(&self) -> Tuning {
        let base = Tuning::default();
        match self {
            Difficulty::Easy => Tuning {
                initial_lives: 5,
                time_limit: 90.0,
                base_fall_speed: 90.0,
                bad_probability: 0.15,
                ..base
            },
            Difficulty::Normal => base,
            Difficulty::Hard => Tuning {
                initial_lives: 2,
                time_limit: 45.0,
                base_fall_speed: 160.0,
                max_fall_speed: 420.0,
                bad_probability: 0.3,
                min_spawn_interval: 0.2,
                ..base
            },
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    /// Rule variant (bad objects on/off)
    pub variant: Variant,

    // === Visual Effects ===
    /// Particle bursts on catches and hits
    pub particles: bool,
    /// "+1" style floating text
    pub floating_text: bool,

    // === Accessibility ===
    /// Reduced motion (no particles)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            variant: Variant::Enriched,

            // Visual effects - all on by default
            particles: true,
            floating_text: true,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "catchfall_settings";

    /// Create settings from a difficulty preset
    pub fn from_preset(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// Effective tuning: the preset with the chosen variant applied
    pub fn tuning(&self) -> Tuning {
        Tuning {
            variant: self.variant,
            ..self.difficulty.tuning()
        }
    }

    /// Effective particle count cap (respects reduced_motion)
    pub fn max_particles(&self) -> usize {
        if !self.particles || self.reduced_motion {
            0
        } else {
            MAX_PARTICLES
        }
    }

    /// Load settings, falling back to defaults on missing/corrupt data
    pub fn load(storage: &dyn Storage) -> Self {
        match storage.read(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Discarding corrupt settings: {}", e);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read settings: {}", e);
                Self::default()
            }
        }
    }

    /// Save settings
    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        let json = serde_json::to_string(self)?;
        storage.write(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
