//! High score leaderboard system
//!
//! Tracks the top 5 session results, sorted descending by score. Stored as a
//! JSON array of `{name, score}` records.

use serde::{Deserialize, Serialize};

use crate::persistence::{Storage, StorageError};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Session display name
    pub name: String,
    /// Final score
    pub score: u32,
}

/// High score leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<HighScoreEntry>,
}

impl Leaderboard {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "catchfall_highscores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Entries, best first
    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    /// Check if a score would make the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Ties with the lowest entry rank below it and fall off
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a result. Returns the rank achieved (1-indexed) or None if it
    /// didn't make the cut.
    pub fn add_score(&mut self, name: &str, score: u32) -> Option<usize> {
        let rank = self.potential_rank(score)?;

        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                name: name.to_string(),
                score,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn to_json(&self) -> String {
        // A Vec of plain records always serializes
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parse stored text. Corrupt input yields an empty leaderboard; valid
    /// input is re-sorted and capped so hand-edited data can't break the
    /// ordering invariant.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Vec<HighScoreEntry>>(json) {
            Ok(mut entries) => {
                // Stable sort keeps earlier entries ahead on ties
                entries.sort_by(|a, b| b.score.cmp(&a.score));
                entries.truncate(MAX_HIGH_SCORES);
                Self { entries }
            }
            Err(e) => {
                log::warn!("Discarding corrupt high scores: {}", e);
                Self::new()
            }
        }
    }

    /// Load from storage, falling back to empty on missing/corrupt data
    pub fn load(storage: &dyn Storage) -> Self {
        match storage.read(Self::STORAGE_KEY) {
            Ok(Some(json)) => {
                let scores = Self::from_json(&json);
                log::info!("Loaded {} high scores", scores.len());
                scores
            }
            Ok(None) => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
            Err(e) => {
                log::warn!("Could not read high scores: {}", e);
                Self::new()
            }
        }
    }

    /// Save to storage
    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        storage.write(Self::STORAGE_KEY, &self.to_json())?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}
