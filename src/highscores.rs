//! Highscore tracking
//!
//! The simulation only reports a final kill count; where it is stored is up
//! to the host. `HighScores` is the in-memory implementation.

use serde::{Deserialize, Serialize};

/// Persisted best-kills store
pub trait HighscoreStore {
    /// Best kill count so far
    fn get(&self) -> u32;

    /// Record `kills` if it beats the current best. Returns true if it did.
    fn maybe_set(&mut self, kills: u32) -> bool;
}

/// Best kill count across runs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub best_kills: u32,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighscoreStore for HighScores {
    fn get(&self) -> u32 {
        self.best_kills
    }

    fn maybe_set(&mut self, kills: u32) -> bool {
        if kills > self.best_kills {
            self.best_kills = kills;
            log::info!("New best: {} kills", kills);
            true
        } else {
            false
        }
    }
}
