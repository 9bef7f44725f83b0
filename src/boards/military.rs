//! Military strength and conflict results.

use serde::{Deserialize, Serialize};

/// Shields plus the outcome of past conflicts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Military {
    shields: u32,
    victory_points: i32,
    defeat_tokens: u32,
}

/// Outcome of one conflict against one neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConflictOutcome {
    Victory,
    Defeat,
    Tie,
}

impl Military {
    /// No shields, no results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current shield count.
    #[must_use]
    pub fn shields(&self) -> u32 {
        self.shields
    }

    /// Add shields.
    pub fn add_shields(&mut self, count: u32) {
        self.shields += count;
    }

    /// Record a won conflict.
    pub fn victory(&mut self, points: i32) {
        self.victory_points += points;
    }

    /// Record a lost conflict: one defeat token and the lost points.
    pub fn defeat(&mut self, lost_points: i32) {
        self.defeat_tokens += 1;
        self.victory_points -= lost_points;
    }

    /// Number of defeat tokens taken.
    #[must_use]
    pub fn defeat_tokens(&self) -> u32 {
        self.defeat_tokens
    }

    /// Net military points, negative when defeats outweigh victories.
    #[must_use]
    pub fn total_points(&self) -> i32 {
        self.victory_points
    }

    /// Compare shields against an opponent's.
    #[must_use]
    pub fn confront(&self, opponent_shields: u32) -> ConflictOutcome {
        match self.shields.cmp(&opponent_shields) {
            std::cmp::Ordering::Greater => ConflictOutcome::Victory,
            std::cmp::Ordering::Less => ConflictOutcome::Defeat,
            std::cmp::Ordering::Equal => ConflictOutcome::Tie,
        }
    }
}
