//! Science symbols and science scoring.
//!
//! Science scores the square of each symbol count plus a bonus for every
//! complete set of the three symbols. Wildcard symbols count as any kind
//! the owner wants, chosen at scoring time to maximize the score.

use serde::{Deserialize, Serialize};

/// Bonus for each complete set of the three symbols in the standard rules.
pub const DEFAULT_SET_BONUS: u32 = 7;

/// A science symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScienceType {
    Compass,
    Wheel,
    Tablet,
}

impl ScienceType {
    /// The three symbols, in index order.
    pub const ALL: [ScienceType; 3] = [ScienceType::Compass, ScienceType::Wheel, ScienceType::Tablet];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Collected science symbols plus wildcards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScienceTally {
    #[serde(default)]
    counts: [u32; 3],
    #[serde(default)]
    wildcards: u32,
}

impl ScienceTally {
    /// Empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally holding `count` of one symbol.
    #[must_use]
    pub fn of(kind: ScienceType, count: u32) -> Self {
        let mut tally = Self::new();
        tally.add(kind, count);
        tally
    }

    /// Tally holding `count` wildcards.
    #[must_use]
    pub fn wildcard(count: u32) -> Self {
        let mut tally = Self::new();
        tally.add_wildcard(count);
        tally
    }

    /// Add symbols of one kind.
    pub fn add(&mut self, kind: ScienceType, count: u32) {
        self.counts[kind.index()] += count;
    }

    /// Add wildcard symbols.
    pub fn add_wildcard(&mut self, count: u32) {
        self.wildcards += count;
    }

    /// Add every symbol of another tally.
    pub fn add_all(&mut self, other: &ScienceTally) {
        for kind in ScienceType::ALL {
            self.add(kind, other.count(kind));
        }
        self.add_wildcard(other.wildcards);
    }

    /// Count of one symbol, wildcards excluded.
    #[must_use]
    pub fn count(&self, kind: ScienceType) -> u32 {
        self.counts[kind.index()]
    }

    /// Number of wildcards.
    #[must_use]
    pub fn wildcards(&self) -> u32 {
        self.wildcards
    }

    /// Best science score under the standard set bonus.
    ///
    /// The set bonus counts, so {2, 1, 0} plus one wildcard scores 13 by
    /// completing a set. Use [`best_score_with`](Self::best_score_with)
    /// with a zero bonus for the plain sum of squares.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score_with(DEFAULT_SET_BONUS)
    }

    /// Best science score over every assignment of the wildcards.
    ///
    /// Each wildcard goes to one of the three symbols or stays unused.
    #[must_use]
    pub fn best_score_with(&self, set_bonus: u32) -> u32 {
        let w = self.wildcards;
        let mut best = 0;
        for a in 0..=w {
            for b in 0..=(w - a) {
                for c in 0..=(w - a - b) {
                    let counts = [self.counts[0] + a, self.counts[1] + b, self.counts[2] + c];
                    best = best.max(Self::score_of(counts, set_bonus));
                }
            }
        }
        best
    }

    fn score_of(counts: [u32; 3], set_bonus: u32) -> u32 {
        let squares: u32 = counts.iter().map(|c| c * c).sum();
        let sets = counts.iter().copied().min().unwrap_or(0);
        squares + set_bonus * sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(compass: u32, wheel: u32, tablet: u32, wildcards: u32) -> ScienceTally {
        let mut t = ScienceTally::new();
        t.add(ScienceType::Compass, compass);
        t.add(ScienceType::Wheel, wheel);
        t.add(ScienceType::Tablet, tablet);
        t.add_wildcard(wildcards);
        t
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(ScienceTally::new().best_score(), 0);
    }

    #[test]
    fn test_squares_without_sets() {
        assert_eq!(tally(3, 0, 0, 0).best_score(), 9);
        assert_eq!(tally(2, 1, 0, 0).best_score(), 5);
    }

    #[test]
    fn test_set_bonus() {
        assert_eq!(tally(1, 1, 1, 0).best_score(), 10);
        assert_eq!(tally(2, 2, 2, 0).best_score(), 26);
    }

    #[test]
    fn test_wildcard_picks_best_assignment() {
        // Candidates: {3,1,0}=10, {2,2,0}=8, {2,1,1}=6+7=13.
        assert_eq!(tally(2, 1, 0, 1).best_score(), 13);
        // Without a set bonus the compass wins.
        assert_eq!(tally(2, 1, 0, 1).best_score_with(0), 10);
    }

    #[test]
    fn test_two_wildcards() {
        // {1,1,1}+2 wildcards: {3,1,1}=11+7=18, {2,2,1}=9+7=16.
        assert_eq!(tally(1, 1, 1, 2).best_score(), 18);
        // Only wildcards: {2,0,0}=4, {1,1,0}=2.
        assert_eq!(ScienceTally::wildcard(2).best_score(), 4);
    }

    #[test]
    fn test_add_all() {
        let mut t = ScienceTally::of(ScienceType::Wheel, 1);
        t.add_all(&tally(1, 1, 0, 1));

        assert_eq!(t.count(ScienceType::Compass), 1);
        assert_eq!(t.count(ScienceType::Wheel), 2);
        assert_eq!(t.count(ScienceType::Tablet), 0);
        assert_eq!(t.wildcards(), 1);
    }
}
