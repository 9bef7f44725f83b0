//! End-of-game scoring of one board.
//!
//! Each played card's effects and each built stage's effect is asked for
//! its points, against the board and its neighbors as they are at the end
//! of the game. Science, military and gold are scored from the board
//! itself.

use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::cards::Color;
use crate::core::Settings;
use crate::effects::Neighbors;

/// Scoring category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Civil,
    Science,
    Military,
    Trade,
    Guild,
    Wonder,
    Gold,
}

impl ScoreCategory {
    /// Category receiving the effect points of a card color.
    #[must_use]
    pub const fn for_color(color: Color) -> Self {
        match color {
            Color::Yellow => ScoreCategory::Trade,
            Color::Green => ScoreCategory::Science,
            Color::Red => ScoreCategory::Military,
            Color::Purple => ScoreCategory::Guild,
            Color::Brown | Color::Grey | Color::Blue => ScoreCategory::Civil,
        }
    }
}

/// Points of one board, by category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub civil: i32,
    pub science: i32,
    pub military: i32,
    pub trade: i32,
    pub guild: i32,
    pub wonder: i32,
    pub gold: i32,
}

impl Score {
    /// Score a board against its neighbors.
    #[must_use]
    pub fn compute(board: &Board, neighbors: Neighbors<'_>, settings: &Settings) -> Self {
        let mut score = Score::default();

        for card in board.played_cards() {
            let points = card
                .effects
                .iter()
                .map(|effect| effect.compute_points(board, neighbors))
                .fold(0, u32::saturating_add);
            score.add(ScoreCategory::for_color(card.color), to_points(points));
        }

        let stage_points = board
            .reached_stages()
            .iter()
            .map(|stage| stage.effect.compute_points(board, neighbors))
            .fold(0, u32::saturating_add);
        score.add(ScoreCategory::Wonder, to_points(stage_points));

        let science = board.science().best_score_with(settings.science_set_bonus);
        score.add(ScoreCategory::Science, to_points(science));
        score.add(ScoreCategory::Military, board.military().total_points());

        // Zero coins per point only gets here through unvalidated settings.
        let gold_points = i32::try_from(settings.coins_per_point)
            .ok()
            .and_then(|coins| board.gold().max(0).checked_div(coins))
            .unwrap_or(0);
        score.add(ScoreCategory::Gold, gold_points);

        score
    }

    /// Add points to a category.
    pub fn add(&mut self, category: ScoreCategory, points: i32) {
        let slot = self.get_mut(category);
        *slot = slot.saturating_add(points);
    }

    /// Points of one category.
    #[must_use]
    pub fn get(&self, category: ScoreCategory) -> i32 {
        match category {
            ScoreCategory::Civil => self.civil,
            ScoreCategory::Science => self.science,
            ScoreCategory::Military => self.military,
            ScoreCategory::Trade => self.trade,
            ScoreCategory::Guild => self.guild,
            ScoreCategory::Wonder => self.wonder,
            ScoreCategory::Gold => self.gold,
        }
    }

    /// Sum of every category.
    #[must_use]
    pub fn total(&self) -> i32 {
        [self.civil, self.science, self.military, self.trade, self.guild, self.wonder, self.gold]
            .into_iter()
            .fold(0, i32::saturating_add)
    }

    fn get_mut(&mut self, category: ScoreCategory) -> &mut i32 {
        match category {
            ScoreCategory::Civil => &mut self.civil,
            ScoreCategory::Science => &mut self.science,
            ScoreCategory::Military => &mut self.military,
            ScoreCategory::Trade => &mut self.trade,
            ScoreCategory::Guild => &mut self.guild,
            ScoreCategory::Wonder => &mut self.wonder,
            ScoreCategory::Gold => &mut self.gold,
        }
    }
}

fn to_points(points: u32) -> i32 {
    i32::try_from(points).unwrap_or(i32::MAX)
}
