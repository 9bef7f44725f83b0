//! Bonus per board element.
//!
//! Grants gold when applied and points at scoring for every matching
//! element found on a chosen set of boards: cards of given colors, built
//! wonder stages, or defeat tokens.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::neighbors::Neighbors;
use crate::boards::Board;
use crate::cards::Color;
use crate::core::RelativePosition;

/// What is counted on each board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardElement {
    /// Played cards whose color is one of these.
    Cards(SmallVec<[Color; 4]>),
    /// Built wonder stages.
    WonderLevel,
    /// Defeat tokens taken in military conflicts.
    DefeatTokens,
}

impl BoardElement {
    /// Played cards of the given colors.
    pub fn cards(colors: impl IntoIterator<Item = Color>) -> Self {
        Self::Cards(colors.into_iter().collect())
    }

    /// Number of matching elements on one board.
    #[must_use]
    pub fn count_in(&self, board: &Board) -> u32 {
        match self {
            BoardElement::Cards(colors) => board.count_cards_of_colors(colors),
            BoardElement::WonderLevel => board.wonder_level() as u32,
            BoardElement::DefeatTokens => board.military().defeat_tokens(),
        }
    }
}

/// Gold and points per matching element on the selected boards.
///
/// ## Example
///
/// ```
/// use wonders_engine::core::RelativePosition;
/// use wonders_engine::effects::{BoardElement, BonusPerBoardElement};
///
/// // 1 gold per wonder stage built by the owner and its left neighbor.
/// let bonus = BonusPerBoardElement::new(
///     [RelativePosition::Own, RelativePosition::Left],
///     BoardElement::WonderLevel,
/// )
/// .with_gold(1);
/// assert!(bonus.requires_neighbors());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusPerBoardElement {
    /// Boards to count on.
    pub boards: SmallVec<[RelativePosition; 3]>,
    /// Gold granted per element when applied.
    #[serde(default)]
    pub gold: u32,
    /// Points per element at scoring.
    #[serde(default)]
    pub points: u32,
    /// What is counted.
    pub element: BoardElement,
}

impl BonusPerBoardElement {
    /// A bonus granting nothing yet; set rates with `with_gold`/`with_points`.
    pub fn new(boards: impl IntoIterator<Item = RelativePosition>, element: BoardElement) -> Self {
        Self {
            boards: boards.into_iter().collect(),
            gold: 0,
            points: 0,
            element,
        }
    }

    /// Set the gold per element.
    #[must_use]
    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    /// Set the points per element.
    #[must_use]
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    /// Whether any counted board is a neighbor's.
    #[must_use]
    pub fn requires_neighbors(&self) -> bool {
        self.boards.iter().any(|p| p.is_neighbor())
    }

    /// Matching elements over every selected board that is present.
    ///
    /// Each position counts once however many times it is listed.
    #[must_use]
    pub fn match_count(&self, board: &Board, neighbors: Neighbors<'_>) -> u32 {
        [RelativePosition::Own, RelativePosition::Left, RelativePosition::Right]
            .into_iter()
            .filter(|position| self.boards.contains(position))
            .filter_map(|position| neighbors.resolve(board, position))
            .map(|b| self.element.count_in(b))
            .sum()
    }

    pub(crate) fn apply(&self, board: &mut Board, neighbors: Neighbors<'_>) {
        let count = self.match_count(board, neighbors);
        let gain = self.gold.saturating_mul(count);
        if gain > 0 {
            tracing::debug!(count, gain, element = ?self.element, "bonus gold granted");
            board.add_gold(gain);
        }
    }

    pub(crate) fn compute_points(&self, board: &Board, neighbors: Neighbors<'_>) -> u32 {
        self.points.saturating_mul(self.match_count(board, neighbors))
    }
}
