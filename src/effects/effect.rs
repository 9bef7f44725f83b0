//! Effect definitions.
//!
//! An effect is attached to a card or a wonder stage. It is applied once
//! when the card is played or the stage is built, and asked for its points
//! once at scoring. Effects carry only their configuration: points are
//! recomputed from the current boards every time they are asked.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::bonus::BonusPerBoardElement;
use super::neighbors::Neighbors;
use crate::boards::{Board, ScienceTally};
use crate::resources::{Production, Provider, ResourceType};

/// Cheaper trading for some resources from some neighbors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    /// Discounted resources.
    pub resource_types: SmallVec<[ResourceType; 4]>,
    /// Neighbors the discount applies to.
    pub providers: SmallVec<[Provider; 2]>,
    /// New unit price.
    pub discounted_price: u32,
}

impl Discount {
    /// Create a discount.
    pub fn new(
        resource_types: impl IntoIterator<Item = ResourceType>,
        providers: impl IntoIterator<Item = Provider>,
        discounted_price: u32,
    ) -> Self {
        Self {
            resource_types: resource_types.into_iter().collect(),
            providers: providers.into_iter().collect(),
            discounted_price,
        }
    }
}

/// A card or wonder-stage effect.
///
/// ## Immediate Effects
///
/// Applied to the owner's board once:
/// - `GoldIncrease`: Gold
/// - `ProductionIncrease`: Production, and public production when sellable
/// - `MilitaryReinforcements`: Shields
/// - `ScienceProgress`: Science symbols
/// - `Discount`: Trading costs
///
/// ## Scoring Effects
///
/// - `RawPointsIncrease`: Fixed points
/// - `BonusPerBoardElement`: Gold when applied and points at scoring, per
///   element found on the owner's and neighbors' boards
///
/// ## Composite
///
/// - `Batch`: Several effects from one source
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Add gold.
    GoldIncrease(u32),

    /// Fixed victory points at scoring.
    RawPointsIncrease(u32),

    /// Extend production.
    ProductionIncrease {
        production: Production,
        /// Whether neighbors may buy this production.
        #[serde(default)]
        sellable: bool,
    },

    /// Add shields.
    MilitaryReinforcements(u32),

    /// Add science symbols.
    ScienceProgress(ScienceTally),

    /// Lower trading costs.
    Discount(Discount),

    /// Gold and points per board element.
    BonusPerBoardElement(BonusPerBoardElement),

    /// Execute multiple effects in sequence.
    Batch(Vec<Effect>),
}

impl Effect {
    /// Create a sellable production increase.
    pub fn production(production: Production) -> Self {
        Self::ProductionIncrease {
            production,
            sellable: true,
        }
    }

    /// Create a batch of effects.
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::Batch(effects.into_iter().collect())
    }

    /// Whether this effect reads neighbor boards.
    #[must_use]
    pub fn requires_neighbors(&self) -> bool {
        match self {
            Effect::BonusPerBoardElement(bonus) => bonus.requires_neighbors(),
            Effect::Batch(effects) => effects.iter().any(Effect::requires_neighbors),
            Effect::GoldIncrease(_)
            | Effect::RawPointsIncrease(_)
            | Effect::ProductionIncrease { .. }
            | Effect::MilitaryReinforcements(_)
            | Effect::ScienceProgress(_)
            | Effect::Discount(_) => false,
        }
    }

    /// Apply the immediate part of this effect to its owner's board.
    ///
    /// Neighbors are only read.
    pub fn apply(&self, board: &mut Board, neighbors: Neighbors<'_>) {
        match self {
            Effect::GoldIncrease(amount) => {
                board.add_gold(*amount);
            }
            Effect::RawPointsIncrease(_) => {}
            Effect::ProductionIncrease {
                production,
                sellable,
            } => {
                board.production_mut().add_all(production);
                if *sellable {
                    board.public_production_mut().add_all(production);
                }
            }
            Effect::MilitaryReinforcements(shields) => {
                board.military_mut().add_shields(*shields);
            }
            Effect::ScienceProgress(tally) => {
                board.science_mut().add_all(tally);
            }
            Effect::Discount(discount) => {
                let rules = board.trading_rules_mut();
                for &provider in &discount.providers {
                    for &resource in &discount.resource_types {
                        rules.reduce_cost_from(provider, resource, discount.discounted_price);
                    }
                }
            }
            Effect::BonusPerBoardElement(bonus) => bonus.apply(board, neighbors),
            Effect::Batch(effects) => {
                for effect in effects {
                    effect.apply(board, neighbors);
                }
            }
        }
    }

    /// Points this effect is worth at scoring, given the current boards.
    #[must_use]
    pub fn compute_points(&self, board: &Board, neighbors: Neighbors<'_>) -> u32 {
        match self {
            Effect::RawPointsIncrease(points) => *points,
            Effect::BonusPerBoardElement(bonus) => bonus.compute_points(board, neighbors),
            Effect::Batch(effects) => effects
                .iter()
                .map(|effect| effect.compute_points(board, neighbors))
                .fold(0, u32::saturating_add),
            Effect::GoldIncrease(_)
            | Effect::ProductionIncrease { .. }
            | Effect::MilitaryReinforcements(_)
            | Effect::ScienceProgress(_)
            | Effect::Discount(_) => 0,
        }
    }
}
