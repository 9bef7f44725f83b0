//! Per-player board state.
//!
//! The board is the mutation surface of the engine: effects grow its
//! production, science, shields and gold, and lower its trading costs.
//! The turn orchestrator checks costs and prerequisites before calling
//! `add_card` or `upgrade_wonder_level`; the board does not.

use std::sync::Arc;

use im::Vector;

use super::military::Military;
use super::science::ScienceTally;
use crate::cards::{Card, Color};
use crate::core::Settings;
use crate::effects::Neighbors;
use crate::error::{EngineError, Result};
use crate::resources::{Production, TradingRules};
use crate::wonders::{Wonder, WonderStage};

/// One player's board.
///
/// Played cards live in a persistent vector, so cloning a board for
/// lookahead is cheap.
#[derive(Clone, Debug)]
pub struct Board {
    wonder: Arc<Wonder>,
    played_cards: Vector<Arc<Card>>,
    production: Production,
    public_production: Production,
    science: ScienceTally,
    trading_rules: TradingRules,
    military: Military,
    gold: i32,
    wonder_level: usize,
}

impl Board {
    /// Create a board for a wonder at the start of a game.
    ///
    /// The wonder's initial resources are produced from the start and can
    /// be sold to neighbors.
    #[must_use]
    pub fn new(wonder: Arc<Wonder>, settings: &Settings) -> Self {
        let mut production = Production::new();
        production.add_fixed(*wonder.initial_resources());
        let public_production = production.clone();

        Self {
            wonder,
            played_cards: Vector::new(),
            production,
            public_production,
            science: ScienceTally::new(),
            trading_rules: TradingRules::new(settings.default_trading_cost),
            military: Military::new(),
            gold: settings.initial_gold,
            wonder_level: 0,
        }
    }

    /// The wonder this board builds.
    #[must_use]
    pub fn wonder(&self) -> &Wonder {
        &self.wonder
    }

    /// Played cards, in play order.
    #[must_use]
    pub fn played_cards(&self) -> &Vector<Arc<Card>> {
        &self.played_cards
    }

    /// Append a played card. Effects are not applied here.
    pub fn add_card(&mut self, card: Arc<Card>) {
        self.played_cards.push_back(card);
    }

    /// Whether a card with this name was played.
    #[must_use]
    pub fn has_played(&self, name: &str) -> bool {
        self.played_cards.iter().any(|card| card.name == name)
    }

    /// Number of played cards whose color is one of `colors`.
    #[must_use]
    pub fn count_cards_of_colors(&self, colors: &[Color]) -> u32 {
        self.played_cards
            .iter()
            .filter(|card| colors.contains(&card.color))
            .count() as u32
    }

    /// Everything the board produces.
    #[must_use]
    pub fn production(&self) -> &Production {
        &self.production
    }

    /// The part of the production neighbors may buy.
    #[must_use]
    pub fn public_production(&self) -> &Production {
        &self.public_production
    }

    /// Trading costs when buying from neighbors.
    #[must_use]
    pub fn trading_rules(&self) -> &TradingRules {
        &self.trading_rules
    }

    /// Collected science symbols.
    #[must_use]
    pub fn science(&self) -> &ScienceTally {
        &self.science
    }

    /// Shields and conflict results.
    #[must_use]
    pub fn military(&self) -> &Military {
        &self.military
    }

    /// Mutable military, for recording conflict results.
    pub fn military_mut(&mut self) -> &mut Military {
        &mut self.military
    }

    /// Current gold.
    #[must_use]
    pub fn gold(&self) -> i32 {
        self.gold
    }

    /// Set gold. No clamping is done; callers keep it non-negative.
    pub fn set_gold(&mut self, amount: i32) {
        self.gold = amount;
    }

    /// Add gold, saturating at `i32::MAX`.
    pub fn add_gold(&mut self, amount: u32) {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.gold = self.gold.saturating_add(amount);
    }

    /// Number of wonder stages built.
    #[must_use]
    pub fn wonder_level(&self) -> usize {
        self.wonder_level
    }

    /// Stages built so far, in build order.
    #[must_use]
    pub fn reached_stages(&self) -> &[WonderStage] {
        &self.wonder.stages()[..self.wonder_level]
    }

    /// Build the next wonder stage and apply its effect.
    ///
    /// Stage effects are applied without neighbors. Fails, leaving the
    /// board unchanged, when every stage is already built.
    pub fn upgrade_wonder_level(&mut self) -> Result<()> {
        let next = self.wonder_level + 1;
        let wonder = Arc::clone(&self.wonder);
        let Some(stage) = wonder.stage(next) else {
            tracing::warn!(wonder = wonder.name(), level = self.wonder_level, "wonder already complete");
            return Err(EngineError::WonderAtMaxLevel {
                wonder: wonder.name().to_string(),
                max_level: wonder.stage_count(),
            });
        };

        self.wonder_level = next;
        stage.effect.apply(self, Neighbors::none());
        tracing::debug!(wonder = wonder.name(), level = next, "wonder stage built");
        Ok(())
    }

    pub(crate) fn production_mut(&mut self) -> &mut Production {
        &mut self.production
    }

    pub(crate) fn public_production_mut(&mut self) -> &mut Production {
        &mut self.public_production
    }

    pub(crate) fn science_mut(&mut self) -> &mut ScienceTally {
        &mut self.science
    }

    pub(crate) fn trading_rules_mut(&mut self) -> &mut TradingRules {
        &mut self.trading_rules
    }
}
