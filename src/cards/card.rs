//! Card definitions - static card data.
//!
//! A `Card` is immutable once loaded and shared between the deck and the
//! boards it ends up on through `Arc`.

use serde::{Deserialize, Serialize};

use crate::boards::Board;
use crate::effects::Effect;
use crate::resources::ResourceSet;

/// Card color, which also decides the scoring category of its points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Raw materials.
    Brown,
    /// Manufactured goods.
    Grey,
    /// Commercial buildings.
    Yellow,
    /// Civilian buildings.
    Blue,
    /// Scientific buildings.
    Green,
    /// Military buildings.
    Red,
    /// Guilds.
    Purple,
}

impl Color {
    /// Every color.
    pub const ALL: [Color; 7] = [
        Color::Brown,
        Color::Grey,
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Purple,
    ];

    /// Whether cards of this color produce resources.
    #[must_use]
    pub const fn is_resource(self) -> bool {
        matches!(self, Color::Brown | Color::Grey)
    }
}

/// What must be paid to build a card or a wonder stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    /// Gold cost.
    #[serde(default)]
    pub gold: u32,
    /// Resources that must be produced.
    #[serde(default)]
    pub resources: ResourceSet,
}

impl Requirements {
    /// Nothing to pay.
    #[must_use]
    pub fn free() -> Self {
        Self::default()
    }

    /// Costs only gold.
    #[must_use]
    pub fn gold(gold: u32) -> Self {
        Self {
            gold,
            resources: ResourceSet::new(),
        }
    }

    /// Costs only resources.
    #[must_use]
    pub fn resources(resources: ResourceSet) -> Self {
        Self { gold: 0, resources }
    }

    /// Whether a board pays this from its own gold and production.
    ///
    /// Buying from neighbors is not considered.
    #[must_use]
    pub fn are_met_by(&self, board: &Board) -> bool {
        i64::from(board.gold()) >= i64::from(self.gold)
            && board.production().can_produce(&self.resources)
    }

    /// Resources the board cannot produce itself for this cost.
    #[must_use]
    pub fn missing_resources(&self, board: &Board) -> ResourceSet {
        let output = board.production().best_output_for(&self.resources);
        self.resources.difference(&output)
    }
}

/// A playable card.
///
/// ## Example
///
/// ```
/// use wonders_engine::cards::{Card, Color};
/// use wonders_engine::effects::Effect;
///
/// let tavern = Card::new("Tavern", Color::Yellow).with_effect(Effect::GoldIncrease(5));
/// assert_eq!(tavern.effects.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card name, unique within an age.
    pub name: String,

    /// Card color.
    pub color: Color,

    /// Building cost.
    #[serde(default)]
    pub requirements: Requirements,

    /// Effects applied when played and asked for points at scoring.
    #[serde(default)]
    pub effects: Vec<Effect>,

    /// Card that allows building this one for free.
    #[serde(default)]
    pub chain_parent: Option<String>,
}

impl Card {
    /// Create a free card without effects.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            requirements: Requirements::free(),
            effects: Vec::new(),
            chain_parent: None,
        }
    }

    /// Add an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Set the building cost.
    #[must_use]
    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }

    /// Set the card that chains into this one.
    #[must_use]
    pub fn with_chain_parent(mut self, parent: impl Into<String>) -> Self {
        self.chain_parent = Some(parent.into());
        self
    }

    /// Whether the board already played this card's chain parent.
    #[must_use]
    pub fn is_chained_on(&self, board: &Board) -> bool {
        self.chain_parent
            .as_deref()
            .is_some_and(|parent| board.has_played(parent))
    }

    /// Whether the board can build this card, for free through its chain
    /// or by paying from its own gold and production.
    #[must_use]
    pub fn is_playable_on(&self, board: &Board) -> bool {
        self.is_chained_on(board) || self.requirements.are_met_by(board)
    }
}
