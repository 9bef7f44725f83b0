//! # wonders-engine
//!
//! Rules engine for a Seven Wonders style card-drafting game.
//!
//! ## Design Principles
//!
//! 1. **Effects as data**: Card and wonder-stage effects are a closed enum.
//!    Applying one mutates only its owner's board; scoring re-derives points
//!    from the boards every time.
//!
//! 2. **Read-only neighbors**: Effects see neighbor boards through shared
//!    references, and wonder stages see no neighbors at all. Wonders whose
//!    stage effects would need neighbors are rejected when loaded.
//!
//! 3. **No hidden orchestration**: The engine does not run turns or ages.
//!    A surrounding orchestrator checks costs, then calls `Table` or
//!    `Board` methods one event at a time.
//!
//! ## Modules
//!
//! - `core`: Seats, relative positions, settings, deterministic RNG
//! - `resources`: Resource sets, production with choices, trading costs
//! - `effects`: Effect enum, per-board-element bonus, neighbor view
//! - `cards`: Cards, colors, requirements, decks per age
//! - `wonders`: Wonder templates and stages
//! - `boards`: Board state, science, military, scoring
//! - `table`: Seated boards and engine events
//! - `error`: Engine error type

pub mod boards;
pub mod cards;
pub mod core;
pub mod effects;
pub mod error;
pub mod resources;
pub mod table;
pub mod wonders;

// Re-export commonly used types
pub use crate::core::{GameRng, PlayerId, RelativePosition, Settings};

pub use crate::resources::{BoughtResources, Production, Provider, ResourceSet, ResourceType, TradingRules};

pub use crate::effects::{BoardElement, BonusPerBoardElement, Discount, Effect, Neighbors};

pub use crate::cards::{Card, Color, Decks, Hand, Requirements};

pub use crate::wonders::{Wonder, WonderStage};

pub use crate::boards::{Board, Military, ScienceTally, ScienceType, Score, ScoreCategory};

pub use crate::table::Table;

pub use crate::error::{EngineError, Result};
