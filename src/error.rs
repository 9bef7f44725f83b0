//! Error types for the rules engine.
//!
//! Every fallible operation returns [`EngineError`] through the crate's
//! [`Result`] alias. Resource shortfalls are never errors: set difference
//! clamps to zero and callers compare quantities themselves.

/// Errors raised by engine operations and content loading.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The wonder has no stage left to build.
    #[error("wonder {wonder} has already reached its maximum level ({max_level})")]
    WonderAtMaxLevel {
        /// Wonder name.
        wonder: String,
        /// Number of stages of the wonder.
        max_level: usize,
    },

    /// A wonder stage carries an effect that reads neighbor boards.
    ///
    /// Stage effects are applied without neighbors, so such a wonder is
    /// rejected when it is built.
    #[error("stage {stage} of wonder {wonder} has an effect that needs neighbor boards")]
    NeighborScopedStageEffect {
        /// Wonder name.
        wonder: String,
        /// 1-based stage index.
        stage: usize,
    },

    /// No deck exists for the requested age.
    #[error("no deck for age {0}")]
    MissingAge(u8),

    /// The named card is not part of the age's deck.
    #[error("card {name:?} not found in age {age}")]
    CardNotFound {
        /// Age searched.
        age: u8,
        /// Card name searched.
        name: String,
    },

    /// Dealing requires at least one player.
    #[error("cannot deal to zero players")]
    NoPlayers,

    /// The age's cards cannot be split evenly between the players.
    #[error("cannot deal {cards} cards evenly to {players} players")]
    UnevenDeal {
        /// Number of cards in the deck.
        cards: usize,
        /// Number of players.
        players: usize,
    },

    /// A seat index outside the table.
    #[error("seat {seat} is not at a table of {players} players")]
    UnknownSeat {
        /// Requested seat.
        seat: usize,
        /// Number of seated players.
        players: usize,
    },

    /// Settings hold a value the rules cannot work with.
    #[error("invalid settings: {field} {reason}")]
    InvalidSettings {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Content or settings could not be parsed.
    #[error("failed to parse content: {source}")]
    Content {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
