//! Game settings.
//!
//! Settings hold the numeric constants of a game: starting gold, the
//! baseline trading cost, and the scoring conversions. They can be built
//! in code with the `with_*` builders or loaded from JSON, where every
//! missing field falls back to the standard rules.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Number of ages in a game.
pub const AGE_COUNT: usize = 3;

/// Numeric constants shared by every board of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gold each board starts with.
    pub initial_gold: i32,

    /// Baseline unit cost of buying a resource from a neighbor.
    pub default_trading_cost: u32,

    /// Gold coins converted into one victory point at scoring.
    pub coins_per_point: u32,

    /// Victory points for winning a military conflict, per age (1-based ages).
    pub won_points_per_age: [i32; AGE_COUNT],

    /// Victory points lost for each defeat token.
    pub lost_points_per_defeat: i32,

    /// Bonus points for each complete set of the three science symbols.
    pub science_set_bonus: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_gold: 3,
            default_trading_cost: 2,
            coins_per_point: 3,
            won_points_per_age: [1, 3, 5],
            lost_points_per_defeat: 1,
            science_set_bonus: 7,
        }
    }
}

impl Settings {
    /// Create settings following the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from JSON. Missing fields keep their defaults.
    ///
    /// Loaded settings are validated before they are returned.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check values that scoring divides by.
    pub fn validate(&self) -> Result<()> {
        if self.coins_per_point == 0 {
            return Err(EngineError::InvalidSettings {
                field: "coins_per_point",
                reason: "must be positive",
            });
        }
        Ok(())
    }

    /// Set the starting gold.
    #[must_use]
    pub fn with_initial_gold(mut self, gold: i32) -> Self {
        self.initial_gold = gold;
        self
    }

    /// Set the baseline trading cost.
    #[must_use]
    pub fn with_default_trading_cost(mut self, cost: u32) -> Self {
        self.default_trading_cost = cost;
        self
    }

    /// Set how many coins make one victory point.
    #[must_use]
    pub fn with_coins_per_point(mut self, coins: u32) -> Self {
        assert!(coins > 0, "Coins per point must be positive");
        self.coins_per_point = coins;
        self
    }

    /// Victory points for a military win in the given 1-based age.
    ///
    /// Ages past the last one use the last age's value.
    #[must_use]
    pub fn won_points(&self, age: u8) -> i32 {
        let idx = usize::from(age.max(1)) - 1;
        self.won_points_per_age[idx.min(AGE_COUNT - 1)]
    }
}
