//! Resource model: quantities, production, and trading.
//!
//! - `ResourceSet`: multiset of resource quantities with clamped difference
//! - `Production`: fixed output plus either/or choice groups
//! - `TradingRules`: per-neighbor unit costs, only ever lowered

mod production;
mod resource_set;
mod trading;

pub use production::{ChoiceGroup, Production};
pub use resource_set::{ResourceSet, ResourceType, RESOURCE_TYPE_COUNT};
pub use trading::{BoughtResources, Provider, TradingRules};
