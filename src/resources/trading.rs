//! Trading costs for buying resources from neighbors.
//!
//! Every (provider, resource) pair starts at the baseline cost from the
//! settings. Effects may lower a cost, never raise it, so the order in
//! which discounts are applied does not matter.

use serde::{Deserialize, Serialize};

use super::resource_set::{ResourceSet, ResourceType, RESOURCE_TYPE_COUNT};

/// Neighbor a resource is bought from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    LeftPlayer,
    RightPlayer,
}

impl Provider {
    /// Both providers.
    pub const ALL: [Provider; 2] = [Provider::LeftPlayer, Provider::RightPlayer];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Resources bought from one provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoughtResources {
    /// Seller.
    pub provider: Provider,
    /// What is bought.
    pub resources: ResourceSet,
}

impl BoughtResources {
    /// Create a purchase.
    #[must_use]
    pub fn new(provider: Provider, resources: ResourceSet) -> Self {
        Self { provider, resources }
    }
}

/// Unit cost of each resource, per provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingRules {
    default_cost: u32,
    costs: [[u32; RESOURCE_TYPE_COUNT]; 2],
}

impl TradingRules {
    /// Rules where everything costs `default_cost`.
    #[must_use]
    pub fn new(default_cost: u32) -> Self {
        Self {
            default_cost,
            costs: [[default_cost; RESOURCE_TYPE_COUNT]; 2],
        }
    }

    /// Baseline cost these rules started from.
    #[must_use]
    pub fn default_cost(&self) -> u32 {
        self.default_cost
    }

    /// Cheapest unit cost of a resource across both providers.
    #[must_use]
    pub fn unit_cost(&self, resource: ResourceType) -> u32 {
        Provider::ALL
            .iter()
            .map(|&p| self.cost(p, resource))
            .min()
            .unwrap_or(self.default_cost)
    }

    /// Unit cost of a resource bought from one provider.
    #[must_use]
    pub fn cost(&self, provider: Provider, resource: ResourceType) -> u32 {
        self.costs[provider.index()][resource.index()]
    }

    /// Lower the cost of a resource from both providers.
    pub fn reduce_cost(&mut self, resource: ResourceType, new_cost: u32) {
        for provider in Provider::ALL {
            self.reduce_cost_from(provider, resource, new_cost);
        }
    }

    /// Lower the cost of a resource from one provider.
    ///
    /// A cost higher than the current one is ignored.
    pub fn reduce_cost_from(&mut self, provider: Provider, resource: ResourceType, new_cost: u32) {
        let slot = &mut self.costs[provider.index()][resource.index()];
        if new_cost < *slot {
            *slot = new_cost;
        } else if new_cost > *slot {
            tracing::debug!(?provider, ?resource, current = *slot, new_cost, "ignoring trading cost increase");
        }
    }

    /// Total gold to pay for a list of purchases.
    #[must_use]
    pub fn compute_cost(&self, purchases: &[BoughtResources]) -> u32 {
        purchases
            .iter()
            .map(|bought| {
                bought
                    .resources
                    .iter()
                    .map(|(r, qty)| qty * self.cost(bought.provider, r))
                    .sum::<u32>()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_costs() {
        let rules = TradingRules::new(2);
        assert_eq!(rules.default_cost(), 2);
        for resource in ResourceType::ALL {
            assert_eq!(rules.unit_cost(resource), 2);
            assert_eq!(rules.cost(Provider::LeftPlayer, resource), 2);
            assert_eq!(rules.cost(Provider::RightPlayer, resource), 2);
        }
    }

    #[test]
    fn test_reduce_cost() {
        let mut rules = TradingRules::new(2);
        rules.reduce_cost(ResourceType::Glass, 1);

        assert_eq!(rules.unit_cost(ResourceType::Glass), 1);
        assert_eq!(rules.cost(Provider::LeftPlayer, ResourceType::Glass), 1);
        assert_eq!(rules.cost(Provider::RightPlayer, ResourceType::Glass), 1);
        assert_eq!(rules.unit_cost(ResourceType::Wood), 2);
    }

    #[test]
    fn test_reduce_never_raises() {
        let mut rules = TradingRules::new(2);
        rules.reduce_cost(ResourceType::Ore, 1);
        rules.reduce_cost(ResourceType::Ore, 3);
        assert_eq!(rules.unit_cost(ResourceType::Ore), 1);

        rules.reduce_cost(ResourceType::Ore, 0);
        assert_eq!(rules.unit_cost(ResourceType::Ore), 0);
    }

    #[test]
    fn test_reduce_from_one_provider() {
        let mut rules = TradingRules::new(2);
        rules.reduce_cost_from(Provider::RightPlayer, ResourceType::Clay, 1);

        assert_eq!(rules.cost(Provider::LeftPlayer, ResourceType::Clay), 2);
        assert_eq!(rules.cost(Provider::RightPlayer, ResourceType::Clay), 1);
        assert_eq!(rules.unit_cost(ResourceType::Clay), 1);
    }

    #[test]
    fn test_compute_cost() {
        let mut rules = TradingRules::new(2);
        rules.reduce_cost_from(Provider::LeftPlayer, ResourceType::Wood, 1);

        let purchases = [
            BoughtResources::new(
                Provider::LeftPlayer,
                ResourceSet::of(ResourceType::Wood, 2).with(ResourceType::Loom, 1),
            ),
            BoughtResources::new(Provider::RightPlayer, ResourceSet::of(ResourceType::Wood, 1)),
        ];

        // 2 wood at 1 + 1 loom at 2 + 1 wood at 2
        assert_eq!(rules.compute_cost(&purchases), 6);
        assert_eq!(rules.compute_cost(&[]), 0);
    }
}
