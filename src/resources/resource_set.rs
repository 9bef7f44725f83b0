//! Resource kinds and resource multisets.
//!
//! `ResourceSet` is a fixed-size array indexed by `ResourceType`, so every
//! update is allocation-free. It serializes as a map of non-zero
//! quantities, e.g. `{"wood": 2, "glass": 1}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of resource kinds.
pub const RESOURCE_TYPE_COUNT: usize = 7;

/// A kind of resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Wood,
    Stone,
    Ore,
    Clay,
    Glass,
    Papyrus,
    Loom,
}

impl ResourceType {
    /// Every resource kind, in index order.
    pub const ALL: [ResourceType; RESOURCE_TYPE_COUNT] = [
        ResourceType::Wood,
        ResourceType::Stone,
        ResourceType::Ore,
        ResourceType::Clay,
        ResourceType::Glass,
        ResourceType::Papyrus,
        ResourceType::Loom,
    ];

    /// Raw materials, produced by brown cards.
    pub const RAW: [ResourceType; 4] = [
        ResourceType::Wood,
        ResourceType::Stone,
        ResourceType::Ore,
        ResourceType::Clay,
    ];

    /// Manufactured goods, produced by grey cards.
    pub const MANUFACTURED: [ResourceType; 3] =
        [ResourceType::Glass, ResourceType::Papyrus, ResourceType::Loom];

    /// Array index of this kind.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this kind is a raw material.
    #[must_use]
    pub const fn is_raw(self) -> bool {
        matches!(
            self,
            ResourceType::Wood | ResourceType::Stone | ResourceType::Ore | ResourceType::Clay
        )
    }
}

/// Multiset of resource quantities. Absent kinds have quantity 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BTreeMap<ResourceType, u32>", into = "BTreeMap<ResourceType, u32>")]
pub struct ResourceSet {
    quantities: [u32; RESOURCE_TYPE_COUNT],
}

impl ResourceSet {
    /// The empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            quantities: [0; RESOURCE_TYPE_COUNT],
        }
    }

    /// A set holding `quantity` of a single kind.
    #[must_use]
    pub fn of(resource: ResourceType, quantity: u32) -> Self {
        let mut set = Self::new();
        set.add(resource, quantity);
        set
    }

    /// Add `quantity` of a kind.
    pub fn add(&mut self, resource: ResourceType, quantity: u32) {
        let slot = &mut self.quantities[resource.index()];
        *slot = slot.saturating_add(quantity);
    }

    /// Add `quantity` of a kind (builder pattern).
    #[must_use]
    pub fn with(mut self, resource: ResourceType, quantity: u32) -> Self {
        self.add(resource, quantity);
        self
    }

    /// Add every quantity of `other` to this set.
    pub fn union(&mut self, other: &ResourceSet) {
        for resource in ResourceType::ALL {
            self.add(resource, other.quantity(resource));
        }
    }

    /// Quantity held of a kind.
    #[must_use]
    pub fn quantity(&self, resource: ResourceType) -> u32 {
        self.quantities[resource.index()]
    }

    /// Whether every quantity of `other` is covered by this set.
    #[must_use]
    pub fn contains(&self, other: &ResourceSet) -> bool {
        ResourceType::ALL
            .iter()
            .all(|&r| self.quantity(r) >= other.quantity(r))
    }

    /// Per-kind excess of this set over `other`.
    ///
    /// Shortfalls clamp to zero; this is not a true subtraction.
    #[must_use]
    pub fn difference(&self, other: &ResourceSet) -> ResourceSet {
        let mut diff = ResourceSet::new();
        for resource in ResourceType::ALL {
            diff.quantities[resource.index()] =
                self.quantity(resource).saturating_sub(other.quantity(resource));
        }
        diff
    }

    /// How much of `need` this set covers: `Σ min(self, need)` over all kinds.
    #[must_use]
    pub fn overlap(&self, need: &ResourceSet) -> u32 {
        ResourceType::ALL
            .iter()
            .map(|&r| self.quantity(r).min(need.quantity(r)))
            .sum()
    }

    /// Total quantity across all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.quantities.iter().sum()
    }

    /// Whether the total quantity is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate over kinds with a non-zero quantity.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceType, u32)> + '_ {
        ResourceType::ALL
            .into_iter()
            .map(|r| (r, self.quantity(r)))
            .filter(|&(_, q)| q > 0)
    }
}

impl FromIterator<(ResourceType, u32)> for ResourceSet {
    fn from_iter<I: IntoIterator<Item = (ResourceType, u32)>>(iter: I) -> Self {
        let mut set = ResourceSet::new();
        for (resource, quantity) in iter {
            set.add(resource, quantity);
        }
        set
    }
}

impl From<BTreeMap<ResourceType, u32>> for ResourceSet {
    fn from(map: BTreeMap<ResourceType, u32>) -> Self {
        map.into_iter().collect()
    }
}

impl From<ResourceSet> for BTreeMap<ResourceType, u32> {
    fn from(set: ResourceSet) -> Self {
        set.iter().collect()
    }
}
