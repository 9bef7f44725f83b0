//! Resource production of a board.
//!
//! A `Production` is made of fixed resource sets, always produced, and
//! choice groups: lists of mutually exclusive alternatives of which
//! exactly one is realized for a given need.
//!
//! ## Choosing alternatives
//!
//! Choice groups are not independent. A need of {wood, clay} against the
//! groups [wood | clay] and [wood | ore] can only be met by taking clay
//! from the first group and wood from the second, which a per-group greedy
//! pass would miss. `best_output_for` therefore walks every combination.
//! Boards rarely hold more than a handful of choice groups, so the search
//! stays small.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::resource_set::{ResourceSet, ResourceType};

/// Mutually exclusive production alternatives.
pub type ChoiceGroup = SmallVec<[ResourceSet; 4]>;

/// Fixed resources plus either/or alternatives.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Production {
    #[serde(default)]
    fixed: Vec<ResourceSet>,
    #[serde(default)]
    choices: Vec<ChoiceGroup>,
}

impl Production {
    /// Create an empty production.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a set that is always produced.
    pub fn add_fixed(&mut self, resources: ResourceSet) {
        if !resources.is_empty() {
            self.fixed.push(resources);
        }
    }

    /// Always produce `quantity` of one kind.
    pub fn add_fixed_resource(&mut self, resource: ResourceType, quantity: u32) {
        self.add_fixed(ResourceSet::of(resource, quantity));
    }

    /// Add a group of mutually exclusive alternatives.
    ///
    /// An empty group can never be realized and is ignored.
    pub fn add_choice(&mut self, alternatives: impl IntoIterator<Item = ResourceSet>) {
        let group: ChoiceGroup = alternatives.into_iter().collect();
        if !group.is_empty() {
            self.choices.push(group);
        }
    }

    /// Produce one unit of any of the given kinds.
    pub fn add_any_of(&mut self, resources: &[ResourceType]) {
        self.add_choice(resources.iter().map(|&r| ResourceSet::of(r, 1)));
    }

    /// Add everything another production provides.
    pub fn add_all(&mut self, other: &Production) {
        self.fixed.extend(other.fixed.iter().copied());
        self.choices.extend(other.choices.iter().cloned());
    }

    /// Builder form of [`Production::add_fixed`].
    #[must_use]
    pub fn with_fixed(mut self, resources: ResourceSet) -> Self {
        self.add_fixed(resources);
        self
    }

    /// Builder form of [`Production::add_choice`].
    #[must_use]
    pub fn with_choice(mut self, alternatives: impl IntoIterator<Item = ResourceSet>) -> Self {
        self.add_choice(alternatives);
        self
    }

    /// Union of all fixed sets.
    #[must_use]
    pub fn fixed_output(&self) -> ResourceSet {
        let mut out = ResourceSet::new();
        for set in &self.fixed {
            out.union(set);
        }
        out
    }

    /// The choice groups, in declaration order.
    #[must_use]
    pub fn choice_groups(&self) -> &[ChoiceGroup] {
        &self.choices
    }

    /// Whether nothing is produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty() && self.choices.is_empty()
    }

    /// Best realizable output for a need.
    ///
    /// Returns the fixed output plus one alternative from every choice
    /// group, picking the combination that covers the most of `need`. Ties
    /// go to the first combination in declaration order.
    #[must_use]
    pub fn best_output_for(&self, need: &ResourceSet) -> ResourceSet {
        let base = self.fixed_output();
        if self.choices.is_empty() {
            return base;
        }

        let target = need.total();
        let mut indices = vec![0usize; self.choices.len()];
        let mut best: Option<(u32, ResourceSet)> = None;
        let mut visited = 0usize;

        loop {
            visited += 1;
            let mut output = base;
            for (group, &i) in self.choices.iter().zip(&indices) {
                output.union(&group[i]);
            }

            let score = output.overlap(need);
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, output));
            }

            if score == target || !self.next_combination(&mut indices) {
                break;
            }
        }

        tracing::trace!(groups = self.choices.len(), visited, "searched production choices");
        best.map_or(base, |(_, output)| output)
    }

    /// Whether the best realizable output covers `need` entirely.
    #[must_use]
    pub fn can_produce(&self, need: &ResourceSet) -> bool {
        self.best_output_for(need).contains(need)
    }

    /// Advance `indices` to the next combination, last group fastest.
    ///
    /// Returns false once every combination has been visited.
    fn next_combination(&self, indices: &mut [usize]) -> bool {
        for (pos, group) in self.choices.iter().enumerate().rev() {
            indices[pos] += 1;
            if indices[pos] < group.len() {
                return true;
            }
            indices[pos] = 0;
        }
        false
    }
}
