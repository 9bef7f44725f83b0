//! Wonder templates.
//!
//! A wonder is static content shared read-only by the board that builds
//! it. Stage effects are applied without neighbor context, so a wonder is
//! rejected on construction if any stage effect reads neighbor boards.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;
use crate::error::{EngineError, Result};
use crate::resources::ResourceSet;

/// One buildable stage of a wonder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WonderStage {
    /// Resources needed to build the stage.
    #[serde(default)]
    pub cost: ResourceSet,
    /// Effect applied when the stage is built.
    pub effect: Effect,
}

impl WonderStage {
    /// Create a stage.
    #[must_use]
    pub fn new(cost: ResourceSet, effect: Effect) -> Self {
        Self { cost, effect }
    }
}

/// A validated wonder template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WonderDef")]
pub struct Wonder {
    name: String,
    initial_resources: ResourceSet,
    stages: Vec<WonderStage>,
}

/// Unvalidated wonder as found in content files.
#[derive(Deserialize)]
struct WonderDef {
    name: String,
    #[serde(default)]
    initial_resources: ResourceSet,
    #[serde(default)]
    stages: Vec<WonderStage>,
}

impl TryFrom<WonderDef> for Wonder {
    type Error = EngineError;

    fn try_from(def: WonderDef) -> Result<Self> {
        Wonder::new(def.name, def.initial_resources, def.stages)
    }
}

impl Wonder {
    /// Create a wonder, rejecting stage effects that need neighbors.
    pub fn new(
        name: impl Into<String>,
        initial_resources: ResourceSet,
        stages: Vec<WonderStage>,
    ) -> Result<Self> {
        let name = name.into();
        if let Some(idx) = stages.iter().position(|s| s.effect.requires_neighbors()) {
            return Err(EngineError::NeighborScopedStageEffect {
                wonder: name,
                stage: idx + 1,
            });
        }
        Ok(Self {
            name,
            initial_resources,
            stages,
        })
    }

    /// Parse and validate a wonder from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let def: WonderDef = serde_json::from_str(json)?;
        Wonder::try_from(def)
    }

    /// Wonder name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resources the wonder produces from the start.
    #[must_use]
    pub fn initial_resources(&self) -> &ResourceSet {
        &self.initial_resources
    }

    /// Number of stages, which is also the maximum level.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// All stages in build order.
    #[must_use]
    pub fn stages(&self) -> &[WonderStage] {
        &self.stages
    }

    /// Stage reached at a 1-based level. Level 0 has no stage.
    #[must_use]
    pub fn stage(&self, level: usize) -> Option<&WonderStage> {
        level.checked_sub(1).and_then(|idx| self.stages.get(idx))
    }
}
