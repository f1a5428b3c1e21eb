//! Plans: what a planner intends to do for a mission.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::mission::{MissionDescription, Orbit};

/// Payload status stamped on every freshly built plan.
pub const PAYLOAD_READY: &str = "READY";

/// A concrete plan produced from one mission description.
///
/// `target_orbit` and `estimated_duration` are copied verbatim from the mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub target_orbit: Orbit,
    pub estimated_duration: i64,
    pub payload_status: String,

    /// Ordered steps. Empty for summary plans.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<PlanStep>,

    pub metadata: PlanMetadata,
}

impl Plan {
    /// The summary fields every plan carries, with no steps.
    pub fn summary(mission: &MissionDescription, source: &str) -> Self {
        Self {
            target_orbit: mission.orbit.clone(),
            estimated_duration: mission.duration_days,
            payload_status: PAYLOAD_READY.to_string(),
            steps: Vec::new(),
            metadata: PlanMetadata {
                source: source.to_string(),
                mission: mission.clone(),
            },
        }
    }
}

/// One step of a plan: a name plus its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    pub name: String,

    #[serde(default)]
    pub params: Map<String, Value>,
}

impl PlanStep {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Map::new(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Provenance: which planner built the plan, and from what.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMetadata {
    /// Name of the planner strategy (e.g. `"summary"`, `"stepwise"`).
    pub source: String,

    pub mission: MissionDescription,
}
