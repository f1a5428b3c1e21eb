//! Run results: what the pipeline hands back to its caller.

use serde::{Deserialize, Serialize};

use super::{
    decision::{Action, ExecutionResult, RiskLevel, ValidationResult, Verdict},
    mission::{MissionDescription, Orbit},
    plan::Plan,
};

/// Terminal status of a pipeline run. Every run ends in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    /// The safety screen refused the mission. No plan was built.
    Aborted,

    /// The plan was built but failed validation.
    Rejected,

    /// Every stage passed.
    Approved,

    /// Execution or validation raised instead of returning a verdict.
    Error,
}

/// A stage that can fault. The safety screen and planners are total, so they never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Execution,
    Validation,
}

/// A fault captured at a stage boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageError {
    pub stage: Stage,
    pub message: String,
}

/// Everything one `run_mission` call produced.
///
/// At most one of `execution_result`/`execution_error` is set, and likewise
/// for validation. A later stage's fields are only set if it ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub mission_spec: MissionDescription,
    pub status: RunStatus,
    pub safety: Verdict,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_result: Option<ExecutionResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_result: Option<ValidationResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_error: Option<String>,

    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<StageError>,
}

impl RunResult {
    /// A result that has only been through the safety screen.
    ///
    /// Starts out `Aborted`; later stages overwrite the status as they pass.
    pub(crate) fn screened(mission: MissionDescription, safety: Verdict) -> Self {
        Self {
            mission_spec: mission,
            status: RunStatus::Aborted,
            safety,
            plan: None,
            execution_result: None,
            execution_error: None,
            validation_result: None,
            validation_error: None,
            success: false,
            error: None,
        }
    }

    /// Record a fault raised by `stage` and end the run in `Error`.
    pub(crate) fn fault(&mut self, stage: Stage, message: String) {
        match stage {
            Stage::Execution => self.execution_error = Some(message.clone()),
            Stage::Validation => self.validation_error = Some(message.clone()),
        }
        self.status = RunStatus::Error;
        self.success = false;
        self.error = Some(StageError { stage, message });
    }

    /// The human-readable reason behind the terminal status.
    pub fn reason(&self) -> &str {
        match self.status {
            RunStatus::Aborted => &self.safety.reason,
            RunStatus::Rejected | RunStatus::Approved => self
                .validation_result
                .as_ref()
                .map_or("", |v| v.reason.as_str()),
            RunStatus::Error => self.error.as_ref().map_or("", |e| e.message.as_str()),
        }
    }
}

/// Outcome of `simulate_mission`, tagged by `status` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SimulationOutcome {
    /// The safety screen refused the mission.
    Aborted { reason: String },

    /// The plan failed feasibility validation.
    Rejected { reason: String },

    /// Safe and feasible.
    Approved { decision: Action, plan: Plan },

    /// Risk-assessment shortcut: no plan, just a scored recommendation.
    Simulated {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mission_name: Option<String>,
        orbit: Orbit,
        decision: Action,
        risk_level: RiskLevel,
        confidence: f64,
        notes: String,
    },
}

impl SimulationOutcome {
    /// Whether the outcome clears the mission to go ahead.
    pub fn is_go(&self) -> bool {
        match self {
            Self::Aborted { .. } | Self::Rejected { .. } => false,
            Self::Approved { .. } => true,
            Self::Simulated { decision, .. } => *decision == Action::Proceed,
        }
    }
}
