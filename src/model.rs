//! Core data model for launchpad.
//!
//! These types carry a mission through the decision pipeline:
//! the mission description, the plan built for it, the verdicts
//! each gate hands down, and the result returned to the caller.

mod decision;
mod mission;
mod plan;
mod run;

pub use decision::{Action, ExecutionResult, RiskLevel, ValidationResult, Verdict};
pub use mission::{MissionDescription, MissionError, Orbit};
pub use plan::{PAYLOAD_READY, Plan, PlanMetadata, PlanStep};
pub use run::{RunResult, RunStatus, SimulationOutcome, Stage, StageError};
