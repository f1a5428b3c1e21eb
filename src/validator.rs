//! Feasibility validation: does the plan stay inside operating limits?

use crate::model::{ExecutionResult, Plan, ValidationResult, Verdict};

/// Longest mission the fleet can support, in days.
pub const MAX_DURATION_DAYS: i64 = 365;

/// A validator failed to produce a verdict at all.
///
/// Distinct from a failed validation, which is a normal `ValidationResult`.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Checks a plan, optionally alongside what executing it produced.
pub trait Validator: Send + Sync {
    fn validate(
        &self,
        plan: &Plan,
        execution: Option<&ExecutionResult>,
    ) -> Result<ValidationResult, ValidationError>;
}

/// Check a plan against the feasibility limits. First failing rule wins.
pub fn validate_plan(plan: &Plan) -> Verdict {
    if plan.estimated_duration > MAX_DURATION_DAYS {
        return Verdict::fail("duration exceeds safe limits");
    }

    if !plan.target_orbit.is_supported() {
        return Verdict::fail("unsupported orbit type");
    }

    Verdict::pass("plan validated")
}

/// The standard validator: feasibility limits only. Execution output is not consulted.
pub struct FeasibilityValidator;

impl Validator for FeasibilityValidator {
    fn validate(
        &self,
        plan: &Plan,
        _execution: Option<&ExecutionResult>,
    ) -> Result<ValidationResult, ValidationError> {
        Ok(validate_plan(plan).into())
    }
}
