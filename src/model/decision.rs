//! Decision types: verdicts, validation results, and risk calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a gate: whether it passed and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub ok: bool,
    pub reason: String,
}

impl Verdict {
    pub fn pass(reason: impl Into<String>) -> Self {
        Self {
            ok: true,
            reason: reason.into(),
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: reason.into(),
        }
    }
}

/// What a validator reports after looking at a plan (and its execution, if any).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub passed: bool,
    pub reason: String,
}

impl From<Verdict> for ValidationResult {
    fn from(verdict: Verdict) -> Self {
        Self {
            passed: verdict.ok,
            reason: verdict.reason,
        }
    }
}

/// A bare boolean is its own pass/fail flag.
impl From<bool> for ValidationResult {
    fn from(passed: bool) -> Self {
        let reason = if passed {
            "validator passed"
        } else {
            "validator failed"
        };
        Self {
            passed,
            reason: reason.to_string(),
        }
    }
}

/// Whatever an executor reported. The pipeline does not look inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionResult(pub Value);

impl ExecutionResult {
    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Risk tier assigned to a mission by orbit class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Recommended course of action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Proceed,
    Hold,
}
