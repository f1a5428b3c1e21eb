//! Output formatting for CLI display.

use launchpad::model::{
    Action, MissionDescription, RiskLevel, RunResult, RunStatus, SimulationOutcome, Stage,
};

/// One-line summary of a pipeline run.
pub(super) fn describe_run(result: &RunResult) -> String {
    let mission = result.mission_spec.label();
    match result.status {
        RunStatus::Approved => format!("{mission}: APPROVED"),
        RunStatus::Aborted => format!("{mission}: ABORTED ({})", result.reason()),
        RunStatus::Rejected => format!("{mission}: REJECTED ({})", result.reason()),
        RunStatus::Error => {
            let stage = result
                .error
                .as_ref()
                .map_or("unknown stage", |e| stage_name(e.stage));
            format!("{mission}: ERROR in {stage} ({})", result.reason())
        }
    }
}

/// One-line summary of a simulation outcome.
pub(super) fn describe_simulation(
    mission: &MissionDescription,
    outcome: &SimulationOutcome,
) -> String {
    let label = mission.label();
    match outcome {
        SimulationOutcome::Aborted { reason } => format!("{label}: ABORTED ({reason})"),
        SimulationOutcome::Rejected { reason } => format!("{label}: REJECTED ({reason})"),
        SimulationOutcome::Approved { decision, .. } => {
            format!("{label}: APPROVED, {}", action_name(*decision))
        }
        SimulationOutcome::Simulated {
            decision,
            risk_level,
            confidence,
            ..
        } => format!(
            "{label}: {} (risk {}, confidence {confidence:.2})",
            action_name(*decision),
            risk_name(*risk_level),
        ),
    }
}

fn stage_name(stage: Stage) -> &'static str {
    match stage {
        Stage::Execution => "execution",
        Stage::Validation => "validation",
    }
}

fn action_name(action: Action) -> &'static str {
    match action {
        Action::Proceed => "PROCEED",
        Action::Hold => "HOLD",
    }
}

fn risk_name(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "low",
        RiskLevel::Medium => "medium",
        RiskLevel::High => "high",
    }
}
