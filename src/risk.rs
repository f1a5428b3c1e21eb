//! Risk assessment: the coarse decision path.
//!
//! Scores a mission straight from its orbit class, without building a
//! plan. Never combined with the safety screen or validator in one run.

use crate::{
    model::{Action, MissionDescription, Orbit, RiskLevel, SimulationOutcome},
    observer::{Observer, PipelineState, Transition},
};

const NOTES: &str = "Autonomous decision generated via modular logic";

/// Risk tier and confidence for a mission's orbit.
pub fn assess(mission: &MissionDescription) -> (RiskLevel, f64) {
    match mission.orbit {
        Orbit::Leo => (RiskLevel::Low, 0.9),
        Orbit::Geo => (RiskLevel::Medium, 0.75),
        Orbit::Meo | Orbit::Other(_) => (RiskLevel::High, 0.6),
    }
}

/// Hold high-risk missions; let everything else proceed.
pub fn decide(risk: RiskLevel) -> Action {
    match risk {
        RiskLevel::High => Action::Hold,
        RiskLevel::Low | RiskLevel::Medium => Action::Proceed,
    }
}

/// Run the risk-assessment flow end to end, reporting each step to `observer`.
pub fn simulate(mission: &MissionDescription, observer: &dyn Observer) -> SimulationOutcome {
    let (risk_level, confidence) = assess(mission);
    let assessed = format!("risk {risk_level:?}, confidence {confidence:.2}");
    observer.on_transition(&Transition {
        mission,
        from: PipelineState::Start,
        to: PipelineState::Assessed,
        detail: &assessed,
    });

    let decision = decide(risk_level);
    observer.on_transition(&Transition {
        mission,
        from: PipelineState::Assessed,
        to: PipelineState::Done,
        detail: match decision {
            Action::Proceed => "proceed",
            Action::Hold => "hold",
        },
    });

    SimulationOutcome::Simulated {
        mission_name: mission.name.clone(),
        orbit: mission.orbit.clone(),
        decision,
        risk_level,
        confidence,
        notes: NOTES.to_string(),
    }
}
