//! Observability hook for pipeline state transitions.
//!
//! The pipeline itself logs nothing. It reports every transition to an
//! `Observer` supplied by its caller. `TracingObserver` is the default and
//! forwards transitions to `tracing`; closures work too.

use serde::Serialize;

use crate::model::MissionDescription;

/// States a mission passes through in one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipelineState {
    Start,
    SafetyChecked,
    Planned,
    /// Risk tier scored (risk flow only).
    Assessed,
    Executed,
    Validated,
    Done,
    Aborted,
    Rejected,
    Error,
}

impl PipelineState {
    /// Whether the run ends here.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Done | Self::Aborted | Self::Rejected | Self::Error
        )
    }
}

/// One state change, with the mission it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    pub mission: &'a MissionDescription,
    pub from: PipelineState,
    pub to: PipelineState,

    /// The stage's reason or a short note on what happened.
    pub detail: &'a str,
}

/// Receives pipeline transitions.
pub trait Observer: Send + Sync {
    fn on_transition(&self, transition: &Transition<'_>);
}

impl<F> Observer for F
where
    F: Fn(&Transition<'_>) + Send + Sync,
{
    fn on_transition(&self, transition: &Transition<'_>) {
        self(transition);
    }
}

/// Emits each transition as a `tracing` event.
///
/// Intermediate steps log at `debug` and the final transition at `info`,
/// except rejections (`warn`) and faults (`error`).
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_transition(&self, t: &Transition<'_>) {
        let mission = t.mission.name.as_deref().unwrap_or("-");
        let orbit = t.mission.orbit.as_str();
        let duration_days = t.mission.duration_days;

        match t.to {
            PipelineState::Aborted | PipelineState::Rejected => tracing::warn!(
                mission,
                orbit,
                duration_days,
                from = ?t.from,
                to = ?t.to,
                "{}",
                t.detail
            ),
            PipelineState::Error => tracing::error!(
                mission,
                orbit,
                duration_days,
                from = ?t.from,
                to = ?t.to,
                "{}",
                t.detail
            ),
            to if to.is_terminal() => tracing::info!(
                mission,
                orbit,
                duration_days,
                from = ?t.from,
                to = ?t.to,
                "{}",
                t.detail
            ),
            _ => tracing::debug!(
                mission,
                orbit,
                duration_days,
                from = ?t.from,
                to = ?t.to,
                "{}",
                t.detail
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    #[test]
    fn closures_are_observers() {
        let seen = Mutex::new(Vec::new());
        let observer = |t: &Transition<'_>| seen.lock().unwrap().push((t.from, t.to));

        let mission = MissionDescription::new("LEO", 30);
        observer.on_transition(&Transition {
            mission: &mission,
            from: PipelineState::Start,
            to: PipelineState::SafetyChecked,
            detail: "safety checks passed",
        });

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(PipelineState::Start, PipelineState::SafetyChecked)]
        );
    }

    #[test]
    fn terminal_states() {
        assert!(PipelineState::Done.is_terminal());
        assert!(PipelineState::Error.is_terminal());
        assert!(!PipelineState::Planned.is_terminal());
        assert!(!PipelineState::Assessed.is_terminal());
        assert!(!PipelineState::Validated.is_terminal());
    }
}
